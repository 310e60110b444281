//! Math functions on [`F16`]: widen to `f32`, call the host float
//! library, narrow back.
//!
//! `sqrt` and the round-to-integer group come back exactly rounded
//! (binary32 carries more than twice the binary16 significand, so the
//! intermediate rounding is absorbed); the transcendentals inherit the
//! host library's accuracy.

use crate::F16;

impl F16 {
    fn map(self, op: impl FnOnce(f32) -> f32) -> Self {
        Self::from_f32(op(self.to_f32()))
    }

    // --- Powers and roots ---

    pub fn sqrt(self) -> Self {
        self.map(f32::sqrt)
    }

    pub fn cbrt(self) -> Self {
        self.map(f32::cbrt)
    }

    pub fn powf(self, n: Self) -> Self {
        Self::from_f32(self.to_f32().powf(n.to_f32()))
    }

    pub fn powi(self, n: i32) -> Self {
        Self::from_f32(self.to_f32().powi(n))
    }

    pub fn recip(self) -> Self {
        self.map(f32::recip)
    }

    pub fn hypot(self, other: Self) -> Self {
        Self::from_f32(self.to_f32().hypot(other.to_f32()))
    }

    // --- Exponentials and logarithms ---

    pub fn exp(self) -> Self {
        self.map(f32::exp)
    }

    pub fn exp2(self) -> Self {
        self.map(f32::exp2)
    }

    pub fn exp_m1(self) -> Self {
        self.map(f32::exp_m1)
    }

    pub fn ln(self) -> Self {
        self.map(f32::ln)
    }

    pub fn ln_1p(self) -> Self {
        self.map(f32::ln_1p)
    }

    pub fn log2(self) -> Self {
        self.map(f32::log2)
    }

    pub fn log10(self) -> Self {
        self.map(f32::log10)
    }

    // --- Trigonometry ---

    pub fn sin(self) -> Self {
        self.map(f32::sin)
    }

    pub fn cos(self) -> Self {
        self.map(f32::cos)
    }

    pub fn tan(self) -> Self {
        self.map(f32::tan)
    }

    pub fn asin(self) -> Self {
        self.map(f32::asin)
    }

    pub fn acos(self) -> Self {
        self.map(f32::acos)
    }

    pub fn atan(self) -> Self {
        self.map(f32::atan)
    }

    pub fn atan2(self, other: Self) -> Self {
        Self::from_f32(self.to_f32().atan2(other.to_f32()))
    }

    pub fn sinh(self) -> Self {
        self.map(f32::sinh)
    }

    pub fn cosh(self) -> Self {
        self.map(f32::cosh)
    }

    pub fn tanh(self) -> Self {
        self.map(f32::tanh)
    }

    pub fn asinh(self) -> Self {
        self.map(f32::asinh)
    }

    pub fn acosh(self) -> Self {
        self.map(f32::acosh)
    }

    pub fn atanh(self) -> Self {
        self.map(f32::atanh)
    }

    pub fn to_degrees(self) -> Self {
        self.map(f32::to_degrees)
    }

    pub fn to_radians(self) -> Self {
        self.map(f32::to_radians)
    }

    // --- Rounding to integers ---

    pub fn floor(self) -> Self {
        self.map(f32::floor)
    }

    pub fn ceil(self) -> Self {
        self.map(f32::ceil)
    }

    /// Rounds half-way cases away from zero, like `f32::round`.
    pub fn round(self) -> Self {
        self.map(f32::round)
    }

    pub fn trunc(self) -> Self {
        self.map(f32::trunc)
    }

    pub fn fract(self) -> Self {
        self.map(f32::fract)
    }

    // --- Combined operations ---

    /// Fused multiply-add through `f32::mul_add`.
    pub fn mul_add(self, a: Self, b: Self) -> Self {
        Self::from_f32(self.to_f32().mul_add(a.to_f32(), b.to_f32()))
    }

    /// The larger of two values; a NaN operand is ignored.
    pub fn max(self, other: Self) -> Self {
        Self::from_f32(self.to_f32().max(other.to_f32()))
    }

    /// The smaller of two values; a NaN operand is ignored.
    pub fn min(self, other: Self) -> Self {
        Self::from_f32(self.to_f32().min(other.to_f32()))
    }
}
