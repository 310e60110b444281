use crate::arith::{half_add, half_mul, half_neg, half_sub};
use crate::convert::{float_to_half, half_to_float};
use std::cmp::Ordering;
use std::num::FpCategory;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};

/// A half-precision (binary16) floating point value: 1 sign bit, 5
/// exponent bits (bias 15), 10 fraction bits.
///
/// Every 16-bit pattern is a valid `F16`, so construction and arithmetic
/// are total. Addition, subtraction, multiplication and negation go
/// through the integer bit kernel in [`crate::arith`]; division and
/// remainder upconvert to `f32` and narrow the result. Widening to `f32`
/// is always exact.
#[derive(Clone, Copy, Default)]
pub struct F16 {
    bits: u16,
}

impl F16 {
    /// Positive zero.
    pub const ZERO: F16 = F16::from_bits(0x0000);
    /// Negative zero.
    pub const NEG_ZERO: F16 = F16::from_bits(0x8000);
    /// 1.0
    pub const ONE: F16 = F16::from_bits(0x3c00);
    /// -1.0
    pub const NEG_ONE: F16 = F16::from_bits(0xbc00);
    /// 2.0
    pub const TWO: F16 = F16::from_bits(0x4000);
    /// 0.5
    pub const HALF: F16 = F16::from_bits(0x3800);
    /// Largest finite value, 65504.
    pub const MAX: F16 = F16::from_bits(0x7bff);
    /// Smallest finite value, -65504.
    pub const MIN: F16 = F16::from_bits(0xfbff);
    /// Smallest positive normal value, 2^-14.
    pub const MIN_POSITIVE: F16 = F16::from_bits(0x0400);
    /// Largest subnormal value, 1023 * 2^-24.
    pub const MAX_SUBNORMAL: F16 = F16::from_bits(0x03ff);
    /// Smallest positive subnormal value, 2^-24.
    pub const MIN_SUBNORMAL: F16 = F16::from_bits(0x0001);
    /// Machine epsilon, 2^-10: the gap between 1.0 and the next value up.
    pub const EPSILON: F16 = F16::from_bits(0x1400);
    /// Positive infinity.
    pub const INFINITY: F16 = F16::from_bits(0x7c00);
    /// Negative infinity.
    pub const NEG_INFINITY: F16 = F16::from_bits(0xfc00);
    /// Quiet NaN.
    pub const NAN: F16 = F16::from_bits(0x7e00);
    /// Euler's number, e, rounded to the nearest half.
    pub const E: F16 = F16::from_bits(0x4170);
    /// Archimedes' constant, pi, rounded to the nearest half.
    pub const PI: F16 = F16::from_bits(0x4248);

    // --- Construction and raw access ---

    /// Wrap a raw binary16 bit pattern.
    pub const fn from_bits(bits: u16) -> Self {
        Self { bits }
    }

    /// The raw binary16 bit pattern.
    pub const fn to_bits(self) -> u16 {
        self.bits
    }

    /// Round an `f32` to the nearest half, ties to even.
    pub fn from_f32(value: f32) -> Self {
        Self::from_bits(float_to_half(value.to_bits()))
    }

    /// Round an `f64` to the nearest half. The value narrows through
    /// `f32` first; the wider source grants no extra precision.
    pub fn from_f64(value: f64) -> Self {
        Self::from_f32(value as f32)
    }

    /// Convert an integer, widening through `f32`. Values beyond the
    /// finite half range saturate to the infinities.
    pub fn from_i32(value: i32) -> Self {
        Self::from_f32(value as f32)
    }

    /// The exact `f32` value of this half.
    pub fn to_f32(self) -> f32 {
        f32::from_bits(half_to_float(self.bits))
    }

    /// The exact `f64` value of this half.
    pub fn to_f64(self) -> f64 {
        self.to_f32() as f64
    }

    // --- Classification ---
    //
    // All predicates are mask tests on the raw pattern; none of them
    // touch a float register.

    /// `true` when the exponent field is all ones and the fraction is
    /// non-zero.
    pub const fn is_nan(self) -> bool {
        (self.bits & 0x7fff) > 0x7c00
    }

    /// `true` for either infinity.
    pub const fn is_infinite(self) -> bool {
        (self.bits & 0x7fff) == 0x7c00
    }

    /// `true` for anything except infinities and NaN.
    pub const fn is_finite(self) -> bool {
        (self.bits & 0x7c00) != 0x7c00
    }

    /// `true` for values with a full implicit leading bit: neither zero,
    /// subnormal, infinite nor NaN.
    pub const fn is_normal(self) -> bool {
        let e = self.bits & 0x7c00;
        e != 0 && e != 0x7c00
    }

    /// `true` for values below the normal range with reduced precision.
    pub const fn is_subnormal(self) -> bool {
        (self.bits & 0x7c00) == 0 && (self.bits & 0x03ff) != 0
    }

    /// `true` when the sign bit is clear; `+0.0` and NaNs without the
    /// sign bit count as positive.
    pub const fn is_sign_positive(self) -> bool {
        self.bits & 0x8000 == 0
    }

    /// `true` when the sign bit is set.
    pub const fn is_sign_negative(self) -> bool {
        self.bits & 0x8000 != 0
    }

    /// The IEEE category of the value.
    pub const fn classify(self) -> FpCategory {
        let e = self.bits & 0x7c00;
        let m = self.bits & 0x03ff;
        match (e, m) {
            (0, 0) => FpCategory::Zero,
            (0, _) => FpCategory::Subnormal,
            (0x7c00, 0) => FpCategory::Infinite,
            (0x7c00, _) => FpCategory::Nan,
            _ => FpCategory::Normal,
        }
    }

    // --- Sign-bit surgery ---

    /// Absolute value; clears the sign bit.
    pub const fn abs(self) -> Self {
        Self::from_bits(self.bits & 0x7fff)
    }

    /// This magnitude with `sign`'s sign bit.
    pub const fn copysign(self, sign: Self) -> Self {
        Self::from_bits((self.bits & 0x7fff) | (sign.bits & 0x8000))
    }

    /// `1.0` with the sign of `self` (zeros included); NaN stays NaN.
    pub fn signum(self) -> Self {
        if self.is_nan() {
            self
        } else if self.is_sign_negative() {
            Self::NEG_ONE
        } else {
            Self::ONE
        }
    }
}

// --- Conversions out (exact widenings only) ---

impl From<F16> for f32 {
    fn from(value: F16) -> f32 {
        value.to_f32()
    }
}

impl From<F16> for f64 {
    fn from(value: F16) -> f64 {
        value.to_f64()
    }
}

// --- Arithmetic operators ---

impl Add for F16 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::from_bits(half_add(self.bits, rhs.bits))
    }
}

impl Sub for F16 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::from_bits(half_sub(self.bits, rhs.bits))
    }
}

impl Mul for F16 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::from_bits(half_mul(self.bits, rhs.bits))
    }
}

impl Div for F16 {
    type Output = Self;
    // The one operation that rides on f32. Narrowing the f32 quotient
    // back to binary16 still rounds once in effect: binary32 carries
    // more than twice the binary16 significand, so the double rounding
    // cannot change the result.
    fn div(self, rhs: Self) -> Self {
        Self::from_f32(self.to_f32() / rhs.to_f32())
    }
}

impl Rem for F16 {
    type Output = Self;
    // Remainder is exact in f32 whenever both operands are halves, so
    // the narrowing below never rounds a finite result.
    fn rem(self, rhs: Self) -> Self {
        Self::from_f32(self.to_f32() % rhs.to_f32())
    }
}

impl Neg for F16 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::from_bits(half_neg(self.bits))
    }
}

// --- Assign operators ---

impl AddAssign for F16 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for F16 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for F16 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl DivAssign for F16 {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl RemAssign for F16 {
    fn rem_assign(&mut self, rhs: Self) {
        *self = *self % rhs;
    }
}

// --- Comparison ---
//
// Ordering works on the decomposed sign and exponent/fraction fields,
// never through a float conversion. The exponent and fraction fields
// concatenated compare as magnitudes (subnormals included), negative
// values order by descending magnitude, both zeros are equal, and NaN is
// unordered against everything.

impl PartialEq for F16 {
    fn eq(&self, other: &Self) -> bool {
        if self.is_nan() || other.is_nan() {
            return false;
        }
        if (self.bits | other.bits) & 0x7fff == 0 {
            return true;
        }
        self.bits == other.bits
    }
}

impl PartialOrd for F16 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.is_nan() || other.is_nan() {
            return None;
        }
        let lhs_mag = self.bits & 0x7fff;
        let rhs_mag = other.bits & 0x7fff;
        if lhs_mag == 0 && rhs_mag == 0 {
            return Some(Ordering::Equal);
        }
        Some(
            match (self.is_sign_negative(), other.is_sign_negative()) {
                (false, false) => lhs_mag.cmp(&rhs_mag),
                (true, true) => rhs_mag.cmp(&lhs_mag),
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
            },
        )
    }
}
