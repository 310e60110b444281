//! Conformance sweep for the `half` crate.
//!
//! Walks every one of the 65536 binary16 patterns checking the
//! round-trip and classification invariants, then sweeps value pairs
//! comparing the integer kernel against an f32 reference. The reference
//! is exact: binary32 carries more than twice the binary16 significand,
//! so computing in f32 and narrowing matches direct rounding for
//! addition, subtraction, multiplication and division.
//!
//! Exits nonzero when any mismatch is found.

use half::{F16, float_to_half, half_add, half_mul, half_to_float, init_stdout_logger};
use log::{LevelFilter, error, info};

/// Stride through the 16-bit patterns for the pairwise sweeps. Odd, so
/// the sample hits every exponent with assorted fractions.
const STRIDE: u32 = 13;

fn main() {
    init_stdout_logger(LevelFilter::Info);

    let mut failures = 0usize;
    failures += check_round_trip();
    failures += check_classification();
    failures += check_arithmetic();

    if failures == 0 {
        info!("conformance sweep passed");
    } else {
        error!("conformance sweep failed: {failures} mismatches");
        std::process::exit(1);
    }
}

fn check_round_trip() -> usize {
    let mut failures = 0;
    for bits in 0..=u16::MAX {
        let widened = half_to_float(bits);
        let narrowed = float_to_half(widened);
        if narrowed != bits {
            error!("round trip: {bits:#06x} -> {widened:#010x} -> {narrowed:#06x}");
            failures += 1;
        }
    }
    info!("round trip: 65536 patterns checked");
    failures
}

fn check_classification() -> usize {
    let mut failures = 0;
    for bits in 0..=u16::MAX {
        let h = F16::from_bits(bits);
        let f = f32::from_bits(half_to_float(bits));
        // is_normal is deliberately absent: half subnormals widen to
        // perfectly normal f32 values.
        if h.is_nan() != f.is_nan()
            || h.is_infinite() != f.is_infinite()
            || h.is_finite() != f.is_finite()
            || h.is_sign_negative() != f.is_sign_negative()
        {
            error!("classification mismatch at {bits:#06x}");
            failures += 1;
        }
    }
    info!("classification: 65536 patterns checked");
    failures
}

fn check_arithmetic() -> usize {
    let mut failures = 0;
    let patterns: Vec<u16> = (0..=u16::MAX as u32)
        .step_by(STRIDE as usize)
        .map(|bits| bits as u16)
        .filter(|&bits| !F16::from_bits(bits).is_nan())
        .collect();
    info!(
        "arithmetic: sweeping {} x {} operand pairs",
        patterns.len(),
        patterns.len()
    );

    for &a in &patterns {
        let fa = f32::from_bits(half_to_float(a));
        for &b in &patterns {
            let fb = f32::from_bits(half_to_float(b));

            let sum = half_add(a, b);
            let sum_ref = float_to_half((fa + fb).to_bits());
            if !same_value(sum, sum_ref) {
                error!("add: {a:#06x} + {b:#06x} = {sum:#06x}, reference {sum_ref:#06x}");
                failures += 1;
            }

            let prod = half_mul(a, b);
            let prod_ref = float_to_half((fa * fb).to_bits());
            if !same_value(prod, prod_ref) {
                error!("mul: {a:#06x} * {b:#06x} = {prod:#06x}, reference {prod_ref:#06x}");
                failures += 1;
            }

            let quot = F16::from_bits(a) / F16::from_bits(b);
            let quot_ref = float_to_half((fa / fb).to_bits());
            if !same_value(quot.to_bits(), quot_ref) {
                error!(
                    "div: {a:#06x} / {b:#06x} = {:#06x}, reference {quot_ref:#06x}",
                    quot.to_bits()
                );
                failures += 1;
            }
        }
    }
    info!("arithmetic: sweep complete");
    failures
}

/// Bit equality, except that any NaN matches any NaN: payloads are not
/// required to agree with the reference, NaN-ness is.
fn same_value(a: u16, b: u16) -> bool {
    a == b || (F16::from_bits(a).is_nan() && F16::from_bits(b).is_nan())
}
