use half::{F16, float_to_half, half_to_float};

// --- Helpers ---

fn narrow(value: f32) -> u16 {
    float_to_half(value.to_bits())
}

fn widen(bits: u16) -> f32 {
    f32::from_bits(half_to_float(bits))
}

// --- Round trip ---

#[test]
fn test_round_trip_all_patterns() {
    // Widening is exact, so narrowing it back must reproduce every one
    // of the 65536 patterns, NaN payloads included.
    for bits in 0..=u16::MAX {
        assert_eq!(
            float_to_half(half_to_float(bits)),
            bits,
            "round trip failed for {bits:#06x}"
        );
    }
}

// --- Zeros ---

#[test]
fn test_zero_identities() {
    assert_eq!(narrow(0.0), 0x0000);
    assert_eq!(narrow(-0.0), 0x8000);
    assert_eq!(widen(0x0000), 0.0);
    assert_eq!(widen(0x8000), 0.0);
    assert!(widen(0x8000).is_sign_negative());
}

// --- Known constants ---

#[test]
fn test_known_constants() {
    assert_eq!(narrow(1.0), 0x3c00);
    assert_eq!(narrow(-1.0), 0xbc00);
    assert_eq!(narrow(2.0), 0x4000);
    assert_eq!(narrow(0.5), 0x3800);
    assert_eq!(narrow(65504.0), 0x7bff);
    // 65520 sits exactly between the largest finite half and 65536; the
    // even neighbor wins, which lands in the infinity encoding.
    assert_eq!(narrow(65520.0), 0x7c00);
}

#[test]
fn test_widen_known_values() {
    assert_eq!(widen(0x3c00), 1.0);
    assert_eq!(widen(0x4000), 2.0);
    assert_eq!(widen(0x3800), 0.5);
    assert_eq!(widen(0x7bff), 65504.0);
    assert_eq!(widen(0x4248), 3.140625);
    // 0x3555 is the nearest half to one third: 1365/4096.
    assert_eq!(widen(0x3555), 1365.0 / 4096.0);
}

// --- Nearest-even ties ---

#[test]
fn test_tie_rounds_down_to_even() {
    // 1 + 2^-11 is exactly between 0x3c00 (even fraction) and 0x3c01.
    assert_eq!(narrow(1.0 + 2f32.powi(-11)), 0x3c00);
}

#[test]
fn test_tie_rounds_up_to_even() {
    // 1 + 3 * 2^-11 is exactly between 0x3c01 and 0x3c02 (even).
    assert_eq!(narrow(1.0 + 3.0 * 2f32.powi(-11)), 0x3c02);
}

#[test]
fn test_above_tie_rounds_up() {
    assert_eq!(narrow(1.0 + 2f32.powi(-11) + 2f32.powi(-20)), 0x3c01);
}

// --- Overflow and underflow ---

#[test]
fn test_overflow_to_infinity() {
    assert_eq!(narrow(1.0e9), 0x7c00);
    assert_eq!(narrow(-1.0e9), 0xfc00);
    assert_eq!(narrow(f32::MAX), 0x7c00);
}

#[test]
fn test_underflow_to_zero() {
    assert_eq!(narrow(1.0e-10), 0x0000);
    assert_eq!(narrow(-1.0e-10), 0x8000);
    // binary32 subnormals are far below the half range.
    assert_eq!(narrow(f32::from_bits(0x0000_0001)), 0x0000);
    assert_eq!(narrow(f32::from_bits(0x8000_0001)), 0x8000);
}

// --- Subnormals ---

#[test]
fn test_narrow_into_subnormal_range() {
    // Smallest positive subnormal is 2^-24.
    assert_eq!(narrow(2f32.powi(-24)), 0x0001);
    // Exactly half of it ties back down to zero.
    assert_eq!(narrow(2f32.powi(-25)), 0x0000);
    // Three quarters of it rounds up.
    assert_eq!(narrow(1.5 * 2f32.powi(-25)), 0x0001);
    // Largest subnormal, then the smallest normal.
    assert_eq!(narrow(1023.0 * 2f32.powi(-24)), 0x03ff);
    assert_eq!(narrow(2f32.powi(-14)), 0x0400);
}

#[test]
fn test_widen_subnormals() {
    assert_eq!(widen(0x0001), 2f32.powi(-24));
    assert_eq!(widen(0x0200), 2f32.powi(-15));
    assert_eq!(widen(0x03ff), 1023.0 * 2f32.powi(-24));
    assert_eq!(widen(0x8001), -(2f32.powi(-24)));
}

// --- Infinity and NaN ---

#[test]
fn test_infinities() {
    assert_eq!(narrow(f32::INFINITY), 0x7c00);
    assert_eq!(narrow(f32::NEG_INFINITY), 0xfc00);
    assert_eq!(widen(0x7c00), f32::INFINITY);
    assert_eq!(widen(0xfc00), f32::NEG_INFINITY);
}

#[test]
fn test_nan_narrowing() {
    // The standard quiet NaN keeps its quiet bit.
    assert_eq!(narrow(f32::NAN) & 0x7fff, 0x7e00);
    // A payload living entirely in the dropped low bits is pinned to
    // the minimum NaN instead of degenerating into an infinity.
    assert_eq!(float_to_half(0x7f80_0001), 0x7c01);
    assert_eq!(float_to_half(0xff80_0001), 0xfc01);
    // High payload bits survive the narrowing.
    assert_eq!(float_to_half(0x7fc0_2000), 0x7e01);
}

#[test]
fn test_nan_widening() {
    assert!(widen(0x7e00).is_nan());
    assert!(widen(0x7c01).is_nan());
    assert!(widen(0xfe00).is_nan());
}

// --- Exhaustive value check ---

#[test]
fn test_widen_matches_field_formula() {
    // Every non-NaN pattern must widen to the value its fields spell
    // out; all three products below are exact in f32.
    for bits in 0..=u16::MAX {
        let h = F16::from_bits(bits);
        if h.is_nan() {
            continue;
        }
        let sign = if bits & 0x8000 != 0 { -1.0f32 } else { 1.0 };
        let e = ((bits >> 10) & 0x1f) as i32;
        let m = (bits & 0x03ff) as f32;
        let expected = match e {
            0 => sign * m * 2f32.powi(-24),
            31 => sign * f32::INFINITY,
            _ => sign * (1024.0 + m) * 2f32.powi(e - 25),
        };
        let actual = widen(bits);
        assert_eq!(actual, expected, "widen mismatch for {bits:#06x}");
        if expected == 0.0 {
            assert_eq!(actual.is_sign_negative(), bits & 0x8000 != 0);
        }
    }
}
