//! Half-precision (IEEE-754 binary16) floating point.
//!
//! Two layers: a pure bit kernel operating on raw encodings
//! ([`convert`] and [`arith`], `u16`/`u32` in and out), and the [`F16`]
//! value type wrapping it with constructors, operators, ordering,
//! classification and constants. The 16-bit encoding itself is the wire
//! format: 1 sign bit, 5 exponent bits (bias 15), 10 fraction bits,
//! byte-for-byte compatible with any standard binary16 consumer.
//!
//! Everything is a total function over fixed-width integers: no
//! allocation, no shared state, no panics, bounded time. Numeric faults
//! are values, never errors: invalid operations produce a quiet NaN,
//! overflow a signed infinity, underflow a subnormal or signed zero.

pub mod arith;
pub mod convert;
pub mod f16;
pub mod fmt;
pub mod logging;
pub mod math;

pub use arith::{half_add, half_mul, half_neg, half_sub};
pub use convert::{float_to_half, half_to_float};
pub use f16::F16;
pub use fmt::ParseF16Error;
pub use logging::{StdoutLogger, init_stdout_logger};

// Re-export log so downstream crates log through the same facade.
pub use log;
