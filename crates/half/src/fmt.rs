//! Formatting and parsing for [`F16`].

use crate::F16;
use std::fmt;
use std::num::ParseFloatError;
use std::str::FromStr;

impl fmt::Display for F16 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_f32(), f)
    }
}

impl fmt::Debug for F16 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F16({}; {:#06x})", self.to_f32(), self.to_bits())
    }
}

/// Error returned when parsing an [`F16`] from text fails.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseF16Error {
    inner: ParseFloatError,
}

impl fmt::Display for ParseF16Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid half-precision literal: {}", self.inner)
    }
}

impl std::error::Error for ParseF16Error {}

impl From<ParseFloatError> for ParseF16Error {
    fn from(inner: ParseFloatError) -> Self {
        ParseF16Error { inner }
    }
}

impl FromStr for F16 {
    type Err = ParseF16Error;

    /// Parses through `f32` and rounds to the nearest half. Accepts
    /// everything `f32::from_str` accepts, including `inf` and `NaN`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: f32 = s.parse()?;
        Ok(F16::from_f32(value))
    }
}
