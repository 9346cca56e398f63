use std::fmt;

use crate::{ArithmeticError, InvalidDigit};

/// Readout text shown while the calculator is in its error state.
pub const ERROR_TEXT: &str = "Error";

const DISPLAY_SCALE: f64 = 1e12;

/// A single decimal digit, `0` through `9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digit(u8);

impl Digit {
    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl TryFrom<char> for Digit {
    type Error = InvalidDigit;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        c.to_digit(10)
            .and_then(|d| Digit::new(d as u8))
            .ok_or(InvalidDigit(c))
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Rounds to 12 decimal places so binary noise such as `0.30000000000000004`
/// disappears. Values too large to scale are returned unchanged.
pub fn round_for_display(value: f64) -> f64 {
    let rounded = round_half_up((value + f64::EPSILON) * DISPLAY_SCALE) / DISPLAY_SCALE;
    if rounded.is_finite() {
        rounded
    } else {
        value
    }
}

/// Rounds ties toward positive infinity, so `-2.5` becomes `-2`.
fn round_half_up(x: f64) -> f64 {
    // From 2^52 up every f64 is an integer, and adding 0.5 could round up.
    if x.abs() >= 4_503_599_627_370_496.0 {
        x
    } else {
        (x + 0.5).floor()
    }
}

/// Formats a number for the readout: rounded, never in exponent notation,
/// and with negative zero shown as `0`.
pub fn format_number(value: f64) -> Result<String, ArithmeticError> {
    if !value.is_finite() {
        return Err(ArithmeticError::NonFinite);
    }
    let rounded = round_for_display(value);
    if rounded == 0.0 {
        return Ok("0".to_string());
    }
    Ok(rounded.to_string())
}
