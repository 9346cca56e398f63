//! Structured edit buffer behind the calculator readout.
//!
//! The buffer keeps sign, integer digits and fraction digits apart, so the
//! readout text is always a plain numeric literal. A lone `.` or `-` cannot
//! be represented, and parsing the current input never has to guess.
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::{format_number, ArithmeticError, Digit};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not a calculator literal: {0:?}")]
pub struct ParseEntryError(pub String);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    negative: bool,
    integer: String,
    /// `Some("")` is a trailing decimal point, as in `12.`.
    fraction: Option<String>,
}

impl Default for Entry {
    fn default() -> Self {
        Self::zero()
    }
}

impl Entry {
    pub fn zero() -> Self {
        Self {
            negative: false,
            integer: "0".to_string(),
            fraction: None,
        }
    }

    /// Builds an entry from a computed value, rounded the same way the
    /// readout rounds results.
    pub fn from_number(value: f64) -> Result<Self, ArithmeticError> {
        format_number(value)?
            .parse()
            .map_err(|_| ArithmeticError::NonFinite)
    }

    /// True when the readout is exactly `0`.
    pub fn is_zero_literal(&self) -> bool {
        !self.negative && self.integer == "0" && self.fraction.is_none()
    }

    /// True when the readout is exactly `0` or `0.`.
    fn is_bare_zero(&self) -> bool {
        !self.negative && self.integer == "0" && self.fraction.as_deref().unwrap_or("").is_empty()
    }

    pub fn has_decimal_point(&self) -> bool {
        self.fraction.is_some()
    }

    pub fn value(&self) -> f64 {
        let fraction = match self.fraction.as_deref() {
            Some(digits) if !digits.is_empty() => digits,
            _ => "0",
        };
        let magnitude = format!("{}.{}", self.integer, fraction)
            .parse::<f64>()
            .unwrap_or(0.0);
        if self.negative {
            -magnitude
        } else {
            magnitude
        }
    }

    /// Appends a digit; a lone `0` (or `-0`) is replaced instead.
    pub fn push_digit(&mut self, digit: Digit) {
        match self.fraction.as_mut() {
            Some(fraction) => fraction.push(digit.as_char()),
            None if self.integer == "0" => self.integer = digit.to_string(),
            None => self.integer.push(digit.as_char()),
        }
    }

    /// Returns false when a decimal point is already present.
    pub fn push_decimal(&mut self) -> bool {
        if self.fraction.is_some() {
            return false;
        }
        self.fraction = Some(String::new());
        true
    }

    /// Returns false (and leaves the entry alone) for `0` and `0.`.
    pub fn toggle_sign(&mut self) -> bool {
        if self.is_bare_zero() {
            return false;
        }
        self.negative = !self.negative;
        true
    }

    /// Removes the last character. Anything that would leave an empty
    /// readout or a lone `-` collapses to `0`.
    pub fn pop(&mut self) {
        if let Some(fraction) = self.fraction.as_mut() {
            if fraction.pop().is_none() {
                self.fraction = None;
            }
            return;
        }
        if self.integer.len() <= 1 {
            *self = Self::zero();
        } else {
            self.integer.pop();
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        f.write_str(&self.integer)?;
        if let Some(fraction) = &self.fraction {
            write!(f, ".{fraction}")?;
        }
        Ok(())
    }
}

impl FromStr for Entry {
    type Err = ParseEntryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (negative, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let (integer, fraction) = match body.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (body, None),
        };
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if integer.is_empty() || !all_digits(integer) || !fraction.map_or(true, all_digits) {
            return Err(ParseEntryError(s.to_string()));
        }
        Ok(Self {
            negative,
            integer: integer.to_string(),
            fraction: fraction.map(str::to_string),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(text: &str) -> Entry {
        text.parse().expect("valid literal")
    }

    fn digit(d: u8) -> Digit {
        Digit::new(d).expect("digit")
    }

    #[test]
    fn digits_replace_lone_zero_and_keep_sign() {
        let mut e = Entry::zero();
        e.push_digit(digit(5));
        assert_eq!(e.to_string(), "5");

        let mut e = entry("-0");
        e.push_digit(digit(7));
        assert_eq!(e.to_string(), "-7");

        let mut e = entry("0.");
        e.push_digit(digit(0));
        e.push_digit(digit(5));
        assert_eq!(e.to_string(), "0.05");
    }

    #[test]
    fn only_one_decimal_point() {
        let mut e = entry("12");
        assert!(e.push_decimal());
        assert!(!e.push_decimal());
        assert_eq!(e.to_string(), "12.");
    }

    #[test]
    fn sign_toggle_skips_bare_zero() {
        let mut e = Entry::zero();
        assert!(!e.toggle_sign());
        let mut e = entry("0.");
        assert!(!e.toggle_sign());
        assert_eq!(e.to_string(), "0.");

        let mut e = entry("-0");
        assert!(e.toggle_sign());
        assert_eq!(e.to_string(), "0");

        let mut e = entry("0.0");
        assert!(e.toggle_sign());
        assert_eq!(e.to_string(), "-0.0");
    }

    #[test]
    fn pop_collapses_to_zero() {
        for (before, after) in [
            ("5", "0"),
            ("-5", "0"),
            ("0", "0"),
            ("-0", "0"),
            ("12", "1"),
            ("-12", "-1"),
            ("0.5", "0."),
            ("0.", "0"),
            ("-0.", "-0"),
        ] {
            let mut e = entry(before);
            e.pop();
            assert_eq!(e.to_string(), after, "pop of {before}");
        }
    }

    #[test]
    fn value_of_partial_literals() {
        assert_eq!(entry("5.").value(), 5.0);
        assert_eq!(entry("-0.25").value(), -0.25);
        assert_eq!(Entry::zero().value(), 0.0);
    }

    #[test]
    fn rejects_malformed_literals() {
        for text in ["", ".", "-", "-.", "1.2.3", "1e5", "Error", "+1"] {
            assert!(text.parse::<Entry>().is_err(), "{text} should not parse");
        }
    }

    #[test]
    fn from_number_uses_readout_rounding() {
        assert_eq!(Entry::from_number(0.1 + 0.2).unwrap().to_string(), "0.3");
        assert_eq!(
            Entry::from_number(f64::INFINITY),
            Err(ArithmeticError::NonFinite)
        );
    }
}
