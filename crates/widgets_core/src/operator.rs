use std::fmt;

use crate::ArithmeticError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Applies the operator. Division by zero (either sign) and any
    /// non-finite result are errors.
    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64, ArithmeticError> {
        let result = match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => {
                if rhs == 0.0 {
                    return Err(ArithmeticError::DivisionByZero);
                }
                lhs / rhs
            }
        };
        if result.is_finite() {
            Ok(result)
        } else {
            Err(ArithmeticError::NonFinite)
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn applies_each_operator() {
        assert_eq!(Operator::Add.apply(2.5, 4.0), Ok(6.5));
        assert_eq!(Operator::Subtract.apply(2.0, 7.0), Ok(-5.0));
        assert_eq!(Operator::Multiply.apply(-3.0, 4.0), Ok(-12.0));
        assert_eq!(Operator::Divide.apply(9.0, 4.0), Ok(2.25));
    }

    #[test]
    fn division_by_either_zero_is_rejected() {
        for (lhs, rhs) in [(1.0, 0.0), (1.0, -0.0), (0.0, 0.0), (-5.0, 0.0)] {
            assert_eq!(
                Operator::Divide.apply(lhs, rhs),
                Err(ArithmeticError::DivisionByZero),
                "{lhs} / {rhs}"
            );
        }
    }

    #[test]
    fn overflow_is_non_finite() {
        assert_eq!(
            Operator::Multiply.apply(1e200, 1e200),
            Err(ArithmeticError::NonFinite)
        );
        assert_eq!(
            Operator::Add.apply(f64::MAX, f64::MAX),
            Err(ArithmeticError::NonFinite)
        );
        assert_eq!(
            Operator::Divide.apply(1e300, 1e-300),
            Err(ArithmeticError::NonFinite)
        );
    }

    #[test]
    fn symbols_map_both_ways() {
        for op in [
            Operator::Add,
            Operator::Subtract,
            Operator::Multiply,
            Operator::Divide,
        ] {
            assert_eq!(Operator::from_symbol(op.symbol()), Some(op));
            assert_eq!(op.to_string(), op.symbol().to_string());
        }
        assert_eq!(Operator::from_symbol('%'), None);
    }
}
