use thiserror::Error;

/// Failure of a single arithmetic step. The calculator absorbs it into its
/// sticky `Error` readout; it never escapes `update`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("result is not a finite number")]
    NonFinite,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("not a decimal digit: {0:?}")]
pub struct InvalidDigit(pub char);
