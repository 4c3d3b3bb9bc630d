/// A string could not be turned into a [`BigInt`](crate::BigInt).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    #[error("cannot parse integer from empty string")]
    Empty,
    #[error("invalid digit {found:?} at byte {index}")]
    InvalidDigit { index: usize, found: char },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BigIntError {
    #[error(transparent)]
    Conversion(#[from] ConversionError),
    #[error("division by zero")]
    DivisionByZero,
    #[error("radix {0} is outside the supported range 2..=36")]
    InvalidRadix(u32),
}
