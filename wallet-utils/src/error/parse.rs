#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("ToInt parse error: {0}")]
    ToInt(#[from] std::num::ParseIntError),
    #[error("Decimal error: {0}")]
    Decimal(#[from] rust_decimal::Error),
    #[error("Negative amount not allowed: {0}")]
    NegativeAmount(String),
}

impl ParseError {
    pub fn get_status_code(&self) -> u32 {
        match self {
            ParseError::ToInt(_) => 6304,
            ParseError::Decimal(_) => 6311,
            ParseError::NegativeAmount(_) => 6312,
        }
    }
}
