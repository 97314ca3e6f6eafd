use rust_decimal::Decimal;
use thiserror::Error;
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum FeeError {
    #[error("fee component {field} must not be negative, got {amount}")]
    NegativeComponent { field: &'static str, amount: Decimal },
    #[error("advanced customization was built from a different fee summary")]
    StaleCustomization,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("utils error {0}")]
    UtilsError(#[from] wallet_utils::error::Error),
    #[error("types error {0}")]
    Types(#[from] wallet_types::Error),
    #[error("fee error {0}")]
    Fee(#[from] FeeError),
    #[error("{0}")]
    Other(String),
}
