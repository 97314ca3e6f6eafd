pub mod chain;
pub mod constant;
mod error;

pub use error::Error;
pub use rust_decimal::Decimal;
