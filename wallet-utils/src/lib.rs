pub mod error;
pub mod log;
pub mod parse_func;
pub mod serde_func;
pub mod unit;

pub use error::{parse::ParseError, serde::SerdeError, Error};
pub use log::{init_log, init_test_log};
pub use unit::Clamped;
