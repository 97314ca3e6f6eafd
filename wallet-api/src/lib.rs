pub mod config;
pub mod domain;
mod error;
pub mod infrastructure;
pub mod request;
pub mod response_vo;
pub mod service;

pub use config::*;
pub use error::{
    business::{fee_payer::FeePayerError, BusinessError},
    system::SystemError,
    ServiceError,
};
