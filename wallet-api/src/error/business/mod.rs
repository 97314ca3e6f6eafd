pub mod fee_payer;

#[derive(Debug, thiserror::Error)]
pub enum BusinessError {
    #[error("Fee payer error: {0}")]
    FeePayer(#[from] fee_payer::FeePayerError),
}

impl BusinessError {
    pub fn get_status_code(&self) -> i64 {
        match self {
            BusinessError::FeePayer(msg) => msg.get_status_code(),
        }
    }
}
