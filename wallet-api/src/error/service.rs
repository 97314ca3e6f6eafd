#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Types error: `{0}`")]
    Types(#[from] wallet_types::Error),
    #[error("Utils error: `{0}`")]
    Utils(#[from] wallet_utils::error::Error),
    #[error("Chain interact error: `{0}`")]
    ChainInteract(#[from] wallet_chain_interact::Error),
    #[error("System error: {0}")]
    System(#[from] crate::error::system::SystemError),
    // 业务错误
    #[error("Business error: {0}")]
    Business(#[from] super::business::BusinessError),
    #[error("parameter error: {0}")]
    Parameter(String),
}

impl ServiceError {
    pub fn get_status_code(&self) -> Option<i64> {
        match self {
            ServiceError::Business(err) => Some(err.get_status_code()),
            _ => None,
        }
    }
}

impl From<wallet_chain_interact::FeeError> for ServiceError {
    fn from(value: wallet_chain_interact::FeeError) -> Self {
        ServiceError::ChainInteract(value.into())
    }
}
