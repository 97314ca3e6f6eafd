#[derive(Debug, thiserror::Error, serde::Serialize)]
pub enum Error {
    #[error("Unknown network id: {0}")]
    UnknownNetworkId(u8),
    #[error("Unknown network name: {0}")]
    UnknownNetworkName(String),
    #[error("Invalid address: {0}")]
    InvalidAddress(String),
}
