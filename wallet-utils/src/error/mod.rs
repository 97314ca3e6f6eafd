pub mod parse;
pub mod serde;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Serde error: {0}")]
    Serde(#[from] serde::SerdeError),
    #[error("Parse error: {0}")]
    Parse(#[from] parse::ParseError),
    #[error("Other error: `{0}`")]
    Other(String),
}

impl Error {
    pub fn get_status_code(&self) -> u32 {
        match self {
            Error::Serde(e) => e.get_status_code(),
            Error::Parse(e) => e.get_status_code(),
            Error::Other(_) => 6000,
        }
    }
}
