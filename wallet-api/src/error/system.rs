#[derive(Debug, thiserror::Error)]
pub enum SystemError {
    #[error("Signing factors resolve failed: {0}")]
    SigningFactorsResolve(String),
}
