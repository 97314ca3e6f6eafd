#[derive(Debug, thiserror::Error)]
pub enum FeePayerError {
    // 当前网络下没有任何账户查到 XRD 余额
    #[error("no account on this network can pay the fee")]
    NoFeePayerCandidates,
    #[error("selected fee payer is not a candidate: {0}")]
    SelectedNotACandidate(String),
    #[error("fee payer belongs to network {payer}, transaction is on {transaction}")]
    NetworkMismatch { payer: String, transaction: String },
}

impl FeePayerError {
    pub(crate) fn get_status_code(&self) -> i64 {
        match self {
            FeePayerError::NoFeePayerCandidates => 4200,
            FeePayerError::SelectedNotACandidate(_) => 4201,
            FeePayerError::NetworkMismatch { .. } => 4202,
        }
    }
}
