use wallet_chain_interact::radix::{
    fee::TransactionFee,
    protocol::{execution::ExecutionSummary, manifest::ManifestSummary},
    signers::{SigningFactors, SigningPurpose, TransactionSigners},
};
use wallet_types::chain::{entity::Entity, network::NetworkId};

#[derive(Debug, Clone)]
pub struct DetermineFeePayerRequest {
    pub network_id: NetworkId,
    pub transaction_fee: TransactionFee,
    pub transaction_signers: TransactionSigners,
    pub signing_factors: SigningFactors,
    pub signing_purpose: SigningPurpose,
    pub manifest_summary: ManifestSummary,
}

#[derive(Debug, Clone)]
pub struct ReviewTransactionReq {
    pub network_id: NetworkId,
    pub notary_public_key: String,
    /// the wallet's own accounts and personas the manifest needs auth from
    pub entities_requiring_auth: Vec<Entity>,
    pub execution_summary: ExecutionSummary,
    pub manifest_summary: ManifestSummary,
    pub signing_purpose: SigningPurpose,
}
