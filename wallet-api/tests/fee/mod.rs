use crate::mock::one_signature_each;
use wallet_api::request::fee::DetermineFeePayerRequest;
use wallet_chain_interact::radix::{
    fee::TransactionFee,
    protocol::manifest::ManifestSummary,
    signers::{
        IntentSigning, SignTransactionPurpose, SigningFactors, SigningPurpose, TransactionSigners,
    },
};
use wallet_types::chain::{entity::Entity, network::NetworkId};

mod determine;
mod replace;

pub const PURPOSE: SigningPurpose =
    SigningPurpose::SignTransaction(SignTransactionPurpose::ManifestFromDapp);

pub fn signers_and_factors(entities: Vec<Entity>) -> (TransactionSigners, SigningFactors) {
    let signers = TransactionSigners::new("notary", entities);
    let factors = match &signers.intent_signing {
        IntentSigning::IntentSigners(entities) => one_signature_each(entities),
        IntentSigning::NotaryIsSignatory => SigningFactors::default(),
    };
    (signers, factors)
}

pub fn request(
    transaction_fee: TransactionFee,
    signers: Vec<Entity>,
    manifest_summary: ManifestSummary,
) -> DetermineFeePayerRequest {
    let (transaction_signers, signing_factors) = signers_and_factors(signers);
    DetermineFeePayerRequest {
        network_id: NetworkId::Stokenet,
        transaction_fee,
        transaction_signers,
        signing_factors,
        signing_purpose: PURPOSE,
        manifest_summary,
    }
}
