use nonempty::NonEmpty;
use wallet_chain_interact::radix::signers::{SigningFactors, SigningPurpose};
use wallet_types::chain::{entity::Entity, network::NetworkId};

/// Maps entities to the factor sources that must sign for them.
#[async_trait::async_trait]
pub trait SigningFactorsResolver: Send + Sync {
    async fn signing_factors(
        &self,
        network_id: NetworkId,
        signers: &NonEmpty<Entity>,
        purpose: SigningPurpose,
    ) -> Result<SigningFactors, crate::ServiceError>;
}
