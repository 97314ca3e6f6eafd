use wallet_types::chain::{entity::Account, network::NetworkId};

/// Accounts stored in the wallet profile.
#[async_trait::async_trait]
pub trait AccountsRepo: Send + Sync {
    /// Non hidden accounts of the given network, in profile order.
    async fn accounts_on_network(
        &self,
        network_id: NetworkId,
    ) -> Result<Vec<Account>, crate::ServiceError>;
}
