use rust_decimal::Decimal;
use wallet_types::chain::{address::AccountAddress, network::NetworkId};

/// Source of on-ledger XRD balances.
#[async_trait::async_trait]
pub trait BalanceProvider: Send + Sync {
    /// XRD balance of each requested account, `None` when the ledger has nothing for it.
    async fn xrd_balances(
        &self,
        network_id: NetworkId,
        addresses: &[AccountAddress],
        force_refresh: bool,
    ) -> crate::Result<Vec<(AccountAddress, Option<Decimal>)>>;
}
