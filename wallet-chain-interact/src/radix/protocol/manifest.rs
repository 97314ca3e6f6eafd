use wallet_types::chain::address::{AccountAddress, IdentityAddress};

/// Static analysis of a manifest: which of the wallet's entities it touches.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ManifestSummary {
    pub accounts_requiring_auth: Vec<AccountAddress>,
    pub identities_requiring_auth: Vec<IdentityAddress>,
    /// subset of `accounts_requiring_auth`
    pub accounts_withdrawn_from: Vec<AccountAddress>,
    pub accounts_deposited_into: Vec<AccountAddress>,
}

impl ManifestSummary {
    pub fn requires_auth(&self, account: &AccountAddress) -> bool {
        self.accounts_requiring_auth.contains(account)
    }
}
