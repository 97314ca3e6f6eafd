use nonempty::NonEmpty;
use rust_decimal::Decimal;
use std::{
    collections::{BTreeMap, HashMap},
    sync::atomic::{AtomicBool, AtomicUsize, Ordering},
};
use wallet_api::{
    infrastructure::{AccountsRepo, SigningFactorsResolver},
    ServiceError, SystemError,
};
use wallet_chain_interact::radix::{
    signers::{FactorSourceKind, Signer, SigningFactor, SigningFactors, SigningPurpose},
    BalanceProvider,
};
use wallet_types::chain::{
    address::AccountAddress,
    entity::{Account, Entity},
    network::NetworkId,
};

pub struct MemoryAccounts {
    accounts: Vec<Account>,
}

impl MemoryAccounts {
    pub fn new(accounts: Vec<Account>) -> Self {
        Self { accounts }
    }
}

#[async_trait::async_trait]
impl AccountsRepo for MemoryAccounts {
    async fn accounts_on_network(&self, network_id: NetworkId) -> Result<Vec<Account>, ServiceError> {
        Ok(self
            .accounts
            .iter()
            .filter(|a| a.network_id() == network_id)
            .cloned()
            .collect())
    }
}

pub struct MemoryBalances {
    balances: HashMap<AccountAddress, Option<Decimal>>,
    pub refreshed: AtomicBool,
}

impl MemoryBalances {
    pub fn new(balances: HashMap<AccountAddress, Option<Decimal>>) -> Self {
        Self {
            balances,
            refreshed: AtomicBool::new(false),
        }
    }
}

#[async_trait::async_trait]
impl BalanceProvider for MemoryBalances {
    async fn xrd_balances(
        &self,
        _network_id: NetworkId,
        addresses: &[AccountAddress],
        force_refresh: bool,
    ) -> wallet_chain_interact::Result<Vec<(AccountAddress, Option<Decimal>)>> {
        self.refreshed.store(force_refresh, Ordering::SeqCst);
        Ok(addresses
            .iter()
            .map(|address| (address.clone(), self.balances.get(address).copied().flatten()))
            .collect())
    }
}

/// Every signer needs exactly one signature from a single device factor.
#[derive(Default)]
pub struct MockResolver {
    pub calls: AtomicUsize,
    pub fail: AtomicBool,
}

impl MockResolver {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn set_fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }
}

pub fn one_signature_each(signers: &NonEmpty<Entity>) -> SigningFactors {
    let mut factors = BTreeMap::new();
    factors.insert(
        FactorSourceKind::Device,
        NonEmpty::new(SigningFactor {
            factor_source_id: "device".to_string(),
            signers: signers.clone().map(|entity| Signer {
                entity,
                factor_instances_required: 1,
            }),
        }),
    );
    SigningFactors(factors)
}

#[async_trait::async_trait]
impl SigningFactorsResolver for MockResolver {
    async fn signing_factors(
        &self,
        _network_id: NetworkId,
        signers: &NonEmpty<Entity>,
        _purpose: SigningPurpose,
    ) -> Result<SigningFactors, ServiceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            return Err(SystemError::SigningFactorsResolve("device unavailable".to_string()).into());
        }
        Ok(one_signature_each(signers))
    }
}
