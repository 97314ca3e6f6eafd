use crate::radix::consts::PREDEFINED_FEE_CONSTANTS;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use wallet_types::chain::{
    address::{AccountAddress, ResourceAddress},
    network::NetworkId,
};

// 预览执行得到的各项费用
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExecutionFeeSummary {
    pub execution_cost: Decimal,
    pub finalization_cost: Decimal,
    pub storage_expansion_cost: Decimal,
    pub royalty_cost: Decimal,
}

// manifest 自身已经锁定的费用
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExecutionFeeLocks {
    pub lock: Decimal,
    pub contingent_lock: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DetailedManifestClass {
    General,
    Transfer { is_one_to_one: bool },
    PoolContribution,
    PoolRedemption,
    ValidatorStake,
    ValidatorUnstake,
    ValidatorClaim,
    AccountDepositSettingsUpdate,
}

impl DetailedManifestClass {
    /// Classes for which the wallet lets the user add deposit guarantees.
    pub fn supports_guarantees(&self) -> bool {
        matches!(
            self,
            DetailedManifestClass::General | DetailedManifestClass::Transfer { .. }
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FungibleIndicator {
    Guaranteed(Decimal),
    Predicted(Decimal),
}

impl FungibleIndicator {
    pub fn amount(&self) -> Decimal {
        match self {
            FungibleIndicator::Guaranteed(amount) | FungibleIndicator::Predicted(amount) => *amount,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NonFungibleIndicator {
    Guaranteed(Vec<String>),
    Predicted(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceIndicator {
    Fungible {
        resource_address: ResourceAddress,
        indicator: FungibleIndicator,
    },
    NonFungible {
        resource_address: ResourceAddress,
        indicator: NonFungibleIndicator,
    },
}

/// What the preview of a manifest reported. Produced by the engine toolkit, consumed here.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExecutionSummary {
    pub fee_summary: ExecutionFeeSummary,
    pub fee_locks: ExecutionFeeLocks,
    /// `None` for non conforming manifests.
    pub detailed_manifest_class: Option<DetailedManifestClass>,
    pub deposits: BTreeMap<AccountAddress, Vec<ResourceIndicator>>,
    pub withdrawals: BTreeMap<AccountAddress, Vec<ResourceIndicator>>,
}

impl ExecutionSummary {
    /// Cost of the guarantee instructions the wallet will add, one per predicted fungible deposit.
    pub fn guarantees_cost(&self) -> Decimal {
        let supports = self
            .detailed_manifest_class
            .is_some_and(|class| class.supports_guarantees());
        if !supports {
            return Decimal::ZERO;
        }

        self.deposits
            .values()
            .flatten()
            .fold(Decimal::ZERO, |acc, resource| match resource {
                ResourceIndicator::Fungible {
                    indicator: FungibleIndicator::Predicted(_),
                    ..
                } => acc + PREDEFINED_FEE_CONSTANTS.fungible_guarantee_instruction_cost,
                _ => acc,
            })
    }

    /// Total XRD the account withdraws in this transaction.
    pub fn xrd_withdrawn_by(&self, account: &AccountAddress, network_id: NetworkId) -> Decimal {
        let Some(withdraws) = self.withdrawals.get(account) else {
            return Decimal::ZERO;
        };

        withdraws
            .iter()
            .fold(Decimal::ZERO, |acc, resource| match resource {
                ResourceIndicator::Fungible {
                    resource_address,
                    indicator,
                } if resource_address.as_str() == network_id.xrd_address() => {
                    acc + indicator.amount()
                }
                _ => acc,
            })
    }
}
