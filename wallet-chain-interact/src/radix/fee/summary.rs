use crate::{
    errors::FeeError,
    radix::{consts::PREDEFINED_FEE_CONSTANTS, protocol::execution::ExecutionSummary},
};
use rust_decimal::Decimal;

/// The costs that change while a transaction is reviewed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeeSummaryField {
    LockFeeCost,
    SignaturesCost,
    NotarizingCost,
}

impl FeeSummaryField {
    pub fn name(&self) -> &'static str {
        match self {
            FeeSummaryField::LockFeeCost => "lock_fee_cost",
            FeeSummaryField::SignaturesCost => "signatures_cost",
            FeeSummaryField::NotarizingCost => "notarizing_cost",
        }
    }
}

/// Breakdown of what the network charges for a transaction, in XRD.
///
/// The first five components come from the preview and are fixed, the last
/// three depend on how the wallet finishes the transaction (lock fee
/// instruction, number of signatures, notary setup).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FeeSummary {
    execution_cost: Decimal,
    finalization_cost: Decimal,
    storage_expansion_cost: Decimal,
    royalty_cost: Decimal,
    guarantees_cost: Decimal,
    lock_fee_cost: Decimal,
    signatures_cost: Decimal,
    notarizing_cost: Decimal,
}

fn non_negative(field: &'static str, amount: Decimal) -> Result<Decimal, FeeError> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(FeeError::NegativeComponent { field, amount });
    }
    Ok(amount)
}

impl FeeSummary {
    /// Fixed components only, the mutable ones start at zero.
    pub fn new(
        execution_cost: Decimal,
        finalization_cost: Decimal,
        storage_expansion_cost: Decimal,
        royalty_cost: Decimal,
        guarantees_cost: Decimal,
    ) -> crate::Result<Self> {
        Ok(Self {
            execution_cost: non_negative("execution_cost", execution_cost)?,
            finalization_cost: non_negative("finalization_cost", finalization_cost)?,
            storage_expansion_cost: non_negative("storage_expansion_cost", storage_expansion_cost)?,
            royalty_cost: non_negative("royalty_cost", royalty_cost)?,
            guarantees_cost: non_negative("guarantees_cost", guarantees_cost)?,
            ..Default::default()
        })
    }

    pub fn from_execution(
        summary: &ExecutionSummary,
        signature_count: usize,
        notary_is_signatory: bool,
        include_lock_fee: bool,
    ) -> crate::Result<Self> {
        let fees = &summary.fee_summary;
        let mut res = Self::new(
            fees.execution_cost,
            fees.finalization_cost,
            fees.storage_expansion_cost,
            fees.royalty_cost,
            summary.guarantees_cost(),
        )?;

        res.signatures_cost = PREDEFINED_FEE_CONSTANTS.signatures_cost(signature_count);
        res.notarizing_cost = PREDEFINED_FEE_CONSTANTS.notarizing_cost(notary_is_signatory);
        if include_lock_fee {
            res.lock_fee_cost = PREDEFINED_FEE_CONSTANTS.lock_fee_instruction_cost;
        }
        Ok(res)
    }

    pub fn get(&self, field: FeeSummaryField) -> Decimal {
        match field {
            FeeSummaryField::LockFeeCost => self.lock_fee_cost,
            FeeSummaryField::SignaturesCost => self.signatures_cost,
            FeeSummaryField::NotarizingCost => self.notarizing_cost,
        }
    }

    /// Replaces one mutable component. Callers have already checked the sign.
    pub(crate) fn set(&mut self, field: FeeSummaryField, amount: Decimal) {
        debug_assert!(!amount.is_sign_negative() || amount.is_zero());
        match field {
            FeeSummaryField::LockFeeCost => self.lock_fee_cost = amount,
            FeeSummaryField::SignaturesCost => self.signatures_cost = amount,
            FeeSummaryField::NotarizingCost => self.notarizing_cost = amount,
        }
    }

    pub(crate) fn checked_set(
        &mut self,
        field: FeeSummaryField,
        amount: Decimal,
    ) -> Result<(), FeeError> {
        let amount = non_negative(field.name(), amount)?;
        self.set(field, amount);
        Ok(())
    }

    pub fn execution_cost(&self) -> Decimal {
        self.execution_cost
    }

    pub fn finalization_cost(&self) -> Decimal {
        self.finalization_cost
    }

    pub fn storage_expansion_cost(&self) -> Decimal {
        self.storage_expansion_cost
    }

    pub fn royalty_cost(&self) -> Decimal {
        self.royalty_cost
    }

    pub fn guarantees_cost(&self) -> Decimal {
        self.guarantees_cost
    }

    pub fn lock_fee_cost(&self) -> Decimal {
        self.lock_fee_cost
    }

    pub fn signatures_cost(&self) -> Decimal {
        self.signatures_cost
    }

    pub fn notarizing_cost(&self) -> Decimal {
        self.notarizing_cost
    }

    pub fn total_execution_cost(&self) -> Decimal {
        self.execution_cost
            + self.guarantees_cost
            + self.signatures_cost
            + self.lock_fee_cost
            + self.notarizing_cost
    }

    pub fn total(&self) -> Decimal {
        self.total_execution_cost()
            + self.finalization_cost
            + self.storage_expansion_cost
            + self.royalty_cost
    }
}

/// XRD the manifest locks for fees on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FeeLocks {
    non_contingent_lock: Decimal,
    contingent_lock: Decimal,
}

impl FeeLocks {
    pub fn new(non_contingent_lock: Decimal, contingent_lock: Decimal) -> crate::Result<Self> {
        Ok(Self {
            non_contingent_lock: non_negative("non_contingent_lock", non_contingent_lock)?,
            contingent_lock: non_negative("contingent_lock", contingent_lock)?,
        })
    }

    pub fn from_execution(summary: &ExecutionSummary) -> crate::Result<Self> {
        Self::new(summary.fee_locks.lock, summary.fee_locks.contingent_lock)
    }

    pub fn non_contingent_lock(&self) -> Decimal {
        self.non_contingent_lock
    }

    pub fn contingent_lock(&self) -> Decimal {
        self.contingent_lock
    }
}
