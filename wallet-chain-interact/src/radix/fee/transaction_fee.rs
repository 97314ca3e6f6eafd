use super::{
    customization::{AdvancedFeeCustomization, NormalFeeCustomization},
    summary::{FeeLocks, FeeSummary, FeeSummaryField},
    total::TotalFee,
};
use crate::{
    errors::FeeError,
    radix::{
        consts::PREDEFINED_FEE_CONSTANTS,
        protocol::execution::ExecutionSummary,
        signers::{SigningFactors, TransactionSigners},
    },
};
use rust_decimal::Decimal;
use wallet_utils::Clamped as _;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal(NormalFeeCustomization),
    Advanced(AdvancedFeeCustomization),
}

impl Mode {
    fn rebuild(&self, fee_summary: &FeeSummary, fee_locks: &FeeLocks) -> Self {
        match self {
            Mode::Normal(_) => Mode::Normal(NormalFeeCustomization::new(fee_summary, fee_locks)),
            Mode::Advanced(_) => {
                Mode::Advanced(AdvancedFeeCustomization::new(fee_summary, fee_locks))
            }
        }
    }
}

/// The fee of a transaction under review.
///
/// Every change goes through a whole-value rebuild: the summary and locks are
/// updated first, then the active mode is recomputed from them, so the mode
/// never sees a half-updated pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactionFee {
    fee_summary: FeeSummary,
    fee_locks: FeeLocks,
    mode: Mode,
}

impl TransactionFee {
    pub fn new(fee_summary: FeeSummary, fee_locks: FeeLocks) -> Self {
        let mode = Mode::Normal(NormalFeeCustomization::new(&fee_summary, &fee_locks));
        Self {
            fee_summary,
            fee_locks,
            mode,
        }
    }

    pub fn new_advanced(fee_summary: FeeSummary, fee_locks: FeeLocks) -> Self {
        let mode = Mode::Advanced(AdvancedFeeCustomization::new(&fee_summary, &fee_locks));
        Self {
            fee_summary,
            fee_locks,
            mode,
        }
    }

    pub fn from_execution_summary(
        summary: &ExecutionSummary,
        signature_count: usize,
        notary_is_signatory: bool,
        include_lock_fee: bool,
    ) -> crate::Result<Self> {
        let fee_summary = FeeSummary::from_execution(
            summary,
            signature_count,
            notary_is_signatory,
            include_lock_fee,
        )?;
        let fee_locks = FeeLocks::from_execution(summary)?;
        Ok(Self::new(fee_summary, fee_locks))
    }

    /// Fee for the review screen.
    ///
    /// Starts without a lock fee instruction. If anything is left to pay after
    /// the manifest's own locks, a fee payer is needed, which brings the lock
    /// fee instruction and makes the notary a separate signer.
    pub fn prepare(
        summary: &ExecutionSummary,
        signers: &TransactionSigners,
        signing_factors: &SigningFactors,
    ) -> crate::Result<Self> {
        let notary_is_signatory = signers.notary_is_signatory();
        let signature_count = if notary_is_signatory {
            1
        } else {
            signing_factors.expected_signature_count()
        };

        let mut res =
            Self::from_execution_summary(summary, signature_count, notary_is_signatory, false)?;
        if res.total_fee().lock_fee() > Decimal::ZERO {
            res.add_lock_fee_cost();
            res.update_notarizing_cost(false);
        }
        Ok(res)
    }

    pub fn fee_summary(&self) -> &FeeSummary {
        &self.fee_summary
    }

    pub fn fee_locks(&self) -> &FeeLocks {
        &self.fee_locks
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn is_normal_mode(&self) -> bool {
        matches!(self.mode, Mode::Normal(_))
    }

    pub fn normal(&self) -> Option<&NormalFeeCustomization> {
        match &self.mode {
            Mode::Normal(normal) => Some(normal),
            Mode::Advanced(_) => None,
        }
    }

    pub fn advanced(&self) -> Option<&AdvancedFeeCustomization> {
        match &self.mode {
            Mode::Advanced(advanced) => Some(advanced),
            Mode::Normal(_) => None,
        }
    }

    pub fn total_fee(&self) -> TotalFee {
        match &self.mode {
            Mode::Normal(normal) => {
                let max = normal.total();
                TotalFee {
                    min: (max - self.fee_locks.contingent_lock()).clamped(),
                    max,
                }
            }
            Mode::Advanced(advanced) => {
                let total = advanced.total();
                TotalFee {
                    min: total,
                    max: total,
                }
            }
        }
    }

    /// Replaces one mutable cost and rebuilds the active mode. Negative amounts are rejected.
    pub fn update(&mut self, field: FeeSummaryField, amount: Decimal) -> crate::Result<()> {
        let mut fee_summary = self.fee_summary;
        fee_summary.checked_set(field, amount)?;
        self.replace_summary(fee_summary);
        Ok(())
    }

    pub fn add_lock_fee_cost(&mut self) {
        self.set(
            FeeSummaryField::LockFeeCost,
            PREDEFINED_FEE_CONSTANTS.lock_fee_instruction_cost,
        );
    }

    pub fn update_notarizing_cost(&mut self, notary_is_signatory: bool) {
        self.set(
            FeeSummaryField::NotarizingCost,
            PREDEFINED_FEE_CONSTANTS.notarizing_cost(notary_is_signatory),
        );
    }

    pub fn update_signatures_cost(&mut self, signatures_count: usize) {
        self.set(
            FeeSummaryField::SignaturesCost,
            PREDEFINED_FEE_CONSTANTS.signatures_cost(signatures_count),
        );
    }

    /// Switches between normal and advanced. Entering advanced starts from the
    /// default padding and no tip, earlier edits are not kept.
    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            Mode::Normal(_) => Mode::Advanced(AdvancedFeeCustomization::new(
                &self.fee_summary,
                &self.fee_locks,
            )),
            Mode::Advanced(_) => {
                Mode::Normal(NormalFeeCustomization::new(&self.fee_summary, &self.fee_locks))
            }
        };
    }

    /// Applies a customization the user edited. Does nothing in normal mode.
    pub fn update_advanced(&mut self, customization: AdvancedFeeCustomization) -> crate::Result<()> {
        if self.is_normal_mode() {
            tracing::debug!("update_advanced() ignored in normal mode");
            return Ok(());
        }

        if customization.fee_summary() != &self.fee_summary
            || customization.paid_by_dapps() != -self.fee_locks.non_contingent_lock()
        {
            return Err(FeeError::StaleCustomization.into());
        }
        self.mode = Mode::Advanced(customization);
        Ok(())
    }

    fn set(&mut self, field: FeeSummaryField, amount: Decimal) {
        let mut fee_summary = self.fee_summary;
        fee_summary.set(field, amount);
        self.replace_summary(fee_summary);
    }

    fn replace_summary(&mut self, fee_summary: FeeSummary) {
        let mode = self.mode.rebuild(&fee_summary, &self.fee_locks);
        *self = Self {
            fee_summary,
            fee_locks: self.fee_locks,
            mode,
        };
    }
}
