use super::summary::{FeeLocks, FeeSummary};
use crate::radix::consts::PREDEFINED_FEE_CONSTANTS;
use rust_decimal::Decimal;
use wallet_utils::{unit, Clamped as _};

/// Fee as the wallet proposes it: preview estimate plus margin, minus what the dApp already locked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalFeeCustomization {
    pub network_fee: Decimal,
    pub royalty_fee: Decimal,
}

impl NormalFeeCustomization {
    pub fn new(fee_summary: &FeeSummary, fee_locks: &FeeLocks) -> Self {
        let multiplier = Decimal::ONE + PREDEFINED_FEE_CONSTANTS.network_fee_multiplier;
        let raw_network_fee = (fee_summary.total_execution_cost()
            + fee_summary.finalization_cost()
            + fee_summary.storage_expansion_cost())
            * multiplier;

        let non_contingent_lock = fee_locks.non_contingent_lock();
        let network_fee = (raw_network_fee - non_contingent_lock).clamped();
        // 非或有锁定先抵扣网络费，剩余部分再抵扣版税
        let remaining_lock = (non_contingent_lock - raw_network_fee).clamped();
        let royalty_fee = (fee_summary.royalty_cost() - remaining_lock).clamped();

        Self {
            network_fee,
            royalty_fee,
        }
    }

    pub fn total(&self) -> Decimal {
        self.network_fee + self.royalty_fee
    }
}

/// Fee broken down for users who want to pad it or tip the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvancedFeeCustomization {
    fee_summary: FeeSummary,
    padding_fee: Decimal,
    tip_percentage: u16,
    paid_by_dapps: Decimal,
}

impl AdvancedFeeCustomization {
    pub fn new(fee_summary: &FeeSummary, fee_locks: &FeeLocks) -> Self {
        let padding_fee = PREDEFINED_FEE_CONSTANTS.network_fee_multiplier
            * (fee_summary.total_execution_cost()
                + fee_summary.finalization_cost()
                + fee_summary.storage_expansion_cost());

        Self {
            fee_summary: *fee_summary,
            padding_fee,
            tip_percentage: 0,
            paid_by_dapps: -fee_locks.non_contingent_lock(),
        }
    }

    /// Padding typed by the user. Anything that is not a non-negative amount, or that
    /// would overflow the total, counts as zero.
    pub fn set_padding_fee(&mut self, input: &str) {
        let padding_fee = unit::non_negative_or_zero(input);
        let edited = Self {
            padding_fee,
            ..*self
        };
        self.padding_fee = if edited.checked_total().is_some() {
            padding_fee
        } else {
            tracing::debug!("set_padding_fee() input = {input}, total overflows");
            Decimal::ZERO
        };
    }

    /// Tip typed by the user, in percent of the execution and finalization cost.
    pub fn set_tip_percentage(&mut self, input: &str) {
        let tip_percentage = match wallet_utils::parse_func::u16_from_str(input) {
            Ok(tip) => tip,
            Err(e) => {
                tracing::debug!("set_tip_percentage() input = {input}, error = {e}");
                0
            }
        };
        let edited = Self {
            tip_percentage,
            ..*self
        };
        self.tip_percentage = if edited.checked_total().is_some() {
            tip_percentage
        } else {
            tracing::debug!("set_tip_percentage() input = {input}, total overflows");
            0
        };
    }

    pub fn fee_summary(&self) -> &FeeSummary {
        &self.fee_summary
    }

    pub fn padding_fee(&self) -> Decimal {
        self.padding_fee
    }

    pub fn tip_percentage(&self) -> u16 {
        self.tip_percentage
    }

    /// Always `<= 0`, shown as a deduction.
    pub fn paid_by_dapps(&self) -> Decimal {
        self.paid_by_dapps
    }

    pub fn tip_amount(&self) -> Decimal {
        self.checked_tip_amount().unwrap_or(Decimal::MAX)
    }

    /// Saturates at `Decimal::MAX`, the setters keep user input below that.
    pub fn total(&self) -> Decimal {
        self.checked_total().unwrap_or(Decimal::MAX).clamped()
    }

    fn checked_tip_amount(&self) -> Option<Decimal> {
        let base = self
            .fee_summary
            .total_execution_cost()
            .checked_add(self.fee_summary.finalization_cost())?;
        (Decimal::from(self.tip_percentage) / Decimal::ONE_HUNDRED).checked_mul(base)
    }

    fn checked_total(&self) -> Option<Decimal> {
        // 先扣除 dApp 锁定的部分
        self.fee_summary
            .total()
            .checked_add(self.paid_by_dapps)?
            .checked_add(self.padding_fee)?
            .checked_add(self.checked_tip_amount()?)
    }
}
