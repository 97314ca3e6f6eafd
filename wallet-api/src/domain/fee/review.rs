use super::FeePayerCandidate;
use rust_decimal::Decimal;
use wallet_chain_interact::radix::{
    fee::TransactionFee,
    protocol::execution::{DetailedManifestClass, ExecutionSummary},
    signers::{SigningFactors, SigningPurpose, TransactionSigners},
};
use wallet_types::chain::network::NetworkId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationNote {
    /// The manifest locks enough on its own.
    FeePayerSuperfluous,
    /// The payer was not signing before and has been added as a signer.
    IntroducesNewAccount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeeValidationOutcome {
    Valid(Option<ValidationNote>),
    NeedsFeePayer,
    InsufficientBalance,
}

impl FeeValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, FeeValidationOutcome::Valid(_))
    }
}

/// State of a transaction while the user reviews it.
#[derive(Debug, Clone)]
pub struct ReviewedTransaction {
    pub network_id: NetworkId,
    pub execution_summary: ExecutionSummary,
    pub fee_payer: Option<FeePayerCandidate>,
    pub transaction_fee: TransactionFee,
    pub transaction_signers: TransactionSigners,
    pub signing_factors: SigningFactors,
    pub signing_purpose: SigningPurpose,
}

impl ReviewedTransaction {
    pub fn is_non_conforming(&self) -> bool {
        self.execution_summary.detailed_manifest_class.is_none()
    }

    pub fn fee_paying_validation(&self) -> FeeValidationOutcome {
        let lock_fee = self.transaction_fee.total_fee().lock_fee();

        // general 类型的交易里付款账户自己也可能转出 XRD，要一起算进去
        let is_general = matches!(
            self.execution_summary.detailed_manifest_class,
            Some(DetailedManifestClass::General)
        );
        let withdrawing_payer = self
            .fee_payer
            .as_ref()
            .filter(|p| is_general && self.execution_summary.withdrawals.contains_key(p.address()));

        if let Some(payer) = withdrawing_payer {
            let withdrawn = self
                .execution_summary
                .xrd_withdrawn_by(payer.address(), self.network_id);
            return if payer.can_cover(withdrawn + lock_fee) {
                FeeValidationOutcome::Valid(None)
            } else {
                FeeValidationOutcome::InsufficientBalance
            };
        }

        validate_balance(self.fee_payer.as_ref(), lock_fee)
    }
}

fn validate_balance(payer: Option<&FeePayerCandidate>, lock_fee: Decimal) -> FeeValidationOutcome {
    if lock_fee.is_zero() {
        return FeeValidationOutcome::Valid(None);
    }
    match payer {
        None => FeeValidationOutcome::NeedsFeePayer,
        Some(payer) if !payer.can_cover(lock_fee) => FeeValidationOutcome::InsufficientBalance,
        Some(_) => FeeValidationOutcome::Valid(None),
    }
}
