use crate::error::business::fee_payer::FeePayerError;
use nonempty::NonEmpty;
use rust_decimal::Decimal;
use wallet_chain_interact::radix::fee::TransactionFee;
use wallet_types::chain::{address::AccountAddress, entity::Account};

/// An account that could pay the fee, with its current XRD balance.
///
/// Two candidates are the same candidate when they have the same address, the
/// balance is only a snapshot.
#[derive(Debug, Clone)]
pub struct FeePayerCandidate {
    pub account: Account,
    pub xrd_balance: Decimal,
}

impl FeePayerCandidate {
    pub fn new(account: Account, xrd_balance: Decimal) -> Self {
        Self {
            account,
            xrd_balance,
        }
    }

    pub fn address(&self) -> &AccountAddress {
        &self.account.address
    }

    pub fn can_cover(&self, amount: Decimal) -> bool {
        self.xrd_balance >= amount
    }
}

impl PartialEq for FeePayerCandidate {
    fn eq(&self, other: &Self) -> bool {
        self.account.address == other.account.address
    }
}

impl Eq for FeePayerCandidate {}

impl std::hash::Hash for FeePayerCandidate {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.account.address.hash(state);
    }
}

#[derive(Debug, Clone)]
pub struct FeePayerSelectionAmongstCandidates {
    selected: Option<FeePayerCandidate>,
    candidates: NonEmpty<FeePayerCandidate>,
    transaction_fee: TransactionFee,
}

impl FeePayerSelectionAmongstCandidates {
    pub fn new(
        selected: Option<FeePayerCandidate>,
        candidates: NonEmpty<FeePayerCandidate>,
        transaction_fee: TransactionFee,
    ) -> Result<Self, crate::ServiceError> {
        if let Some(selected) = &selected {
            check_candidate(selected, &candidates)?;
        }
        Ok(Self {
            selected,
            candidates,
            transaction_fee,
        })
    }

    pub fn select(&mut self, candidate: FeePayerCandidate) -> Result<(), crate::ServiceError> {
        check_candidate(&candidate, &self.candidates)?;
        self.selected = Some(candidate);
        Ok(())
    }

    pub fn selected(&self) -> Option<&FeePayerCandidate> {
        self.selected.as_ref()
    }

    pub fn candidates(&self) -> &NonEmpty<FeePayerCandidate> {
        &self.candidates
    }

    pub fn transaction_fee(&self) -> &TransactionFee {
        &self.transaction_fee
    }
}

fn check_candidate(
    candidate: &FeePayerCandidate,
    candidates: &NonEmpty<FeePayerCandidate>,
) -> Result<(), crate::ServiceError> {
    if candidates.iter().any(|c| c == candidate) {
        Ok(())
    } else {
        Err(crate::BusinessError::FeePayer(FeePayerError::SelectedNotACandidate(
            candidate.address().to_string(),
        ))
        .into())
    }
}
