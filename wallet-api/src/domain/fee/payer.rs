use super::{
    FeeDomain, FeePayerCandidate, FeePayerSelectionAmongstCandidates, FeeValidationOutcome,
    ReviewedTransaction, ValidationNote,
};
use crate::{
    error::business::fee_payer::FeePayerError,
    infrastructure::{AccountsRepo, SigningFactorsResolver},
    request::fee::DetermineFeePayerRequest,
    response_vo::fee::{DetermineFeePayerResponse, FeePayerSelectionResult},
};
use nonempty::NonEmpty;
use rust_decimal::Decimal;
use std::collections::HashMap;
use wallet_chain_interact::radix::{
    protocol::manifest::ManifestSummary,
    signers::{IntentSigning, SigningFactors, SigningPurpose, TransactionSigners},
    BalanceProvider,
};
use wallet_types::chain::{address::AccountAddress, entity::Entity, network::NetworkId};

impl FeeDomain {
    /// Accounts of the network the ledger reports an XRD balance for, zero balances included.
    pub async fn fee_payer_candidates(
        network_id: NetworkId,
        accounts_repo: &dyn AccountsRepo,
        balance_provider: &dyn BalanceProvider,
        refresh_balances: bool,
    ) -> Result<NonEmpty<FeePayerCandidate>, crate::ServiceError> {
        let accounts = accounts_repo.accounts_on_network(network_id).await?;
        let addresses: Vec<AccountAddress> = accounts.iter().map(|a| a.address.clone()).collect();

        let balances: HashMap<AccountAddress, Decimal> = balance_provider
            .xrd_balances(network_id, &addresses, refresh_balances)
            .await?
            .into_iter()
            .filter_map(|(address, balance)| balance.map(|b| (address, b)))
            .collect();

        let candidates = accounts
            .into_iter()
            .filter_map(|account| {
                let balance = balances.get(&account.address).copied()?;
                Some(FeePayerCandidate::new(account, balance))
            })
            .collect::<Vec<_>>();

        NonEmpty::from_vec(candidates)
            .ok_or_else(|| crate::BusinessError::FeePayer(FeePayerError::NoFeePayerCandidates).into())
    }

    /// Picks the default fee payer of a transaction.
    ///
    /// Order of preference:
    /// 1. nobody, when nothing is left to lock once the manifest's own lock is deducted
    /// 2. a current signer who can pay
    /// 3. an account the transaction withdraws from, deposits into or needs auth from,
    ///    that can pay including the cost of its own signature
    /// 4. the candidate with the highest balance, even if it cannot pay
    pub async fn determine_fee_payer(
        req: DetermineFeePayerRequest,
        candidates: NonEmpty<FeePayerCandidate>,
        resolver: &dyn SigningFactorsResolver,
    ) -> Result<DetermineFeePayerResponse, crate::ServiceError> {
        let total_fee = req.transaction_fee.total_fee();

        if total_fee.lock_fee().is_zero() {
            tracing::debug!("[determine_fee_payer] fee is locked by the manifest, no payer needed");
            return Self::response(
                req,
                candidates,
                None,
                FeeValidationOutcome::Valid(Some(ValidationNote::FeePayerSuperfluous)),
            );
        }

        let signer_accounts: Vec<AccountAddress> = req
            .transaction_signers
            .intent_signer_entities_or_empty()
            .iter()
            .filter_map(|entity| entity.as_account().map(|a| a.address.clone()))
            .collect();

        for address in signer_accounts.iter() {
            let Some(candidate) = find_candidate(&candidates, address) else {
                continue;
            };
            if candidate.can_cover(total_fee.max) {
                tracing::debug!("[determine_fee_payer] payer found amongst signers: {address}");
                let result = Self::unchanged(&req, candidate.clone());
                return Self::response(
                    req,
                    candidates,
                    Some(result),
                    FeeValidationOutcome::Valid(None),
                );
            }
        }

        let manifest = req.manifest_summary.clone();
        let groups = [
            ("accounts_withdrawn_from", &manifest.accounts_withdrawn_from),
            ("accounts_deposited_into", &manifest.accounts_deposited_into),
            ("accounts_requiring_auth", &manifest.accounts_requiring_auth),
        ];
        for (group, addresses) in groups {
            for address in addresses.iter() {
                if signer_accounts.contains(address) {
                    continue;
                }
                let Some(candidate) = find_candidate(&candidates, address) else {
                    continue;
                };
                let result = Self::with_payer_as_signer(&req, candidate.clone(), resolver).await?;
                if candidate.can_cover(result.updated_fee.total_fee().max) {
                    tracing::debug!("[determine_fee_payer] payer found in {group}: {address}");
                    return Self::response(
                        req,
                        candidates,
                        Some(result),
                        FeeValidationOutcome::Valid(Some(ValidationNote::IntroducesNewAccount)),
                    );
                }
            }
        }

        let richest = richest_candidate(&candidates).clone();
        tracing::info!(
            "[determine_fee_payer] no suitable fee payer, falling back to {} with balance {}",
            richest.address(),
            richest.xrd_balance
        );

        if signer_accounts.contains(richest.address()) {
            let result = Self::unchanged(&req, richest);
            return Self::response(
                req,
                candidates,
                Some(result),
                FeeValidationOutcome::InsufficientBalance,
            );
        }

        let result = Self::with_payer_as_signer(&req, richest, resolver).await?;
        let validation = if result.payer.can_cover(result.updated_fee.total_fee().max) {
            FeeValidationOutcome::Valid(Some(ValidationNote::IntroducesNewAccount))
        } else {
            FeeValidationOutcome::InsufficientBalance
        };
        Self::response(req, candidates, Some(result), validation)
    }

    /// Swaps the fee payer of a reviewed transaction.
    ///
    /// The previous payer stays a signer only if the manifest needs its auth anyway.
    /// Nothing of `reviewed` is touched, on error the caller keeps what it had.
    pub async fn replace_fee_payer(
        new_payer: FeePayerCandidate,
        reviewed: &ReviewedTransaction,
        manifest_summary: &ManifestSummary,
        resolver: &dyn SigningFactorsResolver,
    ) -> Result<ReviewedTransaction, crate::ServiceError> {
        if reviewed.fee_payer.as_ref() == Some(&new_payer) {
            return Ok(reviewed.clone());
        }

        let payer_network = new_payer.account.network_id();
        if payer_network != reviewed.network_id {
            return Err(crate::BusinessError::FeePayer(FeePayerError::NetworkMismatch {
                payer: payer_network.to_string(),
                transaction: reviewed.network_id.to_string(),
            })
            .into());
        }

        let mut signers = reviewed.transaction_signers.intent_signer_entities_or_empty();
        if let Some(previous) = &reviewed.fee_payer {
            if !manifest_summary.requires_auth(previous.address()) {
                signers.retain(|entity| !entity.is_account(previous.address()));
            }
        }
        let new_signer = Entity::Account(new_payer.account.clone());
        if !signers.contains(&new_signer) {
            signers.push(new_signer);
        }

        let transaction_signers =
            TransactionSigners::new(&reviewed.transaction_signers.notary_public_key, signers);
        let signing_factors = Self::resolve_signing_factors(
            reviewed.network_id,
            &transaction_signers,
            reviewed.signing_purpose,
            resolver,
        )
        .await?;

        let mut transaction_fee = reviewed.transaction_fee;
        if reviewed.fee_payer.is_none() && transaction_fee.total_fee().max.is_zero() {
            // 之前不需要付款账户，现在要加上 lock fee 指令，notary 也不再是签名者
            transaction_fee.add_lock_fee_cost();
            transaction_fee.update_notarizing_cost(false);
        }
        transaction_fee.update_signatures_cost(signing_factors.expected_signature_count());

        Ok(ReviewedTransaction {
            network_id: reviewed.network_id,
            execution_summary: reviewed.execution_summary.clone(),
            fee_payer: Some(new_payer),
            transaction_fee,
            transaction_signers,
            signing_factors,
            signing_purpose: reviewed.signing_purpose,
        })
    }

    pub async fn resolve_signing_factors(
        network_id: NetworkId,
        signers: &TransactionSigners,
        purpose: SigningPurpose,
        resolver: &dyn SigningFactorsResolver,
    ) -> Result<SigningFactors, crate::ServiceError> {
        let IntentSigning::IntentSigners(entities) = &signers.intent_signing else {
            return Ok(SigningFactors::default());
        };

        resolver
            .signing_factors(network_id, entities, purpose)
            .await
            .inspect_err(|e| tracing::error!("[resolve_signing_factors] error: {e}"))
    }

    async fn with_payer_as_signer(
        req: &DetermineFeePayerRequest,
        payer: FeePayerCandidate,
        resolver: &dyn SigningFactorsResolver,
    ) -> Result<FeePayerSelectionResult, crate::ServiceError> {
        let mut signers = req.transaction_signers.intent_signer_entities_or_empty();
        signers.push(Entity::Account(payer.account.clone()));
        let transaction_signers =
            TransactionSigners::new(&req.transaction_signers.notary_public_key, signers);

        let signing_factors = Self::resolve_signing_factors(
            req.network_id,
            &transaction_signers,
            req.signing_purpose,
            resolver,
        )
        .await?;

        let mut updated_fee = req.transaction_fee;
        updated_fee.update_signatures_cost(signing_factors.expected_signature_count());

        Ok(FeePayerSelectionResult {
            payer,
            updated_fee,
            transaction_signers,
            signing_factors,
        })
    }

    fn unchanged(
        req: &DetermineFeePayerRequest,
        payer: FeePayerCandidate,
    ) -> FeePayerSelectionResult {
        FeePayerSelectionResult {
            payer,
            updated_fee: req.transaction_fee,
            transaction_signers: req.transaction_signers.clone(),
            signing_factors: req.signing_factors.clone(),
        }
    }

    fn response(
        req: DetermineFeePayerRequest,
        candidates: NonEmpty<FeePayerCandidate>,
        result: Option<FeePayerSelectionResult>,
        validation: FeeValidationOutcome,
    ) -> Result<DetermineFeePayerResponse, crate::ServiceError> {
        let (selected, transaction_fee) = match &result {
            Some(result) => (Some(result.payer.clone()), result.updated_fee),
            None => (None, req.transaction_fee),
        };
        let selection =
            FeePayerSelectionAmongstCandidates::new(selected, candidates, transaction_fee)?;

        Ok(DetermineFeePayerResponse {
            selection,
            result,
            validation,
        })
    }
}

fn find_candidate<'a>(
    candidates: &'a NonEmpty<FeePayerCandidate>,
    address: &AccountAddress,
) -> Option<&'a FeePayerCandidate> {
    candidates.iter().find(|c| c.address() == address)
}

// 余额相同时取排在前面的账户
fn richest_candidate(candidates: &NonEmpty<FeePayerCandidate>) -> &FeePayerCandidate {
    candidates.tail.iter().fold(&candidates.head, |richest, candidate| {
        if candidate.xrd_balance > richest.xrd_balance {
            candidate
        } else {
            richest
        }
    })
}
