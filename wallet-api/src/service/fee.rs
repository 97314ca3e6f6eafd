use crate::{
    config::FeeConfig,
    domain::fee::{FeeDomain, FeePayerCandidate, ReviewedTransaction},
    infrastructure::{AccountsRepo, SigningFactorsResolver},
    request::fee::{DetermineFeePayerRequest, ReviewTransactionReq},
    response_vo::fee::{DetermineFeePayerResponse, FeeDetailsVo, TransactionReviewResp},
};
use nonempty::NonEmpty;
use std::sync::Arc;
use wallet_chain_interact::radix::{
    fee::{AdvancedFeeCustomization, TransactionFee},
    protocol::manifest::ManifestSummary,
    signers::TransactionSigners,
    BalanceProvider,
};
use wallet_types::chain::network::NetworkId;

pub struct FeeService {
    accounts_repo: Arc<dyn AccountsRepo>,
    balance_provider: Arc<dyn BalanceProvider>,
    resolver: Arc<dyn SigningFactorsResolver>,
    config: FeeConfig,
}

impl FeeService {
    pub fn new(
        accounts_repo: Arc<dyn AccountsRepo>,
        balance_provider: Arc<dyn BalanceProvider>,
        resolver: Arc<dyn SigningFactorsResolver>,
        config: FeeConfig,
    ) -> Self {
        Self {
            accounts_repo,
            balance_provider,
            resolver,
            config,
        }
    }

    pub async fn fee_payer_candidates(
        &self,
        network_id: NetworkId,
    ) -> Result<NonEmpty<FeePayerCandidate>, crate::ServiceError> {
        FeeDomain::fee_payer_candidates(
            network_id,
            self.accounts_repo.as_ref(),
            self.balance_provider.as_ref(),
            self.config.refresh_balances,
        )
        .await
    }

    pub async fn determine_fee_payer(
        &self,
        req: DetermineFeePayerRequest,
    ) -> Result<DetermineFeePayerResponse, crate::ServiceError> {
        let candidates = self.fee_payer_candidates(req.network_id).await?;
        tracing::debug!(
            "[determine_fee_payer] network = {}, candidates = {}",
            req.network_id,
            candidates.len()
        );
        FeeDomain::determine_fee_payer(req, candidates, self.resolver.as_ref()).await
    }

    /// Everything the review screen needs: signers, signing factors, fee and default payer.
    pub async fn review_transaction(
        &self,
        req: ReviewTransactionReq,
    ) -> Result<TransactionReviewResp, crate::ServiceError> {
        let ReviewTransactionReq {
            network_id,
            notary_public_key,
            entities_requiring_auth,
            execution_summary,
            manifest_summary,
            signing_purpose,
        } = req;

        let transaction_signers =
            TransactionSigners::new(&notary_public_key, entities_requiring_auth);
        let signing_factors = FeeDomain::resolve_signing_factors(
            network_id,
            &transaction_signers,
            signing_purpose,
            self.resolver.as_ref(),
        )
        .await?;
        let transaction_fee =
            TransactionFee::prepare(&execution_summary, &transaction_signers, &signing_factors)?;

        let fee_payer_selection = self
            .determine_fee_payer(DetermineFeePayerRequest {
                network_id,
                transaction_fee,
                transaction_signers: transaction_signers.clone(),
                signing_factors: signing_factors.clone(),
                signing_purpose,
                manifest_summary,
            })
            .await?;

        let mut reviewed = ReviewedTransaction {
            network_id,
            execution_summary,
            fee_payer: None,
            transaction_fee,
            transaction_signers,
            signing_factors,
            signing_purpose,
        };
        if let Some(result) = &fee_payer_selection.result {
            reviewed.fee_payer = Some(result.payer.clone());
            reviewed.transaction_fee = result.updated_fee;
            reviewed.transaction_signers = result.transaction_signers.clone();
            reviewed.signing_factors = result.signing_factors.clone();
        }

        Ok(TransactionReviewResp {
            reviewed,
            fee_payer_selection,
        })
    }

    pub async fn replace_fee_payer(
        &self,
        new_payer: FeePayerCandidate,
        reviewed: &ReviewedTransaction,
        manifest_summary: &ManifestSummary,
    ) -> Result<ReviewedTransaction, crate::ServiceError> {
        tracing::info!(
            "[replace_fee_payer] {:?} -> {}",
            reviewed.fee_payer.as_ref().map(|p| p.address().to_string()),
            new_payer.address()
        );
        FeeDomain::replace_fee_payer(new_payer, reviewed, manifest_summary, self.resolver.as_ref())
            .await
    }

    pub fn toggle_fee_mode(&self, reviewed: &mut ReviewedTransaction) -> FeeDetailsVo {
        reviewed.transaction_fee.toggle_mode();
        FeeDetailsVo::from(&reviewed.transaction_fee)
    }

    /// Applies the padding and tip the user typed. Only meaningful in advanced mode.
    pub fn customize_advanced_fee(
        &self,
        reviewed: &mut ReviewedTransaction,
        padding_fee: &str,
        tip_percentage: &str,
    ) -> Result<FeeDetailsVo, crate::ServiceError> {
        let Some(advanced) = reviewed.transaction_fee.advanced() else {
            return Err(crate::ServiceError::Parameter(
                "fee is not in advanced mode".to_string(),
            ));
        };

        let mut customization: AdvancedFeeCustomization = *advanced;
        customization.set_padding_fee(padding_fee);
        customization.set_tip_percentage(tip_percentage);
        reviewed.transaction_fee.update_advanced(customization)?;

        Ok(FeeDetailsVo::from(&reviewed.transaction_fee))
    }
}
