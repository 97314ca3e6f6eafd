use crate::domain::fee::{
    FeePayerCandidate, FeePayerSelectionAmongstCandidates, FeeValidationOutcome,
    ReviewedTransaction,
};
use nonempty::NonEmpty;
use wallet_chain_interact::radix::{
    fee::{Mode, TotalFee, TransactionFee},
    signers::{SigningFactors, TransactionSigners},
};
use wallet_utils::unit;

/// Payer picked for a transaction, together with everything that had to change for it.
/// The parts are only valid as a whole.
#[derive(Debug, Clone)]
pub struct FeePayerSelectionResult {
    pub payer: FeePayerCandidate,
    pub updated_fee: TransactionFee,
    pub transaction_signers: TransactionSigners,
    pub signing_factors: SigningFactors,
}

#[derive(Debug, Clone)]
pub struct DetermineFeePayerResponse {
    pub selection: FeePayerSelectionAmongstCandidates,
    pub result: Option<FeePayerSelectionResult>,
    pub validation: FeeValidationOutcome,
}

impl DetermineFeePayerResponse {
    pub fn candidates(&self) -> &NonEmpty<FeePayerCandidate> {
        self.selection.candidates()
    }
}

#[derive(Debug, Clone)]
pub struct TransactionReviewResp {
    pub reviewed: ReviewedTransaction,
    pub fee_payer_selection: DetermineFeePayerResponse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FeeModeVo {
    Normal,
    Advanced,
}

#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeDetailsVo {
    pub mode: FeeModeVo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_fee: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub royalty_fee: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_fee: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tip_percentage: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tip_amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_by_dapps: Option<String>,
    pub total_fee: TotalFee,
    pub displayed_total_fee: String,
}

impl FeeDetailsVo {
    pub fn to_json_str(&self) -> Result<String, crate::ServiceError> {
        Ok(wallet_utils::serde_func::serde_to_string(self)?)
    }
}

impl From<&TransactionFee> for FeeDetailsVo {
    fn from(value: &TransactionFee) -> Self {
        let total_fee = value.total_fee();
        let mut res = Self {
            mode: FeeModeVo::Normal,
            network_fee: None,
            royalty_fee: None,
            padding_fee: None,
            tip_percentage: None,
            tip_amount: None,
            paid_by_dapps: None,
            total_fee,
            displayed_total_fee: total_fee.displayed_total_fee(),
        };

        match value.mode() {
            Mode::Normal(normal) => {
                res.network_fee = Some(unit::format_to_display(&normal.network_fee));
                res.royalty_fee = Some(unit::format_to_display(&normal.royalty_fee));
            }
            Mode::Advanced(advanced) => {
                res.mode = FeeModeVo::Advanced;
                res.padding_fee = Some(unit::format_to_display(&advanced.padding_fee()));
                res.tip_percentage = Some(advanced.tip_percentage());
                res.tip_amount = Some(unit::format_to_display(&advanced.tip_amount()));
                res.paid_by_dapps = Some(unit::format_to_display(&advanced.paid_by_dapps()));
            }
        }
        res
    }
}
