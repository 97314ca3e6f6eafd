use rust_decimal::Decimal;

/// Network calibrated costs of the instructions the wallet adds to a manifest.
///
/// The values must match the on-ledger fee table digit for digit, the preview
/// estimate is compared against them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PredefinedFeeConstants {
    /// 15% margin added on top of the preview estimate
    pub network_fee_multiplier: Decimal,
    pub lock_fee_instruction_cost: Decimal,
    pub fungible_guarantee_instruction_cost: Decimal,
    pub non_fungible_guarantee_instruction_cost: Decimal,
    pub signature_cost: Decimal,
    pub notarizing_cost: Decimal,
    pub notarizing_cost_when_notary_is_signatory: Decimal,
}

// `Decimal::from_parts(lo, mid, hi, negative, scale)`, the only const constructor
pub const PREDEFINED_FEE_CONSTANTS: PredefinedFeeConstants = PredefinedFeeConstants {
    network_fee_multiplier: Decimal::from_parts(15, 0, 0, false, 2),
    // 8581566997 = 1 << 32 | 4286599701
    lock_fee_instruction_cost: Decimal::from_parts(4286599701, 1, 0, false, 11),
    fungible_guarantee_instruction_cost: Decimal::from_parts(908532837, 0, 0, false, 11),
    non_fungible_guarantee_instruction_cost: Decimal::from_parts(954602837, 0, 0, false, 11),
    signature_cost: Decimal::from_parts(1109974758, 0, 0, false, 11),
    notarizing_cost: Decimal::from_parts(81393944, 0, 0, false, 10),
    notarizing_cost_when_notary_is_signatory: Decimal::from_parts(84273944, 0, 0, false, 10),
};

impl PredefinedFeeConstants {
    pub fn notarizing_cost(&self, notary_is_signatory: bool) -> Decimal {
        if notary_is_signatory {
            self.notarizing_cost_when_notary_is_signatory
        } else {
            self.notarizing_cost
        }
    }

    pub fn signatures_cost(&self, signatures_count: usize) -> Decimal {
        Decimal::from(signatures_count) * self.signature_cost
    }
}
