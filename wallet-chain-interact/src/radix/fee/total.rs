use rust_decimal::Decimal;
use wallet_utils::unit;

/// Range the fee can end up in. `max` is what has to be locked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalFee {
    #[serde(serialize_with = "wallet_utils::serde_func::serialize_decimal_as_string")]
    pub min: Decimal,
    #[serde(serialize_with = "wallet_utils::serde_func::serialize_decimal_as_string")]
    pub max: Decimal,
}

impl TotalFee {
    pub fn lock_fee(&self) -> Decimal {
        self.max
    }

    pub fn displayed_total_fee(&self) -> String {
        if self.max > self.min {
            format!(
                "{} - {}",
                unit::format_to_display(&self.min),
                unit::format_to_display(&self.max)
            )
        } else {
            unit::format_to_display(&self.max)
        }
    }
}
