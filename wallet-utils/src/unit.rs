use crate::error::{parse, Error};
use rust_decimal::{Decimal, RoundingStrategy};

// 展示手续费时保留的小数位
pub const DISPLAY_DECIMALS: u32 = 8;

/// Saturating floor at zero. Negative results become `0`, everything else is untouched.
pub trait Clamped {
    fn clamped(self) -> Self;
}

impl Clamped for Decimal {
    fn clamped(self) -> Self {
        if self.is_sign_negative() {
            Decimal::ZERO
        } else {
            self
        }
    }
}

pub fn parse_non_negative(value: &str) -> Result<Decimal, crate::Error> {
    let res = crate::parse_func::decimal_from_str(value)?;
    if res.is_sign_negative() && !res.is_zero() {
        return Err(Error::Parse(parse::ParseError::NegativeAmount(
            value.to_string(),
        )));
    }
    Ok(res)
}

/// User typed amounts: anything that is not a non-negative decimal counts as zero.
pub fn non_negative_or_zero(value: &str) -> Decimal {
    match parse_non_negative(value) {
        Ok(v) => v,
        Err(e) => {
            tracing::debug!("non_negative_or_zero() value = {value}, error = {e}");
            Decimal::ZERO
        }
    }
}

pub fn format_decimal(value: &Decimal) -> String {
    value.normalize().to_string()
}

// 截断到 DISPLAY_DECIMALS 位小数，去掉多余的 0
pub fn format_to_display(value: &Decimal) -> String {
    let truncated = value.round_dp_with_strategy(DISPLAY_DECIMALS, RoundingStrategy::ToZero);
    format_decimal(&truncated)
}
