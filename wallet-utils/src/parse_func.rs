pub fn decimal_from_str(value: &str) -> Result<rust_decimal::Decimal, crate::Error> {
    value
        .trim()
        .parse::<rust_decimal::Decimal>()
        .map_err(|e| crate::Error::Parse(e.into()))
}

pub fn u16_from_str(value: &str) -> Result<u16, crate::Error> {
    value
        .trim()
        .parse::<u16>()
        .map_err(|e| crate::Error::Parse(e.into()))
}
