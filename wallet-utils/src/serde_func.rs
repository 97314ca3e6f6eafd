pub fn serde_to_string<T: ?Sized + serde::Serialize>(value: &T) -> Result<String, crate::Error> {
    serde_json::to_string(value).map_err(|e| crate::Error::Serde(e.into()))
}

pub fn serde_yaml_from_str<T: serde::de::DeserializeOwned>(value: &str) -> Result<T, crate::Error> {
    serde_yaml::from_str::<T>(value).map_err(|e| crate::Error::Serde(e.into()))
}

/// Serializes a decimal as its plain string form, e.g. `"0.08581566997"`.
pub fn serialize_decimal_as_string<S>(
    value: &rust_decimal::Decimal,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&crate::unit::format_decimal(value))
}
