use serde::{Deserialize, Deserializer};

/// Accepts `?status=true`, `?status=false`, or an empty/missing value (`None`).
pub fn deserialize_optional_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) if s.eq_ignore_ascii_case("true") => Ok(Some(true)),
        Some(s) if s.eq_ignore_ascii_case("false") => Ok(Some(false)),
        Some(s) => Err(serde::de::Error::custom(format!(
            "Validation failed (boolean string is expected), got '{}'",
            s
        ))),
    }
}
