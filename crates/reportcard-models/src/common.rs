use reportcard_core::serde::deserialize_optional_bool;
use serde::Deserialize;
use utoipa::IntoParams;

/// `?status=` filter accepted by every list endpoint.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StatusQuery {
    /// Omit to list records of every status.
    #[serde(default, deserialize_with = "deserialize_optional_bool")]
    #[param(value_type = Option<bool>)]
    pub status: Option<bool>,
}
