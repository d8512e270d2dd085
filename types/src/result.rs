//! Outcome of a successful validation.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::token::empty_extra_info;
use crate::Timestamp;

/// Claims of an access token that passed every check.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub address: String,
    pub host: String,
    /// Timestamp of the anchor block.
    pub issued: Timestamp,
    /// `issued + ttl`; the token is still valid at exactly this instant.
    pub expires: Timestamp,
    #[serde(default = "empty_extra_info", skip_serializing_if = "is_empty_object")]
    pub extra_info: Value,
}

fn is_empty_object(value: &Value) -> bool {
    value.as_object().is_some_and(|map| map.is_empty())
}
