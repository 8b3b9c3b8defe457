//! Accessory data model

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Opaque identifier assigned by the remote service.
///
/// Servers return either JSON numbers or strings for ids; both are accepted
/// and round-tripped unchanged. Ids are never generated client-side.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AccessoryId {
    Number(i64),
    Text(String),
}

impl fmt::Display for AccessoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for AccessoryId {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for AccessoryId {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// A persisted accessory record, owned by the remote service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Accessory {
    pub id: AccessoryId,
    pub name: String,
    /// Price in INR. Lenient on the wire: numeric strings are parsed,
    /// anything non-numeric becomes 0.
    #[serde(default, deserialize_with = "lenient_price")]
    pub price: f64,
    /// Optional URL; empty when the server omits it.
    #[serde(default)]
    pub link: String,
}

/// In-progress form values, unvalidated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccessoryDraft {
    pub name: String,
    pub price: String,
    pub link: String,
}

/// Normalized request body for create and update calls.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccessoryPayload {
    pub name: String,
    pub price: f64,
    pub link: String,
}

/// Sum of all prices. Non-numeric and missing prices already collapsed to
/// zero during deserialization, so this is a plain fold.
#[must_use]
pub fn subtotal(items: &[Accessory]) -> f64 {
    items.iter().map(|a| a.price).sum()
}

/// Accept numbers, numeric strings, and anything else as `0.0`.
fn lenient_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    })
}
