//! Remote vault model.
//!
//! Vaults live on the storage service and are never cached locally. These
//! types mirror the JSON exchanged with the `/vaults` endpoint.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::core::types::VaultId;

/// A vault as returned by `GET /vaults`.
///
/// Every field is optional on the wire; display helpers supply sentinels.
/// A field with an unexpected JSON type is treated as absent rather than
/// failing the whole page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Vault {
    #[serde(default, deserialize_with = "lenient_text")]
    pub id: Option<VaultId>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub tags: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient")]
    pub encrypted: Option<bool>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub status: Option<String>,
}

impl Vault {
    pub fn display_id(&self) -> &str {
        non_empty(&self.id).unwrap_or("N/A")
    }

    pub fn display_name(&self) -> &str {
        non_empty(&self.name).unwrap_or("N/A")
    }

    pub fn display_description(&self) -> &str {
        non_empty(&self.description).unwrap_or("No Description")
    }

    pub fn display_status(&self) -> &str {
        non_empty(&self.status).unwrap_or("Unknown")
    }

    pub fn display_encrypted(&self) -> &str {
        if self.encrypted.unwrap_or(false) {
            "yes"
        } else {
            "no"
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Response body of `GET /vaults`.
#[derive(Debug, Default, Deserialize)]
pub struct VaultPage {
    #[serde(default, deserialize_with = "lenient_items")]
    pub items: Vec<Vault>,
}

/// Decode `T`, or `None` if the value has a different shape.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).ok())
}

/// Strings as-is; numbers and booleans in their JSON spelling.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

/// Items that are not objects are kept as an all-sentinel vault.
fn lenient_items<'de, D>(deserializer: D) -> Result<Vec<Vault>, D::Error>
where
    D: Deserializer<'de>,
{
    let items: Option<Vec<Value>> = lenient(deserializer)?;
    Ok(items
        .unwrap_or_default()
        .into_iter()
        .map(|item| Vault::deserialize(item).unwrap_or_default())
        .collect())
}

/// Request body of `POST /vaults`.
///
/// Optional fields that are empty or false are left out of the JSON
/// entirely, not sent as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewVault {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub encrypted: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub keys: Vec<String>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl NewVault {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the description, ignoring blank input.
    pub fn with_description(mut self, description: &str) -> Self {
        let description = description.trim();
        self.description = (!description.is_empty()).then(|| description.to_string());
        self
    }

    /// Set tags from comma-separated input.
    pub fn with_tags(mut self, input: &str) -> Self {
        self.tags = parse_tags(input);
        self
    }

    /// Enable encryption with the given keys. Keys are only sent for an
    /// encrypted vault.
    pub fn with_encryption(mut self, keys: Vec<String>) -> Self {
        self.encrypted = true;
        self.keys = keys;
        self
    }
}

/// Split comma-separated tags, trimming each and dropping empties.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

/// Response body of `POST /vaults`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatedVault {
    #[serde(default, deserialize_with = "lenient_text")]
    pub id: Option<VaultId>,
}
