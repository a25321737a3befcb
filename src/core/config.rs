//! Configuration store.
//!
//! Handles reading, writing and mutating `tuskytux_config.json`, which maps
//! each stored API key to its status and points at the active one:
//!
//! ```json
//! {
//!   "api_keys": { "k1": "active", "k2": "inactive" },
//!   "active_api": "k1"
//! }
//! ```
//!
//! The store heals itself: a missing, partial or corrupt file never produces
//! an error at load time, only a warning and a fresh default.

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::path::Path;
use tracing::{debug, warn};

use crate::core::types::ApiKey;
use crate::error::ConfigError;

/// Status of a stored API key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyStatus {
    Active,
    Inactive,
}

impl fmt::Display for KeyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyStatus::Active => f.write_str("active"),
            KeyStatus::Inactive => f.write_str("inactive"),
        }
    }
}

/// API keys in insertion order.
///
/// Serialized as a JSON object. Order matters: when the active key is
/// removed, the first remaining key takes over.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    entries: Vec<(ApiKey, KeyStatus)>,
}

impl Credentials {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Status of `key`, if stored.
    pub fn status(&self, key: &str) -> Option<KeyStatus> {
        self.position(key).map(|i| self.entries[i].1)
    }

    /// Iterate keys and statuses in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, KeyStatus)> {
        self.entries.iter().map(|(k, s)| (k.as_str(), *s))
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }

    /// Insert or overwrite, keeping the original position on overwrite.
    fn upsert(&mut self, key: ApiKey, status: KeyStatus) {
        match self.position(&key) {
            Some(i) => self.entries[i].1 = status,
            None => self.entries.push((key, status)),
        }
    }
}

impl Serialize for Credentials {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, status) in &self.entries {
            map.serialize_entry(key, status)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Credentials {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CredentialsVisitor;

        impl<'de> Visitor<'de> for CredentialsVisitor {
            type Value = Credentials;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of API keys to \"active\" or \"inactive\"")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Credentials, A::Error> {
                let mut credentials = Credentials::default();
                while let Some((key, status)) = map.next_entry::<ApiKey, KeyStatus>()? {
                    credentials.upsert(key, status);
                }
                Ok(credentials)
            }

            // `null` means no keys stored yet.
            fn visit_unit<E: de::Error>(self) -> Result<Credentials, E> {
                Ok(Credentials::default())
            }
        }

        deserializer.deserialize_any(CredentialsVisitor)
    }
}

/// Outcome of [`Config::insert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    /// Stored and promoted, since no key was active.
    Activated,
    /// Stored as inactive.
    Stored,
    /// Already present; nothing changed.
    AlreadyStored,
}

/// Local configuration stored in `tuskytux_config.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Stored API keys and their status
    #[serde(rename = "api_keys", default)]
    credentials: Credentials,
    /// The key used for vault operations
    #[serde(rename = "active_api", default)]
    active: Option<ApiKey>,
}

impl Config {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// The active API key, if any.
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Load the store at `path`, creating and persisting an empty one when
    /// the file does not exist yet.
    pub fn ensure(path: &Path) -> Self {
        if path.exists() {
            return Self::load(path);
        }

        warn!(path = %path.display(), "config file not found, creating a new one");
        let config = Self::new();
        if let Err(e) = config.save(path) {
            warn!(path = %path.display(), error = %e, "could not create config file");
        }
        config
    }

    /// Load the store at `path`.
    ///
    /// Never fails: an absent or unparseable file yields an empty store and a
    /// warning. The file itself is left untouched until the next save.
    pub fn load(path: &Path) -> Self {
        match Self::read(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "config file is corrupted or missing, using defaults"
                );
                Self::new()
            }
        }
    }

    /// Strictly read and parse the store at `path`.
    ///
    /// Missing keys default. A file that breaks the single-active-key rule
    /// is reconciled rather than rejected.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile` or `ConfigError::Parse`.
    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        debug!(path = %path.display(), "loading config");

        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let mut config: Self = serde_json::from_str(&contents).map_err(ConfigError::Parse)?;

        if config.reconcile() {
            warn!(path = %path.display(), "config had inconsistent active key, repaired");
        }

        debug!(
            keys = config.credentials.len(),
            active = config.active.is_some(),
            "config loaded"
        );
        Ok(config)
    }

    /// Write the store to `path`, overwriting previous contents.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Serialize` or `ConfigError::WriteFile`.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        debug!(path = %path.display(), "saving config");

        let contents = serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(ConfigError::WriteFile)?;
        }
        std::fs::write(path, contents).map_err(ConfigError::WriteFile)?;

        Ok(())
    }

    /// Read only the active key from the file at `path`, independent of any
    /// loaded instance. `None` on any failure.
    pub fn active_credential(path: &Path) -> Option<ApiKey> {
        Self::read(path).ok().and_then(|config| config.active)
    }

    /// Store a validated key.
    ///
    /// New keys start inactive, unless no key is active yet, in which case
    /// the key is promoted.
    pub fn insert(&mut self, key: &str) -> Insertion {
        let existed = self.credentials.contains(key);
        if !existed {
            self.credentials.upsert(key.to_string(), KeyStatus::Inactive);
        }

        if self.active.is_none() {
            self.promote(key);
            Insertion::Activated
        } else if existed {
            Insertion::AlreadyStored
        } else {
            Insertion::Stored
        }
    }

    /// Delete `key`.
    ///
    /// If it was active, the first remaining key becomes active. Returns the
    /// newly promoted key, if any.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownKey` if `key` is not stored.
    pub fn remove(&mut self, key: &str) -> Result<Option<ApiKey>, ConfigError> {
        let index = self
            .credentials
            .position(key)
            .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
        self.credentials.entries.remove(index);

        if self.active.as_deref() != Some(key) {
            return Ok(None);
        }

        self.active = None;
        let successor = self.credentials.entries.first().map(|(k, _)| k.clone());
        if let Some(next) = &successor {
            self.promote(next);
        }
        Ok(successor)
    }

    /// Make `key` the only active key.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownKey` if `key` is not stored.
    pub fn set_active(&mut self, key: &str) -> Result<(), ConfigError> {
        if !self.credentials.contains(key) {
            return Err(ConfigError::UnknownKey(key.to_string()));
        }
        self.promote(key);
        Ok(())
    }

    /// Verify the single-active-key invariant.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Inconsistent` describing the first violation.
    pub fn check(&self) -> Result<(), ConfigError> {
        let active_count = self
            .credentials
            .iter()
            .filter(|(_, s)| *s == KeyStatus::Active)
            .count();
        if active_count > 1 {
            return Err(ConfigError::Inconsistent(format!(
                "{} keys marked active",
                active_count
            )));
        }

        match self.active.as_deref() {
            Some(key) => match self.credentials.status(key) {
                Some(KeyStatus::Active) => Ok(()),
                Some(KeyStatus::Inactive) => Err(ConfigError::Inconsistent(format!(
                    "active key {} is marked inactive",
                    key
                ))),
                None => Err(ConfigError::Inconsistent(format!(
                    "active key {} is not stored",
                    key
                ))),
            },
            None if active_count > 0 => Err(ConfigError::Inconsistent(
                "a key is marked active but none is selected".to_string(),
            )),
            None => Ok(()),
        }
    }

    fn promote(&mut self, key: &str) {
        for (k, status) in &mut self.credentials.entries {
            *status = if k == key {
                KeyStatus::Active
            } else {
                KeyStatus::Inactive
            };
        }
        self.active = Some(key.to_string());
    }

    /// Bring statuses in line with the active pointer. Returns true if
    /// anything changed.
    ///
    /// A dangling pointer falls back to the first key marked active.
    fn reconcile(&mut self) -> bool {
        let before = self.clone();

        let target = self
            .active
            .clone()
            .filter(|k| self.credentials.contains(k))
            .or_else(|| {
                self.credentials
                    .iter()
                    .find(|(_, s)| *s == KeyStatus::Active)
                    .map(|(k, _)| k.to_string())
            });

        match target {
            Some(key) => self.promote(&key),
            None => {
                self.active = None;
                for (_, status) in &mut self.credentials.entries {
                    *status = KeyStatus::Inactive;
                }
            }
        }

        *self != before
    }
}
