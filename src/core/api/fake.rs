//! In-memory storage API for handler tests.

use std::cell::RefCell;
use std::collections::HashSet;

use super::StorageApi;
use crate::core::vault::{CreatedVault, NewVault, Vault};
use crate::error::ApiError;

/// A request the fake received.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Validate(String),
    List(String),
    Create { key: String, body: String },
}

/// Accepts a fixed set of keys and serves a fixed vault list.
#[derive(Debug, Default)]
pub struct Fake {
    valid_keys: HashSet<String>,
    vaults: Vec<Vault>,
    /// Status code returned by every vault endpoint instead of success.
    failure: Option<u16>,
    calls: RefCell<Vec<Call>>,
}

impl Fake {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accepting(keys: &[&str]) -> Self {
        Self {
            valid_keys: keys.iter().map(|k| k.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn with_vaults(mut self, vaults: Vec<Vault>) -> Self {
        self.vaults = vaults;
        self
    }

    pub fn failing(mut self, status: u16) -> Self {
        self.failure = Some(status);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn fail(&self) -> Result<(), ApiError> {
        match self.failure {
            Some(status) => Err(ApiError::Status {
                status,
                body: "simulated failure".to_string(),
            }),
            None => Ok(()),
        }
    }
}

impl StorageApi for Fake {
    fn validate_key(&self, key: &str) -> Result<bool, ApiError> {
        self.calls.borrow_mut().push(Call::Validate(key.to_string()));
        Ok(self.valid_keys.contains(key))
    }

    fn list_vaults(&self, key: &str) -> Result<Vec<Vault>, ApiError> {
        self.calls.borrow_mut().push(Call::List(key.to_string()));
        self.fail()?;
        Ok(self.vaults.clone())
    }

    fn create_vault(&self, key: &str, vault: &NewVault) -> Result<CreatedVault, ApiError> {
        let body = serde_json::to_string(vault).expect("request body serializes");
        self.calls.borrow_mut().push(Call::Create {
            key: key.to_string(),
            body,
        });
        self.fail()?;
        Ok(CreatedVault {
            id: Some(format!("vault-{}", vault.name.to_lowercase())),
        })
    }
}
