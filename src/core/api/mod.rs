//! Storage API client.
//!
//! The `StorageApi` trait is the seam between command handlers and the
//! remote service. `Http` talks to the real endpoint; tests substitute an
//! in-memory fake.
//!
//! ## Endpoints
//!
//! | Operation      | Request             | Success              |
//! |----------------|---------------------|----------------------|
//! | validate key   | `GET /api-keys`     | status 200           |
//! | list vaults    | `GET /vaults`       | `{"items": [...]}`   |
//! | create vault   | `POST /vaults`      | `{"id": "..."}`      |
//!
//! Every request carries the key in the `Api-Key` header.

use crate::core::vault::{CreatedVault, NewVault, Vault};
use crate::error::ApiError;

mod http;

#[cfg(test)]
pub(crate) mod fake;

pub use http::Http;

/// Remote operations used by the command handlers.
pub trait StorageApi {
    /// Check whether the service accepts `key`.
    ///
    /// Returns `Ok(false)` for any non-200 status.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Transport` when the request never completes.
    fn validate_key(&self, key: &str) -> Result<bool, ApiError>;

    /// Fetch all vaults visible to `key`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure, non-2xx status, or an
    /// undecodable body.
    fn list_vaults(&self, key: &str) -> Result<Vec<Vault>, ApiError>;

    /// Create a vault owned by `key`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure, non-2xx status, or an
    /// undecodable body.
    fn create_vault(&self, key: &str, vault: &NewVault) -> Result<CreatedVault, ApiError>;
}
