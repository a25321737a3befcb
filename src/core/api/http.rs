//! HTTP implementation of the storage API.

use reqwest::blocking::{Client, Response};
use tracing::debug;

use super::StorageApi;
use crate::core::constants;
use crate::core::vault::{CreatedVault, NewVault, Vault, VaultPage};
use crate::error::ApiError;

/// Blocking HTTP client for the Tusky API.
///
/// All requests share one timeout (`constants::REQUEST_TIMEOUT`).
#[derive(Debug, Clone)]
pub struct Http {
    base_url: String,
    client: Client,
}

impl Http {
    /// Create a client for the API rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Client` if the TLS backend cannot be initialized.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(constants::REQUEST_TIMEOUT)
            .user_agent(concat!("tuskytux/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Turn a non-2xx response into `ApiError::Status`.
fn ensure_success(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().unwrap_or_default();
    Err(ApiError::Status {
        status: status.as_u16(),
        body: body.trim().to_string(),
    })
}

impl StorageApi for Http {
    fn validate_key(&self, key: &str) -> Result<bool, ApiError> {
        let url = self.url(constants::API_KEYS_PATH);
        debug!(url = %url, "validating api key");

        let response = self
            .client
            .get(&url)
            .header(constants::API_KEY_HEADER, key)
            .send()
            .map_err(ApiError::Transport)?;

        let status = response.status();
        debug!(status = status.as_u16(), "api key validation response");
        Ok(status == reqwest::StatusCode::OK)
    }

    fn list_vaults(&self, key: &str) -> Result<Vec<Vault>, ApiError> {
        let url = self.url(constants::VAULTS_PATH);
        debug!(url = %url, "listing vaults");

        let response = self
            .client
            .get(&url)
            .header(constants::API_KEY_HEADER, key)
            .send()
            .map_err(ApiError::Transport)?;

        let page: VaultPage = ensure_success(response)?
            .json()
            .map_err(ApiError::Decode)?;

        debug!(count = page.items.len(), "vaults fetched");
        Ok(page.items)
    }

    fn create_vault(&self, key: &str, vault: &NewVault) -> Result<CreatedVault, ApiError> {
        let url = self.url(constants::VAULTS_PATH);
        debug!(url = %url, name = %vault.name, "creating vault");

        let response = self
            .client
            .post(&url)
            .header(constants::API_KEY_HEADER, key)
            .json(vault)
            .send()
            .map_err(ApiError::Transport)?;

        let created: CreatedVault = ensure_success(response)?
            .json()
            .map_err(ApiError::Decode)?;

        debug!(id = ?created.id, "vault created");
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let api = Http::new("http://localhost:8080//").unwrap();
        assert_eq!(api.base_url(), "http://localhost:8080");
        assert_eq!(api.url("/vaults"), "http://localhost:8080/vaults");
    }

    #[test]
    fn test_unreachable_host_is_transport_error() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let api = Http::new(&format!("http://127.0.0.1:{}", port)).unwrap();

        assert!(matches!(api.validate_key("k"), Err(ApiError::Transport(_))));
        assert!(matches!(api.list_vaults("k"), Err(ApiError::Transport(_))));
    }
}
