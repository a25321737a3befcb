//! Test fixtures and constants.

/// Store with two keys, the first active.
pub const TWO_KEYS: &str =
    r#"{"api_keys": {"k1": "active", "k2": "inactive"}, "active_api": "k1"}"#;

/// Store with a single active key.
pub const ONE_KEY: &str = r#"{"api_keys": {"k1": "active"}, "active_api": "k1"}"#;

/// `GET /vaults` response with one complete and one sparse vault.
pub const VAULT_PAGE: &str = r#"{"items": [
    {"id": "v-1", "name": "Photos", "description": "holiday pictures", "status": "active", "encrypted": true},
    {"id": "v-2"}
]}"#;
