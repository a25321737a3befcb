//! Constants used throughout tuskytux.
//!
//! Centralizes file names, endpoints and other fixed values.

use std::time::Duration;

/// Default configuration file name, relative to the working directory.
pub const CONFIG_FILE: &str = "tuskytux_config.json";

/// Default base URL of the Tusky storage API.
pub const API_BASE_URL: &str = "https://api.tusky.io";

/// Endpoint used to validate an API key.
pub const API_KEYS_PATH: &str = "/api-keys";

/// Endpoint for listing and creating vaults.
pub const VAULTS_PATH: &str = "/vaults";

/// Header carrying the API key on every request.
pub const API_KEY_HEADER: &str = "Api-Key";

/// Timeout applied to every remote call.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Typed at any prompt to abandon the current operation.
pub const CANCEL_KEYWORD: &str = "cancel";

/// Where users register for an API key.
pub const REGISTER_URL: &str = "https://app.tusky.io/account/api-keys";

/// Environment variable overriding the config file path.
pub const CONFIG_ENV: &str = "TUSKYTUX_CONFIG";

/// Environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "TUSKYTUX_API_URL";

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV: &str = "TUSKYTUX_LOG";
