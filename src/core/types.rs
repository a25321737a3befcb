//! Type aliases for domain concepts.

/// An API key string, used verbatim as the `Api-Key` header value.
pub type ApiKey = String;

/// A server-assigned vault identifier.
pub type VaultId = String;
