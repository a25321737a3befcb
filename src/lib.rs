//! tuskytux - command-line companion for Tusky decentralized storage.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Interactive interface
//! │   ├── repl          # Root, config and vaults menus
//! │   ├── keys          # API key commands
//! │   ├── vaults        # Vault commands
//! │   ├── prompt        # Input sources and the prompt-until-valid loop
//! │   ├── session       # Store + API client handed to every handler
//! │   └── output        # Terminal output helpers
//! └── core/             # Library components, no terminal I/O
//!     ├── config        # tuskytux_config.json store
//!     ├── vault         # Remote vault model
//!     ├── api/          # Storage API
//!     │   ├── mod       # StorageApi trait
//!     │   └── http      # reqwest implementation
//!     ├── constants     # Paths, endpoints, timeout
//!     └── types         # Domain aliases
//! ```

pub mod cli;
pub mod core;
pub mod error;
