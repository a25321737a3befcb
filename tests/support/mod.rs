//! Test support utilities for tuskytux integration tests.
//!
//! Provides an isolated store file, a stub of the storage API, and helpers
//! for driving the REPL through stdin.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;
pub mod fixtures;
pub mod server;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;
#[allow(unused_imports)]
pub use server::{MockServer, Recorded, Reply};

use std::path::PathBuf;
use tempfile::TempDir;
use tuskytux::core::config::Config;

/// Test environment with an isolated temp directory.
///
/// No process-global state is mutated: child processes get the store path
/// and API URL through environment variables.
pub struct Test {
    /// Temporary working directory holding the store
    pub dir: TempDir,
    /// Base URL the binary talks to
    pub api_url: String,
}

impl Test {
    /// Create a test environment whose API is unreachable.
    pub fn new() -> Self {
        Self::with_api(&unreachable_url())
    }

    /// Create a test environment talking to `api_url`.
    pub fn with_api(api_url: &str) -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self {
            dir,
            api_url: api_url.to_string(),
        }
    }

    /// Create a test environment with a store file already on disk.
    pub fn with_store(api_url: &str, contents: &str) -> Self {
        let t = Self::with_api(api_url);
        std::fs::write(t.config_path(), contents).expect("failed to write store");
        t
    }

    /// Path of the store file.
    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("tuskytux_config.json")
    }

    /// Load the store as the binary left it.
    pub fn store(&self) -> Config {
        Config::read(&self.config_path()).expect("store should be readable")
    }

    /// Raw store file contents.
    pub fn store_text(&self) -> String {
        std::fs::read_to_string(self.config_path()).expect("store should exist")
    }
}

/// A URL on a loopback port nothing listens on.
pub fn unreachable_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().expect("addr").port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}
