//! REPL session state.

use std::path::{Path, PathBuf};
use tracing::warn;

use crate::cli::output;
use crate::core::api::StorageApi;
use crate::core::config::Config;

/// Everything a command handler needs: the loaded store, where it lives,
/// and the API client.
pub struct Session<A> {
    path: PathBuf,
    pub(crate) config: Config,
    pub(crate) api: A,
}

impl<A: StorageApi> Session<A> {
    /// Open the store at `path`, creating it if absent.
    pub fn open(path: PathBuf, api: A) -> Self {
        let config = Config::ensure(&path);
        Self::new(path, config, api)
    }

    pub fn new(path: PathBuf, config: Config, api: A) -> Self {
        Self { path, config, api }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Write the store through to disk.
    ///
    /// A failed save is reported but not undone: the in-memory change stays
    /// in effect for the rest of the session.
    pub(crate) fn persist(&self) -> bool {
        match self.config.save(&self.path) {
            Ok(()) => true,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "config not saved");
                output::error(&format!("error saving configuration: {}", e));
                false
            }
        }
    }
}
