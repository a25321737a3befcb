//! Vault commands (the `vaults` submenu).
//!
//! Both commands act with the active API key and talk to the API directly;
//! nothing about vaults is stored locally.

use tracing::{info, warn};

use crate::cli::output;
use crate::cli::prompt::{cancelled, prompt_until, Check, Prompt};
use crate::cli::session::Session;
use crate::core::api::StorageApi;
use crate::core::vault::NewVault;
use crate::error::Result;

/// The active key, or a warning when there is none.
fn active_key<A>(session: &Session<A>) -> Option<String> {
    let key = session.config.active().map(str::to_string);
    if key.is_none() {
        output::warn("no active API key");
        output::hint(&format!(
            "add one with {} then {}",
            output::cmd("config"),
            output::cmd("add")
        ));
    }
    key
}

/// Fetch and print all vaults.
pub fn list<A: StorageApi>(session: &Session<A>) {
    let Some(key) = active_key(session) else {
        return;
    };

    output::progress("Fetching vaults");
    let vaults = match session.api.list_vaults(&key) {
        Ok(vaults) => {
            output::progress_done(true);
            vaults
        }
        Err(e) => {
            output::progress_done(false);
            warn!(error = %e, "listing vaults failed");
            output::error(&format!("failed to fetch vaults: {}", e));
            return;
        }
    };

    if vaults.is_empty() {
        output::dimmed("no vaults found");
        return;
    }

    output::section(&format!("Vaults ({})", vaults.len()));
    for vault in &vaults {
        output::kv("id", vault.display_id());
        output::kv("name", vault.display_name());
        output::kv("description", vault.display_description());
        output::kv("status", vault.display_status());
        output::kv("encrypted", vault.display_encrypted());
        output::blank();
    }
}

/// Collect vault details interactively and create the vault.
pub fn add<A, P>(session: &Session<A>, prompt: &mut P) -> Result<()>
where
    A: StorageApi,
    P: Prompt + ?Sized,
{
    let Some(key) = active_key(session) else {
        return Ok(());
    };

    let Some(vault) = collect(prompt)? else {
        return Ok(());
    };

    output::progress("Creating vault");
    match session.api.create_vault(&key, &vault) {
        Ok(created) => {
            output::progress_done(true);
            let id = created.id.as_deref().unwrap_or("N/A");
            info!(id, "vault created");
            output::success(&format!("vault created with id {}", output::key(id)));
        }
        Err(e) => {
            output::progress_done(false);
            warn!(error = %e, "creating vault failed");
            output::error(&format!("failed to create vault: {}", e));
        }
    }
    Ok(())
}

fn any_text(input: &str) -> Check<String> {
    Check::Accept(input.to_string())
}

/// Ask for every vault field. `None` if the user cancels at any point.
fn collect<P: Prompt + ?Sized>(prompt: &mut P) -> Result<Option<NewVault>> {
    let Some(name) = prompt_until(prompt, "Vault name", |input| {
        if input.is_empty() {
            Check::Retry("vault name cannot be empty".to_string())
        } else {
            Check::Accept(input.to_string())
        }
    })?
    else {
        return Ok(None);
    };

    let Some(description) = prompt_until(prompt, "Description (optional)", any_text)? else {
        return Ok(None);
    };
    let Some(tags) = prompt_until(prompt, "Tags, comma-separated (optional)", any_text)? else {
        return Ok(None);
    };

    let mut vault = NewVault::new(name)
        .with_description(&description)
        .with_tags(&tags);

    let Some(encrypted) = prompt.confirm("Encrypt this vault?", false)? else {
        cancelled();
        return Ok(None);
    };
    if !encrypted {
        return Ok(Some(vault));
    }

    let Some(add_keys) = prompt.confirm("Add encryption keys?", false)? else {
        cancelled();
        return Ok(None);
    };

    let mut keys = Vec::new();
    if add_keys {
        loop {
            let Some(key) = prompt_until(prompt, "Encryption key (blank to finish)", any_text)?
            else {
                return Ok(None);
            };
            if key.is_empty() {
                break;
            }
            keys.push(key);
        }
    }

    vault = vault.with_encryption(keys);
    Ok(Some(vault))
}
