//! API key commands (the `config` submenu).

use tracing::{info, warn};

use crate::cli::output;
use crate::cli::prompt::{prompt_until, Check, Prompt};
use crate::cli::session::Session;
use crate::core::api::StorageApi;
use crate::core::config::{Insertion, KeyStatus};
use crate::error::Result;

/// Print every stored key with its status.
pub fn list<A: StorageApi>(session: &Session<A>) {
    let credentials = session.config.credentials();
    if credentials.is_empty() {
        output::warn("no API keys found");
        return;
    }

    output::section("Stored API keys");
    for (key, status) in credentials.iter() {
        output::marked(
            status == KeyStatus::Active,
            &format!("{} ({})", output::key(key), status),
        );
    }
}

/// Validate a new key against the API and store it.
pub fn add<A, P>(session: &mut Session<A>, prompt: &mut P) -> Result<()>
where
    A: StorageApi,
    P: Prompt + ?Sized,
{
    let api = &session.api;
    let accepted = prompt_until(
        prompt,
        "Enter new API key (or 'cancel' to go back)",
        |candidate| {
            if candidate.is_empty() {
                return Check::Retry("API key cannot be empty".to_string());
            }

            output::progress("Validating API key");
            match api.validate_key(candidate) {
                Ok(true) => {
                    output::progress_done(true);
                    Check::Accept(candidate.to_string())
                }
                Ok(false) => {
                    output::progress_done(false);
                    Check::Reject("invalid API key".to_string())
                }
                Err(e) => {
                    output::progress_done(false);
                    warn!(error = %e, "api key validation failed");
                    Check::Reject(format!("API request failed: {}", e))
                }
            }
        },
    )?;

    let Some(key) = accepted else {
        return Ok(());
    };

    match session.config.insert(&key) {
        Insertion::Activated => {
            session.persist();
            info!("api key added and activated");
            output::success("API key added and set as active");
        }
        Insertion::Stored => {
            session.persist();
            info!("api key added");
            output::success("API key added");
            output::hint("use set to make it the active key");
        }
        Insertion::AlreadyStored => output::warn("API key is already stored"),
    }
    Ok(())
}

/// Delete a stored key, handing the active role to the next key if needed.
pub fn remove<A, P>(session: &mut Session<A>, prompt: &mut P) -> Result<()>
where
    A: StorageApi,
    P: Prompt + ?Sized,
{
    if session.config.credentials().is_empty() {
        output::warn("no API keys found");
        return Ok(());
    }

    list(session);
    let Some(key) = choose_stored(
        session,
        prompt,
        "Enter API key to remove (or 'cancel' to go back)",
    )?
    else {
        return Ok(());
    };

    let was_active = session.config.active() == Some(key.as_str());
    let promoted = session.config.remove(&key)?;
    session.persist();
    info!(was_active, "api key removed");

    output::success("API key removed");
    match promoted {
        Some(next) => output::hint(&format!("{} is now the active key", output::key(&next))),
        None if was_active => output::warn("no API keys left, add one to use vaults"),
        None => {}
    }
    Ok(())
}

/// Make a stored key the active one.
pub fn set_active<A, P>(session: &mut Session<A>, prompt: &mut P) -> Result<()>
where
    A: StorageApi,
    P: Prompt + ?Sized,
{
    if session.config.credentials().is_empty() {
        output::warn("no API keys found");
        return Ok(());
    }

    list(session);
    let Some(key) = choose_stored(
        session,
        prompt,
        "Enter API key to set as active (or 'cancel' to go back)",
    )?
    else {
        return Ok(());
    };

    session.config.set_active(&key)?;
    session.persist();
    info!("active api key changed");

    output::success("API key set as active");
    Ok(())
}

/// Ask for a key until it names a stored one.
fn choose_stored<A, P>(session: &Session<A>, prompt: &mut P, message: &str) -> Result<Option<String>>
where
    P: Prompt + ?Sized,
{
    let credentials = session.config.credentials();
    prompt_until(prompt, message, |input| {
        if credentials.contains(input) {
            Check::Accept(input.to_string())
        } else {
            Check::Retry("API key not found, enter a stored key".to_string())
        }
    })
}
