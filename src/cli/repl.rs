//! The interactive command loop.
//!
//! Three nested menus: root, `config` and `vaults`. Each is a blocking loop
//! over one line of input; submenus return to root on `back`. Commands are
//! matched exactly after trimming and lowercasing.

use tracing::debug;

use crate::cli::prompt::Prompt;
use crate::cli::session::Session;
use crate::cli::{keys, output, vaults};
use crate::core::api::StorageApi;
use crate::core::constants;
use crate::error::Result;

/// Commands accepted at the root prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootCommand {
    Help,
    Config,
    Vaults,
    Close,
}

impl RootCommand {
    pub fn parse(input: &str) -> Option<Self> {
        match normalize(input).as_str() {
            "help" => Some(Self::Help),
            "config" => Some(Self::Config),
            "vaults" => Some(Self::Vaults),
            "close" => Some(Self::Close),
            _ => None,
        }
    }
}

/// Commands accepted in the `config` submenu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigCommand {
    Help,
    List,
    Add,
    Remove,
    Set,
    Back,
}

impl ConfigCommand {
    pub fn parse(input: &str) -> Option<Self> {
        match normalize(input).as_str() {
            "help" | "config help" => Some(Self::Help),
            "list" => Some(Self::List),
            "add" => Some(Self::Add),
            "remove" => Some(Self::Remove),
            "set" => Some(Self::Set),
            "back" => Some(Self::Back),
            _ => None,
        }
    }
}

/// Commands accepted in the `vaults` submenu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VaultsCommand {
    Help,
    List,
    Add,
    Back,
}

impl VaultsCommand {
    pub fn parse(input: &str) -> Option<Self> {
        match normalize(input).as_str() {
            "help" | "vaults help" => Some(Self::Help),
            "list" => Some(Self::List),
            "add" => Some(Self::Add),
            "back" => Some(Self::Back),
            _ => None,
        }
    }
}

fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Run the REPL until `close` or end of input.
///
/// # Errors
///
/// Returns an error only if input cannot be read.
pub fn run<A, P>(session: &mut Session<A>, prompt: &mut P) -> Result<()>
where
    A: StorageApi,
    P: Prompt + ?Sized,
{
    print_intro();
    output::success("tuskytux is ready");
    output::hint(&format!("type {} to see available commands", output::cmd("help")));

    while let Some(line) = prompt.line("Command")? {
        if line.trim().is_empty() {
            continue;
        }

        debug!(command = %line.trim(), "root command");
        match RootCommand::parse(&line) {
            Some(RootCommand::Help) => print_help(),
            Some(RootCommand::Config) => config_menu(session, prompt)?,
            Some(RootCommand::Vaults) => vaults_menu(session, prompt)?,
            Some(RootCommand::Close) => break,
            None => output::warn("invalid command, type help to see available commands"),
        }
    }

    output::dimmed("exiting tuskytux, goodbye!");
    Ok(())
}

fn config_menu<A, P>(session: &mut Session<A>, prompt: &mut P) -> Result<()>
where
    A: StorageApi,
    P: Prompt + ?Sized,
{
    output::section("API key management");
    output::hint(&format!("type {} for available options", output::cmd("help")));

    while let Some(line) = prompt.line("Config command")? {
        if line.trim().is_empty() {
            continue;
        }

        debug!(command = %line.trim(), "config command");
        match ConfigCommand::parse(&line) {
            Some(ConfigCommand::Help) => print_config_help(),
            Some(ConfigCommand::List) => keys::list(session),
            Some(ConfigCommand::Add) => keys::add(session, prompt)?,
            Some(ConfigCommand::Remove) => keys::remove(session, prompt)?,
            Some(ConfigCommand::Set) => keys::set_active(session, prompt)?,
            Some(ConfigCommand::Back) => break,
            None => output::warn("invalid command, type help for config options"),
        }
    }
    Ok(())
}

fn vaults_menu<A, P>(session: &mut Session<A>, prompt: &mut P) -> Result<()>
where
    A: StorageApi,
    P: Prompt + ?Sized,
{
    output::section("Vault management");
    output::hint(&format!("type {} for available options", output::cmd("help")));

    while let Some(line) = prompt.line("Vaults command")? {
        if line.trim().is_empty() {
            continue;
        }

        debug!(command = %line.trim(), "vaults command");
        match VaultsCommand::parse(&line) {
            Some(VaultsCommand::Help) => print_vaults_help(),
            Some(VaultsCommand::List) => vaults::list(session),
            Some(VaultsCommand::Add) => vaults::add(session, prompt)?,
            Some(VaultsCommand::Back) => break,
            None => output::warn("invalid command, type help for vault options"),
        }
    }
    Ok(())
}

fn print_intro() {
    output::blank();
    output::header("Welcome to tuskytux, your decentralized storage companion!");
    output::blank();
    println!("tuskytux manages your Tusky API keys and vaults from the terminal.");
    output::kv("api key", format!("register at {}", constants::REGISTER_URL));
    output::blank();
}

fn print_help() {
    output::section("Available commands");
    output::command("config", "Manage API keys");
    output::command("vaults", "List and create vaults");
    output::command("help", "Show this help");
    output::command("close", "Exit the program");
    output::blank();
}

fn print_config_help() {
    output::section("Config commands");
    output::command("list", "Show stored API keys");
    output::command("add", "Add a new API key");
    output::command("remove", "Remove an API key");
    output::command("set", "Set an API key as active");
    output::command("back", "Return to main menu");
    output::blank();
}

fn print_vaults_help() {
    output::section("Vaults commands");
    output::command("list", "Show vaults for the active API key");
    output::command("add", "Create a new vault");
    output::command("back", "Return to main menu");
    output::blank();
}
