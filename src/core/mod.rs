//! Core library components.
//!
//! Configuration persistence, the remote vault model and the storage API
//! client. Nothing in here prints to the terminal.

pub mod api;
pub mod config;
pub mod constants;
pub mod types;
pub mod vault;
