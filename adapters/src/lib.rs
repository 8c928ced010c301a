//! Core `adapters` crate for abstracting interactions with the `openclaw` CLI.
//!
//! This crate defines the `CommandRunner` trait, which outlines how a single
//! CLI invocation is executed, and the `OpenClaw` client that turns dashboard
//! operations (listing sessions, sending messages, spawning agents, gateway
//! control) into concrete argument vectors run through that trait.

pub mod errors;
pub mod models;
pub mod ndjson;
pub mod openclaw;
pub mod runner;

pub use errors::AdapterError;
pub use models::{Invocation, Session, SpawnRequest};
pub use openclaw::OpenClaw;
pub use runner::{CommandOutput, CommandRunner, MockRunner, ProcessRunner};
