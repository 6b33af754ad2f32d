/// Interfaces Layer - External Entry Points
///
/// Everything a person or another program drives the service through,
/// apart from the HTTP surface itself (see `infrastructure::http`).
///
/// ## Modules
/// - `cli`: Command-line interface (main.rs logic)
/// - `client`: access-check client for a deployed endpoint

pub mod cli;
pub mod client;

pub use client::{AccessClient, ClientConfig, ClientError, RequestMethod, Screen};
