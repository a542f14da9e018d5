//! Command-line client for the NP-lab dashboard API.
//!
//! Wires configuration, logging and the dashboard client together:
//! - `config`: layered TOML + environment configuration
//! - `cli`: argument parsing
//! - `app`: runs a command and renders its result as JSON

pub mod app;
pub mod cli;
pub mod config;
pub mod error;

pub use app::Application;
pub use cli::{Cli, Command};
pub use config::AppConfig;
pub use error::{AppError, AppResult};
