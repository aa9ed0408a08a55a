//! Crate entrypoint wiring together configuration, authentication, the
//! Azure DNS management client, and the CLI commands.

pub mod auth;
pub mod azure;
pub mod commands;
pub mod config;
pub mod error;
pub mod recordname;
pub mod recordset;

pub use config::{AppConfig, CredentialOptions};
pub use error::AppError;
pub use recordset::RecordType;
