//! Error type shared by the CLI command handlers.
use thiserror::Error;

use crate::recordset::RecordSetError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("a {0} is required")]
    MissingConfig(&'static str),

    #[error("required credential option {0} not provided")]
    MissingCredential(&'static str),

    #[error("{0}")]
    RecordSet(#[from] RecordSetError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Provider(#[from] anyhow::Error),
}
