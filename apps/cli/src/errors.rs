use std::path::PathBuf;

use thiserror::Error;

/// Application-level error type. Every stage failure surfaces as one of
/// these variants and maps to a non-zero exit code in `main`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Empty input: {0}")]
    EmptyInput(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("External service error: {0}")]
    ExternalService(String),

    #[error("Target not found for {recommendation_id}: {reason}")]
    TargetNotFound {
        recommendation_id: String,
        reason: String,
    },

    #[error("Missing credential: {0}")]
    MissingCredential(String),

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
