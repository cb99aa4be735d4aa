//! Domain-level errors (no external dependencies)

use std::path::PathBuf;
use thiserror::Error;

/// Domain errors represent input the navigation model cannot interpret.
/// Rendering itself never fails.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("unsupported data format: {0} (expected .json, .yaml, .yml or .toml)")]
    UnsupportedFormat(PathBuf),

    #[error("malformed {format} navigation data: {message}")]
    Malformed { format: String, message: String },
}
