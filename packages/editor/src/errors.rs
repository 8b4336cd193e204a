//! Error types for the editor

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Invalid config: {0}")]
    InvalidConfig(#[source] serde_json::Error),

    #[error("Invalid edit: {0}")]
    InvalidEdit(#[source] serde_json::Error),
}
