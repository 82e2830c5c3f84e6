//! Error types for the persistence boundary.
//!
//! Interaction paths never return errors; they clamp, no-op, or report via
//! `tracing`. Only loading and saving layer state can fail.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type LayerResult<T> = Result<T, LayerError>;
