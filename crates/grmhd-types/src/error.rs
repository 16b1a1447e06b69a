// ─────────────────────────────────────────────────────────────────────
// Torus GRMHD — Errors
// License: BSD 3-Clause
// ─────────────────────────────────────────────────────────────────────
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GrmhdError {
    #[error("Magnetic field seed type not supported: {0}")]
    UnknownSeedType(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Container has no field named '{0}'")]
    UnknownField(String),

    #[error("Mesh block has no container named '{0}'")]
    UnknownContainer(String),

    #[error("Array extents mismatch: expected {expected:?}, got {found:?}")]
    ShapeMismatch {
        expected: Vec<usize>,
        found: Vec<usize>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type GrmhdResult<T> = Result<T, GrmhdError>;
