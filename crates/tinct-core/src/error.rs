//! Error type for the parsing and configuration surface.
//!
//! The compositing math itself is total and never fails.

/// Errors raised while parsing colors, blend modes, or blend parameters.
#[derive(Debug, thiserror::Error)]
pub enum ColorError {
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),

    #[error("unknown blend mode: {0:?}")]
    UnknownBlendMode(String),

    #[error("invalid blend params: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ColorError>;
