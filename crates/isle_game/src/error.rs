//! Asset error types.

/// Startup faults while resolving sprite assets.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    /// The spritesheet manifest is not valid JSON or has the wrong shape.
    #[error("malformed spritesheet manifest: {0}")]
    Manifest(#[from] serde_json::Error),

    /// A sprite name was requested that the spritesheet does not contain.
    #[error("unknown sprite name: {0}")]
    UnknownSprite(String),

    /// A frame in the manifest has a negative or non-finite size.
    #[error("invalid frame `{name}`: {w}x{h}")]
    InvalidFrame { name: String, w: f64, h: f64 },
}
