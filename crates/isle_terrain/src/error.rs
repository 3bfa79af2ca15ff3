//! Terrain error types.

/// Errors raised while loading or saving world parameters.
///
/// Generation itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum TerrainError {
    /// Failed to encode world parameters to MessagePack.
    #[error("failed to encode world parameters: {0}")]
    Encode(#[from] rmp_serde::encode::Error),

    /// Failed to decode world parameters from MessagePack.
    #[error("failed to decode world parameters: {0}")]
    Decode(#[from] rmp_serde::decode::Error),
}
