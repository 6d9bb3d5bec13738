use thiserror::Error;

/// Application-level error type for the binary's I/O seam.
///
/// The structuring pipeline itself is total over any text input; only reading
/// the input and writing the block sequence can fail.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
