use thiserror::Error;

/// Errors surfaced by the detector and its I/O helpers.
///
/// Detection itself only fails on malformed input buffers; every heuristic
/// threshold acts as a silent filter.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("image codec error: {0}")]
    Image(#[from] image::ImageError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
