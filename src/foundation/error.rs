/// Convenience result type used across shotframe.
pub type ShotResult<T> = Result<T, ShotError>;

/// Top-level error taxonomy used by library APIs.
///
/// Bad numeric configuration is never an error: the compositor clamps it.
#[derive(thiserror::Error, Debug)]
pub enum ShotError {
    /// The input bytes could not be decoded into a bitmap.
    #[error("decode error: {0}")]
    Decode(String),

    /// The system clipboard could not be reached or rejected the image.
    #[error("clipboard unavailable: {0}")]
    ClipboardUnavailable(String),

    /// Malformed configuration data (colour strings, config files).
    #[error("validation error: {0}")]
    Validation(String),

    /// Raster surface constraints were violated.
    #[error("surface error: {0}")]
    Surface(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ShotError {
    /// Build a [`ShotError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`ShotError::ClipboardUnavailable`] value.
    pub fn clipboard(msg: impl Into<String>) -> Self {
        Self::ClipboardUnavailable(msg.into())
    }

    /// Build a [`ShotError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ShotError::Surface`] value.
    pub fn surface(msg: impl Into<String>) -> Self {
        Self::Surface(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
