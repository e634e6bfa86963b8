use std::path::PathBuf;

/// Convenience result type used across the crate.
pub type ArtResult<T> = Result<T, ArtError>;

/// Error taxonomy for page construction, rendering, and export.
#[derive(thiserror::Error, Debug)]
pub enum ArtError {
    /// Invalid page parameters (canvas size, wrap width, ...).
    #[error("validation error: {0}")]
    Validation(String),

    /// No usable font face could be resolved.
    #[error("font error: {0}")]
    Font(String),

    /// Rasterization or compositing failure.
    #[error("render error: {0}")]
    Render(String),

    /// Filesystem failure while writing an artifact.
    #[error("io error at '{}': {source}", path.display())]
    Io {
        /// Destination that could not be written.
        path: PathBuf,
        /// Underlying OS error.
        #[source]
        source: std::io::Error,
    },

    /// PNG encoder failure that is not an IO problem.
    #[error("encode error: {0}")]
    Encode(#[from] image::ImageError),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ArtError {
    /// Build an [`ArtError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`ArtError::Font`] value.
    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font(msg.into())
    }

    /// Build an [`ArtError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build an [`ArtError::Io`] value for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// True for filesystem failures.
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
