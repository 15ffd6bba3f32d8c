use std::path::PathBuf;

pub type VitrineResult<T> = Result<T, VitrineError>;

#[derive(thiserror::Error, Debug)]
pub enum VitrineError {
    #[error("validation error: {0}")]
    Validation(String),

    /// Foreground (and its fallback, if any) does not exist. A recoverable
    /// stop for callers, distinct from a processing failure.
    #[error("missing input: '{}'", .0.display())]
    MissingInput(PathBuf),

    #[error("decode error: {0}")]
    Decode(String),

    #[error("write error: {0}")]
    Write(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl VitrineError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    pub fn write(msg: impl Into<String>) -> Self {
        Self::Write(msg.into())
    }
}
