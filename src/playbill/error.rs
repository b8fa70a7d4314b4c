use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlaybillError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unknown movie: {0}")]
    UnknownMovie(String),

    #[error("Movie already exists: {0}")]
    DuplicateMovie(String),

    #[error("Movie cannot be downloaded: {0}")]
    NotDownloadable(String),
}

pub type Result<T> = std::result::Result<T, PlaybillError>;
