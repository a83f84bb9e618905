use thiserror::Error;

#[derive(Error, Debug)]
pub enum FinsightError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Session file error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid email or password")]
    InvalidCredentials,
}

pub type Result<T> = std::result::Result<T, FinsightError>;
