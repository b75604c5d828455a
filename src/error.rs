use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChecklistError {
    #[error("path not found: {0}")]
    PathNotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ChecklistError>;
