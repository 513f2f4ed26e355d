use thiserror::Error;

#[derive(Debug, Error)]
pub enum WheelError {
    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Catalog error: {0}")]
    Catalog(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid spin configuration: {0}")]
    InvalidConfig(String),

    #[error("The wheel is still spinning")]
    SpinInProgress,
}

pub type Result<T> = std::result::Result<T, WheelError>;
