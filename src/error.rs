use thiserror::Error;

/// Errors that stop the storefront before or while it owns the terminal.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Terminal I/O failed: {0}")]
    Terminal(#[from] std::io::Error),

    #[error("Failed to start async runtime: {0}")]
    Runtime(String),
}
