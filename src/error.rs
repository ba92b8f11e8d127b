use thiserror::Error;

#[derive(Error, Debug)]
pub enum EvoError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("{operation} gave up after {attempts} attempts")]
    Infeasible {
        operation: &'static str,
        attempts: u64,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, EvoError>;
