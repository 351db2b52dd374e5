use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

pub type Result<T> = std::result::Result<T, GameError>;

impl GameError {
    /// Whether the caller can retry after fixing its input.
    pub fn is_recoverable(&self) -> bool {
        match self {
            GameError::InvalidState(_) => true,
            GameError::InvalidConfig(_) => true,
            GameError::InvariantViolation(_) => false,
        }
    }
}
