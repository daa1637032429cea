use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    InvalidInput(String),
    Overflow(String),
    IoError(String),
}

pub type CoreResult<T> = Result<T, CoreError>;

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::InvalidInput(msg) => write!(f, "Invalid Input: {}", msg),
            CoreError::Overflow(msg) => write!(f, "Overflow: {}", msg),
            CoreError::IoError(msg) => write!(f, "IO Error: {}", msg),
        }
    }
}

impl std::error::Error for CoreError {}

impl CoreError {
    pub fn invalid_input(message: &str) -> Self { CoreError::InvalidInput(message.to_string()) }
    pub fn overflow(message: &str) -> Self { CoreError::Overflow(message.to_string()) }
    pub fn io_error(message: &str) -> Self { CoreError::IoError(message.to_string()) }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, CoreError::InvalidInput(_))
    }
}
