use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Model request failed: {0}")]
    ModelRequest(String),

    #[error("Model response invalid: {0}")]
    ModelResponse(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn model_request(msg: impl Into<String>) -> Self {
        Self::ModelRequest(msg.into())
    }

    pub fn model_response(msg: impl Into<String>) -> Self {
        Self::ModelResponse(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }

    pub fn is_model_request(&self) -> bool {
        matches!(self, Self::ModelRequest(_))
    }

    pub fn is_model_response(&self) -> bool {
        matches!(self, Self::ModelResponse(_))
    }
}
