use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Source error: {0}")]
    Source(String),

    #[error("Delivery error: {0}")]
    Delivery(String),
}

impl From<String> for DomainError {
    fn from(s: String) -> Self {
        DomainError::Config(s)
    }
}

impl From<&str> for DomainError {
    fn from(s: &str) -> Self {
        DomainError::Config(s.to_string())
    }
}
