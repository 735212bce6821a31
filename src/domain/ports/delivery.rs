/// Where the rendered dashboard artifact ends up. Overwrites every run.
pub trait DashboardSink: Send + Sync {
    fn publish(&self, html: &str) -> Result<(), DeliveryError>;
}

/// Authenticated transport for the email digest.
#[async_trait::async_trait]
pub trait MailSink: Send + Sync {
    async fn deliver(&self, html: &str, subject: &str) -> Result<(), DeliveryError>;
}

#[derive(Debug)]
pub enum DeliveryError {
    /// Filesystem error while writing the artifact
    Io(String),
    /// SMTP/transport error
    Transport(String),
    /// Missing credentials or malformed addresses
    Config(String),
}

impl std::fmt::Display for DeliveryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeliveryError::Io(msg) => write!(f, "IO error: {msg}"),
            DeliveryError::Transport(msg) => write!(f, "Transport error: {msg}"),
            DeliveryError::Config(msg) => write!(f, "Config error: {msg}"),
        }
    }
}

impl std::error::Error for DeliveryError {}
