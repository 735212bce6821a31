use crate::domain::entities::article::NewsArticle;
use async_trait::async_trait;

/// A feed that can find the single most relevant news item for a topic.
#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Human-readable name of this source.
    fn name(&self) -> &str;

    /// Search for `query` and return the top candidate, if any. A zero-result
    /// query is `Ok(None)`, not an error.
    async fn fetch(&self, query: &str) -> Result<Option<NewsArticle>, SourceError>;
}

#[derive(Debug)]
pub enum SourceError {
    /// HTTP or network error
    Network(String),
    /// Feed parsing error
    Parse(String),
}

impl std::fmt::Display for SourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceError::Network(msg) => write!(f, "Network error: {msg}"),
            SourceError::Parse(msg) => write!(f, "Parse error: {msg}"),
        }
    }
}

impl std::error::Error for SourceError {}
