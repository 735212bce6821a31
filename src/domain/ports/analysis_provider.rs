/// Which response contract the provider has been asked to honor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    /// Marker-delimited sections (`#SENTIMENT# ... #END#`).
    Markers,
    /// A flat JSON object with the contract's keys.
    Json,
}

impl ResponseFormat {
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "markers" => Ok(ResponseFormat::Markers),
            "json" => Ok(ResponseFormat::Json),
            _ => Err(format!("Unknown response format: {s} (use markers or json)")),
        }
    }
}

#[async_trait::async_trait]
pub trait AnalysisProvider: Send + Sync {
    /// Run one completion for the given prompt and return the raw text.
    async fn generate(&self, prompt: &str) -> Result<String, String>;

    /// The contract this provider's responses follow.
    fn format(&self) -> ResponseFormat;
}
