use crate::application::contract::{self, ANALYSIS_CONTRACT, TERMINATOR};
use crate::domain::entities::article::NewsArticle;
use crate::domain::entities::record::AnalysisPayload;
use crate::domain::ports::analysis_provider::{AnalysisProvider, ResponseFormat};
use std::sync::Arc;
use tracing::warn;

/// Runs one analysis per article. Never fails: any provider or contract
/// failure resolves to the static fallback payload so the orchestrator only
/// ever sees a valid result.
pub struct AnalysisEngine {
    provider: Arc<dyn AnalysisProvider>,
}

impl AnalysisEngine {
    pub fn new(provider: Arc<dyn AnalysisProvider>) -> Self {
        Self { provider }
    }

    pub async fn analyze(&self, article: &NewsArticle, query: &str) -> AnalysisPayload {
        let prompt = self.build_prompt(article, query);

        let text = match self.provider.generate(&prompt).await {
            Ok(text) => text,
            Err(e) => {
                warn!(instrument = query, error = %e, "analysis call failed, using fallback");
                return AnalysisPayload::fallback();
            }
        };

        match self.provider.format() {
            ResponseFormat::Markers => contract::parse_marker_response(&text),
            ResponseFormat::Json => match contract::parse_json_response(&text) {
                Ok(payload) => payload,
                Err(e) => {
                    warn!(instrument = query, error = %e, "unparseable analysis response, using fallback");
                    AnalysisPayload::fallback()
                }
            },
        }
    }

    fn build_prompt(&self, article: &NewsArticle, query: &str) -> String {
        let mut prompt = format!(
            "You are a senior trader. Analyze this '{query}' news item: {title}. \
             Source: {source}. Details: {summary}\n\
             Be concise and clear, in a professional, structured register.\n\n",
            title = article.title,
            source = article.source,
            summary = article.summary,
        );

        match self.provider.format() {
            ResponseFormat::Markers => {
                prompt.push_str("Respond STRICTLY using these labels:\n");
                for field in &ANALYSIS_CONTRACT {
                    prompt.push_str(&format!("{} {}\n", field.marker, field.hint));
                }
                prompt.push_str(TERMINATOR);
                prompt.push('\n');
            }
            ResponseFormat::Json => {
                prompt.push_str(
                    "Respond STRICTLY with a single flat JSON object with exactly these keys:\n",
                );
                for field in &ANALYSIS_CONTRACT {
                    prompt.push_str(&format!("  \"{}\": {}\n", field.key, field.hint));
                }
                prompt.push_str("No markdown, no commentary outside the object.\n");
            }
        }

        prompt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedProvider {
        reply: Result<String, String>,
        format: ResponseFormat,
    }

    #[async_trait::async_trait]
    impl AnalysisProvider for FixedProvider {
        async fn generate(&self, _prompt: &str) -> Result<String, String> {
            self.reply.clone()
        }

        fn format(&self) -> ResponseFormat {
            self.format
        }
    }

    #[tokio::test]
    async fn test_provider_error_resolves_to_fallback() {
        let engine = AnalysisEngine::new(Arc::new(FixedProvider {
            reply: Err("quota exceeded".into()),
            format: ResponseFormat::Markers,
        }));
        let article = NewsArticle::new("t", "https://x/1", "now", "Reuters", "s");
        let payload = engine.analyze(&article, "Gold market").await;
        assert_eq!(payload.sentiment, crate::domain::values::sentiment::Sentiment::Neutral);
        assert!(!payload.guidance.is_empty());
    }

    #[test]
    fn test_prompt_embeds_inputs_and_markers() {
        let engine = AnalysisEngine::new(Arc::new(FixedProvider {
            reply: Ok(String::new()),
            format: ResponseFormat::Markers,
        }));
        let article = NewsArticle::new(
            "Gold hits record high",
            "https://x/1",
            "now",
            "Reuters",
            "Gold prices surged",
        );
        let prompt = engine.build_prompt(&article, "Gold market");
        assert!(prompt.contains("Gold hits record high"));
        assert!(prompt.contains("Reuters"));
        assert!(prompt.contains("#SENTIMENT#"));
        assert!(prompt.contains("#END#"));
    }
}
