use crate::domain::ports::analysis_provider::{AnalysisProvider, ResponseFormat};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Gemini generateContent provider. Safety filtering is relaxed to BLOCK_NONE
/// across the board: neutral market commentary trips the default thresholds
/// often enough to matter.
pub struct GeminiProvider {
    client: Client,
    api_key: String,
    model: String,
    format: ResponseFormat,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    safety_settings: Vec<SafetySetting>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SafetySetting {
    category: &'static str,
    threshold: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

const HARM_CATEGORIES: [&str; 4] = [
    "HARM_CATEGORY_HARASSMENT",
    "HARM_CATEGORY_HATE_SPEECH",
    "HARM_CATEGORY_SEXUALLY_EXPLICIT",
    "HARM_CATEGORY_DANGEROUS_CONTENT",
];

impl GeminiProvider {
    pub fn new(api_key: String, model: Option<String>, format: ResponseFormat) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(60))
                .build()
                .unwrap_or_default(),
            api_key,
            model: model.unwrap_or_else(|| "gemini-2.5-flash".to_string()),
            format,
        }
    }

    fn request_body(&self, prompt: &str) -> GenerateRequest {
        GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            safety_settings: HARM_CATEGORIES
                .iter()
                .map(|c| SafetySetting {
                    category: c,
                    threshold: "BLOCK_NONE",
                })
                .collect(),
            generation_config: match self.format {
                ResponseFormat::Json => Some(GenerationConfig {
                    response_mime_type: "application/json",
                }),
                ResponseFormat::Markers => None,
            },
        }
    }
}

#[async_trait::async_trait]
impl AnalysisProvider for GeminiProvider {
    async fn generate(&self, prompt: &str) -> Result<String, String> {
        let url = format!("{API_BASE}/{}:generateContent", self.model);

        let resp = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&self.request_body(prompt))
            .send()
            .await
            .map_err(|e| format!("Gemini API error: {e}"))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(format!("Gemini API {status}: {body}"));
        }

        let result: GenerateResponse = resp.json().await.map_err(|e| format!("Parse error: {e}"))?;

        result
            .candidates
            .and_then(|mut c| c.drain(..).next())
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or_else(|| "Empty Gemini response".to_string())
    }

    fn format(&self) -> ResponseFormat {
        self.format
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_relaxes_all_harm_categories() {
        let provider = GeminiProvider::new("k".into(), None, ResponseFormat::Markers);
        let body = serde_json::to_value(provider.request_body("p")).unwrap();
        let settings = body["safetySettings"].as_array().unwrap();
        assert_eq!(settings.len(), 4);
        assert!(settings.iter().all(|s| s["threshold"] == "BLOCK_NONE"));
        assert!(body.get("generationConfig").is_none());
    }

    #[test]
    fn test_json_mode_sets_response_mime_type() {
        let provider = GeminiProvider::new("k".into(), None, ResponseFormat::Json);
        let body = serde_json::to_value(provider.request_body("p")).unwrap();
        assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
    }

    #[test]
    fn test_default_model() {
        let provider = GeminiProvider::new("k".into(), None, ResponseFormat::Markers);
        assert_eq!(provider.model, "gemini-2.5-flash");
    }
}
