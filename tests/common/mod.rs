//! Shared test doubles for the pipeline's ports.

use marketbrief::domain::entities::article::NewsArticle;
use marketbrief::domain::ports::analysis_provider::{AnalysisProvider, ResponseFormat};
use marketbrief::domain::ports::delivery::{DashboardSink, DeliveryError, MailSink};
use marketbrief::domain::ports::news_source::{NewsSource, SourceError};
use std::collections::HashMap;
use std::sync::Mutex;

pub fn sample_article(title: &str, link: &str, source: &str, summary: &str) -> NewsArticle {
    NewsArticle::new(title, link, "Fri, 29 Aug 2026 06:00:00 GMT", source, summary)
}

/// A full marker-contract reply with the given sentiment and guidance.
pub fn marker_reply(sentiment: &str, guidance: &str) -> String {
    format!(
        "#SENTIMENT# {sentiment}\n\
         #EMAIL_SUMMARY# Short digest take.\n\
         #MACRO_EXPLANATION# Macro context paragraph.\n\
         #STRENGTHS# - strong flows\n\
         #WEAKNESSES# - crowded positioning\n\
         #GUIDANCE# {guidance}\n\
         #END#"
    )
}

/// What a `ScriptedSource` does for one query.
pub enum Scripted {
    Article(NewsArticle),
    Nothing,
    Error(String),
}

#[derive(Default)]
pub struct ScriptedSource {
    script: HashMap<String, Scripted>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, query: &str, outcome: Scripted) -> Self {
        self.script.insert(query.to_string(), outcome);
        self
    }
}

#[async_trait::async_trait]
impl NewsSource for ScriptedSource {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn fetch(&self, query: &str) -> Result<Option<NewsArticle>, SourceError> {
        match self.script.get(query) {
            Some(Scripted::Article(article)) => Ok(Some(article.clone())),
            Some(Scripted::Nothing) | None => Ok(None),
            Some(Scripted::Error(msg)) => Err(SourceError::Network(msg.clone())),
        }
    }
}

/// Returns one fixed reply for every prompt and records when each call
/// happened (tokio clock, so paused-time tests see the pacing delays).
pub struct ScriptedProvider {
    pub reply: Result<String, String>,
    pub format: ResponseFormat,
    pub calls: Mutex<Vec<tokio::time::Instant>>,
}

impl ScriptedProvider {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Ok(reply.to_string()),
            format: ResponseFormat::Markers,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: &str) -> Self {
        Self {
            reply: Err(error.to_string()),
            format: ResponseFormat::Markers,
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl AnalysisProvider for ScriptedProvider {
    async fn generate(&self, _prompt: &str) -> Result<String, String> {
        self.calls.lock().unwrap().push(tokio::time::Instant::now());
        self.reply.clone()
    }

    fn format(&self) -> ResponseFormat {
        self.format
    }
}

#[derive(Default)]
pub struct MemoryDashboard {
    pub published: Mutex<Vec<String>>,
}

impl DashboardSink for MemoryDashboard {
    fn publish(&self, html: &str) -> Result<(), DeliveryError> {
        self.published.lock().unwrap().push(html.to_string());
        Ok(())
    }
}

pub struct MemoryMailer {
    /// (subject, html) pairs
    pub sent: Mutex<Vec<(String, String)>>,
    pub fail: bool,
}

impl MemoryMailer {
    pub fn working() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    pub fn broken() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }
}

#[async_trait::async_trait]
impl MailSink for MemoryMailer {
    async fn deliver(&self, html: &str, subject: &str) -> Result<(), DeliveryError> {
        if self.fail {
            return Err(DeliveryError::Transport("connection refused".into()));
        }
        self.sent
            .lock()
            .unwrap()
            .push((subject.to_string(), html.to_string()));
        Ok(())
    }
}
