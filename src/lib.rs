pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

use crate::application::analyze::AnalysisEngine;
use crate::application::pipeline::Pipeline;
use crate::application::render::{render_dashboard, render_email};
use crate::config::Config;
use crate::domain::entities::record::AnalysisRecord;
use crate::domain::error::DomainError;
use crate::domain::ports::analysis_provider::AnalysisProvider;
use crate::domain::ports::delivery::{DashboardSink, MailSink};
use crate::domain::ports::news_source::NewsSource;
use crate::domain::values::send_window::SendWindow;
use crate::infrastructure::file_sink::FileDashboardSink;
use crate::infrastructure::gemini::GeminiProvider;
use crate::infrastructure::google_news::GoogleNewsSource;
use crate::infrastructure::smtp::SmtpMailer;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// One batch run, reported back to the CLI.
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub generated_at: DateTime<Utc>,
    pub instruments: usize,
    pub records: usize,
    pub skipped: usize,
    pub dashboard_published: bool,
    pub email_sent: bool,
}

/// Facade wiring the pipeline to its collaborators. Constructed once per
/// process from an explicit [`Config`]; tests inject their own ports via
/// [`MarketBrief::with_ports`].
pub struct MarketBrief {
    pipeline: Pipeline,
    instruments: Vec<String>,
    dashboard: Arc<dyn DashboardSink>,
    mailer: Option<Arc<dyn MailSink>>,
    send_window: SendWindow,
    dashboard_url: String,
}

impl MarketBrief {
    pub fn new(config: &Config) -> Self {
        let source: Arc<dyn NewsSource> = Arc::new(GoogleNewsSource::new(config.freshness_hours));
        let provider: Arc<dyn AnalysisProvider> = Arc::new(GeminiProvider::new(
            config.gemini_api_key.clone(),
            config.model.clone(),
            config.response_format,
        ));
        let dashboard: Arc<dyn DashboardSink> =
            Arc::new(FileDashboardSink::new(config.dashboard_path.clone()));

        let mailer: Option<Arc<dyn MailSink>> = match (
            &config.sender_email,
            &config.sender_password,
            &config.receiver_email,
        ) {
            (Some(sender), Some(password), Some(receiver)) => Some(Arc::new(SmtpMailer::new(
                sender.clone(),
                password.clone(),
                receiver.clone(),
            ))),
            _ => None,
        };

        Self::with_ports(
            source,
            provider,
            dashboard,
            mailer,
            config.instruments.clone(),
            config.pace,
            config.send_window,
            config.dashboard_url.clone(),
        )
    }

    #[allow(clippy::too_many_arguments)]
    pub fn with_ports(
        source: Arc<dyn NewsSource>,
        provider: Arc<dyn AnalysisProvider>,
        dashboard: Arc<dyn DashboardSink>,
        mailer: Option<Arc<dyn MailSink>>,
        instruments: Vec<String>,
        pace: Duration,
        send_window: SendWindow,
        dashboard_url: String,
    ) -> Self {
        Self {
            pipeline: Pipeline::new(source, AnalysisEngine::new(provider), pace),
            instruments,
            dashboard,
            mailer,
            send_window,
            dashboard_url,
        }
    }

    pub fn instruments(&self) -> &[String] {
        &self.instruments
    }

    /// Run the full pipeline and both artifacts. The dashboard is published
    /// unconditionally; the email goes out only when the send window permits
    /// `now` (and `allow_email` is not cleared by the CLI). A failed email
    /// never fails the run.
    pub async fn run_once(
        &self,
        now: DateTime<Utc>,
        allow_email: bool,
    ) -> Result<RunReport, DomainError> {
        let outcome = self.pipeline.run(&self.instruments).await;
        info!(
            records = outcome.records,
            skipped = outcome.skipped,
            "pipeline pass complete"
        );

        let dashboard_html = render_dashboard(&outcome.items, now);
        self.dashboard
            .publish(&dashboard_html)
            .map_err(|e| DomainError::Delivery(e.to_string()))?;

        let email_sent = if allow_email && self.send_window.permits(now) {
            self.send_digest(&outcome.items, now).await
        } else {
            false
        };

        Ok(RunReport {
            generated_at: now,
            instruments: outcome.instruments,
            records: outcome.records,
            skipped: outcome.skipped,
            dashboard_published: true,
            email_sent,
        })
    }

    async fn send_digest(&self, records: &[AnalysisRecord], now: DateTime<Utc>) -> bool {
        let Some(mailer) = &self.mailer else {
            warn!("email window open but no mail credentials configured");
            return false;
        };

        let html = render_email(records, now, &self.dashboard_url);
        let subject = format!("Market Briefing: {}", now.format("%d-%m-%Y"));
        match mailer.deliver(&html, &subject).await {
            Ok(()) => {
                info!("digest email sent");
                true
            }
            Err(e) => {
                warn!(error = %e, "digest email failed");
                false
            }
        }
    }
}
