use crate::domain::error::DomainError;
use crate::domain::ports::analysis_provider::ResponseFormat;
use crate::domain::values::send_window::SendWindow;
use std::path::PathBuf;
use std::time::Duration;

/// Instruments tracked when `MARKETBRIEF_INSTRUMENTS` is not set. Order is
/// presentation order.
pub const DEFAULT_INSTRUMENTS: [&str; 11] = [
    "Gold market",
    "WTI Oil",
    "EURUSD",
    "GBPUSD",
    "USDJPY",
    "Bitcoin",
    "S&P 500",
    "Nasdaq 100",
    "Apple stock",
    "Tesla stock",
    "Nvidia stock",
];

/// Process configuration, read once from the environment at startup and
/// passed explicitly to the facade. No ambient global state.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub model: Option<String>,
    pub response_format: ResponseFormat,
    pub instruments: Vec<String>,
    /// Minimum delay between consecutive analysis calls.
    pub pace: Duration,
    pub freshness_hours: Option<u32>,
    pub dashboard_path: PathBuf,
    /// Publish location linked from the email digest.
    pub dashboard_url: String,
    pub send_window: SendWindow,
    pub sender_email: Option<String>,
    pub sender_password: Option<String>,
    pub receiver_email: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, DomainError> {
        let instruments = match std::env::var("MARKETBRIEF_INSTRUMENTS") {
            Ok(raw) => raw
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>(),
            Err(_) => DEFAULT_INSTRUMENTS.iter().map(|s| s.to_string()).collect(),
        };
        if instruments.is_empty() {
            return Err(DomainError::Config(
                "MARKETBRIEF_INSTRUMENTS is set but names no instruments".into(),
            ));
        }

        let response_format = match std::env::var("MARKETBRIEF_RESPONSE_FORMAT") {
            Ok(raw) => ResponseFormat::parse(&raw).map_err(DomainError::Config)?,
            Err(_) => ResponseFormat::Markers,
        };

        let pace_secs = parse_env_u64("MARKETBRIEF_PACE_SECS")?.unwrap_or(6);
        let send_hour = parse_env_u64("MARKETBRIEF_SEND_HOUR_UTC")?
            .map(|h| h as u32)
            .unwrap_or(6);
        let freshness_hours = parse_env_u64("MARKETBRIEF_FRESHNESS_HOURS")?.map(|h| h as u32);

        Ok(Self {
            gemini_api_key: std::env::var("MARKETBRIEF_GEMINI_API_KEY").unwrap_or_default(),
            model: std::env::var("MARKETBRIEF_MODEL").ok(),
            response_format,
            instruments,
            pace: Duration::from_secs(pace_secs),
            freshness_hours,
            dashboard_path: std::env::var("MARKETBRIEF_OUTPUT")
                .unwrap_or_else(|_| "index.html".into())
                .into(),
            dashboard_url: std::env::var("MARKETBRIEF_DASHBOARD_URL").unwrap_or_default(),
            send_window: SendWindow::new(send_hour),
            sender_email: std::env::var("MARKETBRIEF_SENDER_EMAIL").ok(),
            sender_password: std::env::var("MARKETBRIEF_SENDER_PASSWORD").ok(),
            receiver_email: std::env::var("MARKETBRIEF_RECEIVER_EMAIL").ok(),
        })
    }
}

fn parse_env_u64(name: &str) -> Result<Option<u64>, DomainError> {
    match std::env::var(name) {
        Err(_) => Ok(None),
        Ok(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| DomainError::Config(format!("{name} must be an integer, got '{raw}'"))),
    }
}
