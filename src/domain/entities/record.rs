use crate::domain::entities::article::NewsArticle;
use crate::domain::values::market_category::MarketCategory;
use crate::domain::values::sentiment::Sentiment;
use serde::{Deserialize, Serialize};

/// Sentinel used when a single field cannot be extracted from an otherwise
/// valid model response.
pub const UNAVAILABLE: &str = "Information unavailable.";

/// Structured output of one analysis call. Always present for a record:
/// a failed call resolves to [`AnalysisPayload::fallback`], never to absence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisPayload {
    pub sentiment: Sentiment,
    /// One-to-two sentence take for the email digest.
    pub email_take: String,
    /// Macro context paragraph for the dashboard card.
    pub web_explanation: String,
    /// Bullish arguments, short list-style text.
    pub strengths: String,
    /// Bearish risks, short list-style text.
    pub weaknesses: String,
    /// Direction or levels to watch.
    pub guidance: String,
}

impl AnalysisPayload {
    /// Fixed payload used when the analysis call or its parse fails outright.
    pub fn fallback() -> Self {
        Self {
            sentiment: Sentiment::Neutral,
            email_take: "Automated analysis was unavailable for this item.".into(),
            web_explanation: "The analysis service could not process this item; \
                              no macro read is available for this run."
                .into(),
            strengths: "-".into(),
            weaknesses: "-".into(),
            guidance: "Analysis unavailable; monitor technical levels.".into(),
        }
    }
}

/// One instrument's full result for the run: the query, its presentation
/// bucket, the fetched article, and the analysis of it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub instrument: String,
    pub category: MarketCategory,
    pub article: NewsArticle,
    pub analysis: AnalysisPayload,
}

impl AnalysisRecord {
    pub fn new(instrument: impl Into<String>, article: NewsArticle, analysis: AnalysisPayload) -> Self {
        let instrument = instrument.into();
        let category = MarketCategory::for_instrument(&instrument);
        Self {
            instrument,
            category,
            article,
            analysis,
        }
    }
}
