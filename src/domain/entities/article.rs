use serde::{Deserialize, Serialize};

/// A single news item returned by a source adapter for one instrument query.
///
/// The summary is plain text: any markup in the feed's description has been
/// stripped and whitespace collapsed before this value is constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsArticle {
    pub title: String,
    pub link: String,
    /// Publication timestamp as reported by the feed (e.g. RFC 2822).
    pub published: String,
    /// Publisher label (e.g. "Reuters"), defaulted when the feed omits it.
    pub source: String,
    pub summary: String,
}

impl NewsArticle {
    pub fn new(
        title: impl Into<String>,
        link: impl Into<String>,
        published: impl Into<String>,
        source: impl Into<String>,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
            published: published.into(),
            source: source.into(),
            summary: summary.into(),
        }
    }
}
