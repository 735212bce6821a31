use crate::domain::entities::article::NewsArticle;
use crate::domain::ports::news_source::{NewsSource, SourceError};
use async_trait::async_trait;
use std::time::Duration;

const RSS_URL: &str = "https://news.google.com/rss/search";

/// Topic queries that come back empty retry once against this broader query
/// before giving up.
const GENERIC_QUERY: &str = "finance market";

/// Google News RSS search adapter. Returns the first (most relevant) item of
/// the result channel, with the HTML description reduced to plain text.
pub struct GoogleNewsSource {
    client: reqwest::Client,
    /// Restrict results to the last N hours via the `when:` query operator.
    freshness_hours: Option<u32>,
}

impl GoogleNewsSource {
    pub fn new(freshness_hours: Option<u32>) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("marketbrief/0.1")
                .timeout(Duration::from_secs(15))
                .build()
                .unwrap_or_default(),
            freshness_hours,
        }
    }

    async fn fetch_channel(&self, query: &str) -> Result<rss::Channel, SourceError> {
        let q = match self.freshness_hours {
            Some(hours) => format!("{query} when:{hours}h"),
            None => query.to_string(),
        };

        let resp = self
            .client
            .get(RSS_URL)
            .query(&[("q", q.as_str())])
            .send()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(SourceError::Network(format!(
                "Google News returned {} for '{query}'",
                resp.status()
            )));
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        rss::Channel::read_from(&body[..]).map_err(|e| SourceError::Parse(e.to_string()))
    }
}

#[async_trait]
impl NewsSource for GoogleNewsSource {
    fn name(&self) -> &str {
        "google_news"
    }

    async fn fetch(&self, query: &str) -> Result<Option<NewsArticle>, SourceError> {
        let primary = self.fetch_channel(query).await?;
        if let Some(article) = select_article(&primary, None) {
            return Ok(Some(article));
        }

        // Deterministic broadening before reporting absence.
        let generic = self.fetch_channel(GENERIC_QUERY).await?;
        Ok(select_article(&primary, Some(&generic)))
    }
}

/// Candidate selection policy: the primary search's top item, else the
/// generic query's top item, else absence. The generic channel is fetched
/// lazily by the caller, so it arrives here as an Option; an empty result
/// after broadening is a valid `None`, never an error.
fn select_article(primary: &rss::Channel, generic: Option<&rss::Channel>) -> Option<NewsArticle> {
    primary
        .items()
        .first()
        .or_else(|| generic.and_then(|c| c.items().first()))
        .map(article_from_item)
}

fn article_from_item(item: &rss::Item) -> NewsArticle {
    let source = item
        .source()
        .and_then(|s| s.title())
        .unwrap_or("News")
        .to_string();
    let summary = item.description().map(strip_html).unwrap_or_default();

    NewsArticle::new(
        item.title().unwrap_or_default(),
        item.link().unwrap_or_default(),
        item.pub_date().unwrap_or_default(),
        source,
        summary,
    )
}

/// Reduce an HTML description to whitespace-normalized plain text.
fn strip_html(html: &str) -> String {
    // Width only affects wrapping, which the whitespace collapse undoes.
    let text = html2text::from_read(html.as_bytes(), 200);
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
