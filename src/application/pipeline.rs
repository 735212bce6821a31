use crate::application::analyze::AnalysisEngine;
use crate::domain::entities::record::AnalysisRecord;
use crate::domain::ports::news_source::NewsSource;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Sequential fetch-then-analyze pass over the instrument list. One failed
/// instrument never aborts the run; the analysis delay paces external calls
/// under the provider's rate ceiling.
pub struct Pipeline {
    source: Arc<dyn NewsSource>,
    engine: AnalysisEngine,
    pace: Duration,
}

/// Records plus counters from one pipeline pass. The facade folds the
/// counters into its run report; the records feed the renderers.
#[derive(Debug)]
pub struct RunOutcome {
    pub instruments: usize,
    pub records: usize,
    pub skipped: usize,
    pub items: Vec<AnalysisRecord>,
}

impl Pipeline {
    pub fn new(source: Arc<dyn NewsSource>, engine: AnalysisEngine, pace: Duration) -> Self {
        Self { source, engine, pace }
    }

    /// Process every instrument in list order. Record order is a subsequence
    /// of the input order: skips drop out, nothing is reordered.
    pub async fn run(&self, queries: &[String]) -> RunOutcome {
        let mut items = Vec::with_capacity(queries.len());
        let mut skipped = 0;

        for query in queries {
            let article = match self.source.fetch(query).await {
                Ok(Some(article)) => article,
                Ok(None) => {
                    info!(instrument = %query, "no news found, skipping");
                    skipped += 1;
                    continue;
                }
                Err(e) => {
                    warn!(instrument = %query, error = %e, "fetch failed, skipping");
                    skipped += 1;
                    continue;
                }
            };

            let analysis = self.engine.analyze(&article, query).await;
            items.push(AnalysisRecord::new(query.clone(), article, analysis));

            // Pace consecutive analysis calls under the service rate limit.
            tokio::time::sleep(self.pace).await;
        }

        RunOutcome {
            instruments: queries.len(),
            records: items.len(),
            skipped,
            items,
        }
    }
}
