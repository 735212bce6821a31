use crate::domain::ports::delivery::{DashboardSink, DeliveryError};
use std::path::PathBuf;

/// Writes the dashboard artifact to a fixed path, replacing the previous run.
pub struct FileDashboardSink {
    path: PathBuf,
}

impl FileDashboardSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DashboardSink for FileDashboardSink {
    fn publish(&self, html: &str) -> Result<(), DeliveryError> {
        std::fs::write(&self.path, html)
            .map_err(|e| DeliveryError::Io(format!("{}: {e}", self.path.display())))
    }
}
