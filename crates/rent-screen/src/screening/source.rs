use std::sync::Arc;

use tracing::debug;

use super::domain::{ApplicantId, ApplicantRecord};
use super::seed::ScreeningDataset;

/// Read-only access to applicant data, wherever it comes from.
pub trait ApplicantSource: Send + Sync {
    fn fetch(&self, id: &ApplicantId) -> Result<Option<ApplicantRecord>, SourceError>;
    fn list(&self) -> Result<Vec<ApplicantRecord>, SourceError>;
    /// Evictions found for the applicant; `None` when no search has been run.
    fn evictions_for(&self, id: &ApplicantId) -> Result<Option<u32>, SourceError>;
    fn snapshot(&self) -> Result<ScreeningDataset, SourceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("record not found")]
    NotFound,
    #[error("data source unavailable: {0}")]
    Unavailable(String),
}

impl From<serde_json::Error> for SourceError {
    fn from(value: serde_json::Error) -> Self {
        Self::Unavailable(format!("seed dataset is malformed: {value}"))
    }
}

/// In-memory source over a dataset loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct SeedDataSource {
    dataset: Arc<ScreeningDataset>,
}

impl SeedDataSource {
    pub fn load() -> Result<Self, SourceError> {
        let dataset = ScreeningDataset::seed()?;
        debug!(
            applicants = dataset.applicants.len(),
            "loaded bundled screening dataset"
        );
        Ok(Self::new(dataset))
    }

    pub fn new(dataset: ScreeningDataset) -> Self {
        Self {
            dataset: Arc::new(dataset),
        }
    }

    pub fn dataset(&self) -> &ScreeningDataset {
        &self.dataset
    }
}

impl ApplicantSource for SeedDataSource {
    fn fetch(&self, id: &ApplicantId) -> Result<Option<ApplicantRecord>, SourceError> {
        Ok(self
            .dataset
            .applicants
            .iter()
            .find(|record| &record.id == id)
            .cloned())
    }

    fn list(&self) -> Result<Vec<ApplicantRecord>, SourceError> {
        Ok(self.dataset.applicants.clone())
    }

    fn evictions_for(&self, id: &ApplicantId) -> Result<Option<u32>, SourceError> {
        Ok(self.dataset.evictions_for(id))
    }

    fn snapshot(&self) -> Result<ScreeningDataset, SourceError> {
        Ok(self.dataset.as_ref().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_returns_none_for_unknown_id() {
        let source = SeedDataSource::load().expect("seed loads");
        let found = source.fetch(&ApplicantId::new("2")).expect("fetch succeeds");
        assert_eq!(found.map(|record| record.name), Some("Michael Chen".to_string()));
        assert!(source
            .fetch(&ApplicantId::new("99"))
            .expect("fetch succeeds")
            .is_none());
    }

    #[test]
    fn eviction_counts_come_from_the_shared_dataset() {
        let source = SeedDataSource::load().expect("seed loads");
        assert_eq!(
            source
                .evictions_for(&ApplicantId::new("4"))
                .expect("lookup succeeds"),
            Some(1)
        );
        assert_eq!(
            source
                .evictions_for(&ApplicantId::new("5"))
                .expect("lookup succeeds"),
            None
        );
    }

    #[test]
    fn list_preserves_seed_order() {
        let source = SeedDataSource::load().expect("seed loads");
        let names: Vec<String> = source
            .list()
            .expect("list succeeds")
            .into_iter()
            .map(|record| record.name)
            .collect();
        assert_eq!(names.first().map(String::as_str), Some("Sarah Johnson"));
        assert_eq!(names.last().map(String::as_str), Some("Jessica Martinez"));
    }
}
