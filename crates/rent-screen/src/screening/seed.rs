use serde::{Deserialize, Serialize};

use super::domain::{ApplicantId, ApplicantRecord};
use super::records::{
    BackgroundCheck, CreditReport, EvictionSearch, IdentityVerification, IncomeVerification,
    ReferenceCheck,
};

const SEED_JSON: &str = include_str!("../../data/seed.json");

/// Every collection the screening pages render.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScreeningDataset {
    pub applicants: Vec<ApplicantRecord>,
    #[serde(default)]
    pub credit_reports: Vec<CreditReport>,
    #[serde(default)]
    pub background_checks: Vec<BackgroundCheck>,
    #[serde(default)]
    pub eviction_searches: Vec<EvictionSearch>,
    #[serde(default)]
    pub identity_verifications: Vec<IdentityVerification>,
    #[serde(default)]
    pub income_verifications: Vec<IncomeVerification>,
    #[serde(default)]
    pub reference_checks: Vec<ReferenceCheck>,
}

impl ScreeningDataset {
    /// Bundled demo dataset standing in for the bureau and vendor feeds.
    pub fn seed() -> Result<Self, serde_json::Error> {
        Self::from_json(SEED_JSON)
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn evictions_for(&self, id: &ApplicantId) -> Option<u32> {
        self.eviction_searches
            .iter()
            .find(|search| &search.id == id)
            .map(|search| search.evictions_found)
    }
}
