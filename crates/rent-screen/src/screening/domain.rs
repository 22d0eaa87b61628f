use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::scoring::ScoreInputs;

/// Identifier wrapper for applicant records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ApplicantId(pub String);

impl ApplicantId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApplicantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Outcome of a criminal or eviction records search.
///
/// Labels are matched exactly as reported by the vendor feed; anything outside the
/// known set is kept verbatim so it can be surfaced rather than dropped.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BackgroundCheckStatus {
    Clear,
    Pending,
    Review,
    Found,
    Unrecognized(String),
}

impl BackgroundCheckStatus {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "clear" => Self::Clear,
            "pending" => Self::Pending,
            "review" => Self::Review,
            "found" => Self::Found,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Clear => "clear",
            Self::Pending => "pending",
            Self::Review => "review",
            Self::Found => "found",
            Self::Unrecognized(raw) => raw,
        }
    }

    pub fn is_clear(&self) -> bool {
        matches!(self, Self::Clear)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Clear => "Clear",
            Self::Pending => "Pending",
            Self::Review => "Needs Review",
            Self::Found => "Found",
            Self::Unrecognized(raw) => raw,
        }
    }
}

impl From<String> for BackgroundCheckStatus {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<BackgroundCheckStatus> for String {
    fn from(value: BackgroundCheckStatus) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for BackgroundCheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Application decision state shown on the dashboard and tenants list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Pending,
    Reviewing,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "Pending",
            ApplicationStatus::Reviewing => "Reviewing",
            ApplicationStatus::Approved => "Approved",
            ApplicationStatus::Rejected => "Rejected",
        }
    }

    /// Pending and reviewing both count toward the "Pending Review" tile.
    pub const fn awaiting_decision(self) -> bool {
        matches!(
            self,
            ApplicationStatus::Pending | ApplicationStatus::Reviewing
        )
    }
}

/// One rental applicant's screening inputs and results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicantRecord {
    pub id: ApplicantId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub property: String,
    pub applied_date: NaiveDate,
    pub status: ApplicationStatus,
    pub credit_score: u16,
    pub monthly_income: f64,
    /// Present only on applications that have reached scoring.
    #[serde(default)]
    pub rent: Option<f64>,
    pub background_check: BackgroundCheckStatus,
    /// Previous landlord's answer; `None` until the reference is completed.
    #[serde(default)]
    pub would_re_rent: Option<bool>,
    #[serde(default)]
    pub employer: Option<String>,
}

impl ApplicantRecord {
    pub fn score_inputs(&self) -> Option<ScoreInputs> {
        let rent = self.rent?;
        Some(ScoreInputs {
            credit_score: f64::from(self.credit_score),
            monthly_income: self.monthly_income,
            rent,
            background_check: self.background_check.clone(),
            would_re_rent: self.would_re_rent,
        })
    }
}
