//! Applicant scoring and record search behind the screening dashboard.

pub mod criteria;
pub mod domain;
pub mod export;
pub mod filter;
pub mod records;
pub mod report;
pub mod router;
pub mod scoring;
pub mod seed;
pub mod source;

#[cfg(test)]
mod tests;

pub use criteria::{evaluate_criteria, CriteriaFlag, ScreeningCriteria};
pub use domain::{ApplicantId, ApplicantRecord, ApplicationStatus, BackgroundCheckStatus};
pub use export::{write_applicants_csv, ExportError};
pub use filter::{filter_records, filter_searchable, FieldAccessor, RecordFilter, Searchable};
pub use records::{
    average_monthly_income, BackgroundCheck, DASHBOARD_FIELDS, CreditReport, CreditTier, EvictionSearch,
    IdentityVerification, IncomeVerification, ReferenceCheck, StatusTally, VerificationStatus,
};
pub use report::{build_report, ScreeningReport};
pub use router::{screening_router, ScreeningPage, ScreeningState};
pub use scoring::{
    compute_overall_score, score_breakdown, ScoreBand, ScoreBreakdown, ScoreComponent,
    ScoreFactor, ScoreInputs, ScoringError,
};
pub use seed::ScreeningDataset;
pub use source::{ApplicantSource, SeedDataSource, SourceError};
