//! Record shapes behind the screening list pages and the tallies shown above them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::domain::{ApplicantId, ApplicantRecord, BackgroundCheckStatus};
use super::filter::{FieldAccessor, Searchable};

/// Lifecycle of a vendor verification (identity, income, references).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    Verified,
    Completed,
    Partial,
    Pending,
    Failed,
}

impl VerificationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            VerificationStatus::Verified => "Verified",
            VerificationStatus::Completed => "Completed",
            VerificationStatus::Partial => "Partial",
            VerificationStatus::Pending => "Pending",
            VerificationStatus::Failed => "Failed",
        }
    }
}

/// Bureau-style tier derived from the raw credit score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreditTier {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl CreditTier {
    pub const fn from_score(score: u16) -> Self {
        if score >= 740 {
            Self::Excellent
        } else if score >= 670 {
            Self::Good
        } else if score >= 580 {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditReport {
    pub id: ApplicantId,
    pub name: String,
    pub ssn: String,
    pub score: u16,
    pub rating: String,
    pub report_date: NaiveDate,
    pub accounts: u32,
    pub late_payments: u32,
    pub debt_to_income_pct: u8,
    pub public_records: u32,
    pub inquiries: u32,
    pub total_credit: u32,
    pub credit_used: u32,
}

impl CreditReport {
    pub fn tier(&self) -> CreditTier {
        CreditTier::from_score(self.score)
    }

    /// Share of available credit in use, as a percentage.
    pub fn utilization_pct(&self) -> Option<f64> {
        if self.total_credit == 0 {
            return None;
        }
        Some(f64::from(self.credit_used) / f64::from(self.total_credit) * 100.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackgroundCheck {
    pub id: ApplicantId,
    pub name: String,
    pub ssn: String,
    pub status: BackgroundCheckStatus,
    pub check_date: NaiveDate,
    pub counties_searched: Vec<String>,
    /// `None` while the search is still running.
    pub criminal_records: Option<u32>,
    pub warrants: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvictionCase {
    pub case_number: String,
    pub filing_date: NaiveDate,
    pub county: String,
    pub plaintiff: String,
    pub disposition: String,
    pub amount_owed: u32,
    pub resolved: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvictionSearch {
    pub id: ApplicantId,
    pub name: String,
    pub ssn: String,
    pub status: BackgroundCheckStatus,
    pub search_date: NaiveDate,
    pub evictions_found: u32,
    pub states_searched: Vec<String>,
    pub years_searched: u8,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cases: Vec<EvictionCase>,
}

impl EvictionSearch {
    pub fn unresolved_balance(&self) -> u32 {
        self.cases
            .iter()
            .filter(|case| !case.resolved)
            .map(|case| case.amount_owed)
            .sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentityVerification {
    pub id: ApplicantId,
    pub name: String,
    pub ssn: String,
    pub status: VerificationStatus,
    pub verification_date: NaiveDate,
    pub ssn_validated: bool,
    pub ssn_match: Option<bool>,
    pub address_match: Option<bool>,
    pub biometric_match: Option<bool>,
    pub photo_id_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeVerification {
    pub id: ApplicantId,
    pub name: String,
    pub status: VerificationStatus,
    pub verification_date: NaiveDate,
    pub employer: String,
    pub position: String,
    pub monthly_income: f64,
    pub pay_stubs_provided: u8,
    pub employment_verified: bool,
    pub income_verified: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandlordReference {
    pub landlord: String,
    pub contact_person: Option<String>,
    pub rent_on_time: Option<bool>,
    pub would_re_rent: Option<bool>,
    pub rating: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployerReference {
    pub company: String,
    pub contact_person: Option<String>,
    pub employment_verified: bool,
    pub good_standing: Option<bool>,
    pub rating: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceCheck {
    pub id: ApplicantId,
    pub applicant_name: String,
    pub status: VerificationStatus,
    pub check_date: NaiveDate,
    pub landlord_references: Vec<LandlordReference>,
    pub employer_references: Vec<EmployerReference>,
}

impl ReferenceCheck {
    /// Mean of every star rating received so far.
    pub fn average_rating(&self) -> Option<f64> {
        let ratings: Vec<u8> = self
            .landlord_references
            .iter()
            .filter_map(|reference| reference.rating)
            .chain(
                self.employer_references
                    .iter()
                    .filter_map(|reference| reference.rating),
            )
            .collect();

        if ratings.is_empty() {
            return None;
        }
        let total: u32 = ratings.iter().map(|rating| u32::from(*rating)).sum();
        Some(f64::from(total) / ratings.len() as f64)
    }

    pub fn would_re_rent(&self) -> Option<bool> {
        self.landlord_references
            .first()
            .and_then(|reference| reference.would_re_rent)
    }
}

/// Count of records per status label, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatusTally {
    pub total: usize,
    pub counts: Vec<(String, usize)>,
}

impl StatusTally {
    pub fn from_labels<'a>(labels: impl IntoIterator<Item = &'a str>) -> Self {
        let mut tally = Self::default();
        for label in labels {
            tally.total += 1;
            match tally.counts.iter_mut().find(|(seen, _)| seen == label) {
                Some((_, count)) => *count += 1,
                None => tally.counts.push((label.to_string(), 1)),
            }
        }
        tally
    }

    pub fn count(&self, label: &str) -> usize {
        self.counts
            .iter()
            .find(|(seen, _)| seen == label)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }
}

/// Rounded mean monthly income; `None` for an empty page.
pub fn average_monthly_income(verifications: &[IncomeVerification]) -> Option<u64> {
    if verifications.is_empty() {
        return None;
    }
    let total: f64 = verifications
        .iter()
        .map(|verification| verification.monthly_income)
        .sum();
    Some((total / verifications.len() as f64).round() as u64)
}

fn applicant_name(record: &ApplicantRecord) -> Option<&str> {
    Some(record.name.as_str())
}

fn applicant_email(record: &ApplicantRecord) -> Option<&str> {
    Some(record.email.as_str())
}

fn applicant_property(record: &ApplicantRecord) -> Option<&str> {
    Some(record.property.as_str())
}

/// Dashboard quick search covers name and property only; email is a tenants-page field.
pub const DASHBOARD_FIELDS: &[FieldAccessor<ApplicantRecord>] =
    &[applicant_name, applicant_property];

/// Tenants page search.
impl Searchable for ApplicantRecord {
    fn search_fields() -> &'static [FieldAccessor<Self>] {
        const FIELDS: &[FieldAccessor<ApplicantRecord>] =
            &[applicant_name, applicant_email, applicant_property];
        FIELDS
    }
}

fn credit_name(report: &CreditReport) -> Option<&str> {
    Some(report.name.as_str())
}

fn credit_ssn(report: &CreditReport) -> Option<&str> {
    Some(report.ssn.as_str())
}

impl Searchable for CreditReport {
    fn search_fields() -> &'static [FieldAccessor<Self>] {
        const FIELDS: &[FieldAccessor<CreditReport>] = &[credit_name, credit_ssn];
        FIELDS
    }
}

fn background_name(check: &BackgroundCheck) -> Option<&str> {
    Some(check.name.as_str())
}

fn background_ssn(check: &BackgroundCheck) -> Option<&str> {
    Some(check.ssn.as_str())
}

impl Searchable for BackgroundCheck {
    fn search_fields() -> &'static [FieldAccessor<Self>] {
        const FIELDS: &[FieldAccessor<BackgroundCheck>] = &[background_name, background_ssn];
        FIELDS
    }
}

fn eviction_name(search: &EvictionSearch) -> Option<&str> {
    Some(search.name.as_str())
}

fn eviction_ssn(search: &EvictionSearch) -> Option<&str> {
    Some(search.ssn.as_str())
}

impl Searchable for EvictionSearch {
    fn search_fields() -> &'static [FieldAccessor<Self>] {
        const FIELDS: &[FieldAccessor<EvictionSearch>] = &[eviction_name, eviction_ssn];
        FIELDS
    }
}

fn identity_name(verification: &IdentityVerification) -> Option<&str> {
    Some(verification.name.as_str())
}

fn identity_ssn(verification: &IdentityVerification) -> Option<&str> {
    Some(verification.ssn.as_str())
}

impl Searchable for IdentityVerification {
    fn search_fields() -> &'static [FieldAccessor<Self>] {
        const FIELDS: &[FieldAccessor<IdentityVerification>] = &[identity_name, identity_ssn];
        FIELDS
    }
}

fn income_name(verification: &IncomeVerification) -> Option<&str> {
    Some(verification.name.as_str())
}

fn income_employer(verification: &IncomeVerification) -> Option<&str> {
    Some(verification.employer.as_str())
}

impl Searchable for IncomeVerification {
    fn search_fields() -> &'static [FieldAccessor<Self>] {
        const FIELDS: &[FieldAccessor<IncomeVerification>] = &[income_name, income_employer];
        FIELDS
    }
}

fn reference_applicant(check: &ReferenceCheck) -> Option<&str> {
    Some(check.applicant_name.as_str())
}

impl Searchable for ReferenceCheck {
    fn search_fields() -> &'static [FieldAccessor<Self>] {
        const FIELDS: &[FieldAccessor<ReferenceCheck>] = &[reference_applicant];
        FIELDS
    }
}
