use serde::{Deserialize, Serialize};

use super::domain::ApplicantRecord;

/// Property manager screening requirements from the settings page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreeningCriteria {
    pub minimum_credit_score: u16,
    pub income_to_rent_ratio: f64,
    pub require_clean_background: bool,
    pub require_no_evictions: bool,
}

impl Default for ScreeningCriteria {
    fn default() -> Self {
        Self {
            minimum_credit_score: 650,
            income_to_rent_ratio: 3.0,
            require_clean_background: true,
            require_no_evictions: true,
        }
    }
}

/// Reason an application is auto-flagged for a manager's attention.
///
/// Flags are advisory and never feed back into the overall score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CriteriaFlag {
    CreditBelowMinimum { minimum: u16, actual: u16 },
    InsufficientIncome { required_ratio: f64, actual_ratio: f64 },
    BackgroundNotClear { status: String },
    BackgroundPending,
    EvictionHistory { count: u32 },
}

impl CriteriaFlag {
    pub fn summary(&self) -> String {
        match self {
            CriteriaFlag::CreditBelowMinimum { minimum, actual } => {
                format!("credit score {actual} below minimum {minimum}")
            }
            CriteriaFlag::InsufficientIncome {
                required_ratio,
                actual_ratio,
            } => format!(
                "income {:.2}x rent, policy requires {:.1}x",
                actual_ratio, required_ratio
            ),
            CriteriaFlag::BackgroundNotClear { status } => {
                format!("background check returned '{status}'")
            }
            CriteriaFlag::BackgroundPending => "background check still pending".to_string(),
            CriteriaFlag::EvictionHistory { count } => {
                format!("{count} eviction(s) on record")
            }
        }
    }
}

/// Checks an applicant against the configured requirements.
///
/// `evictions` is `None` when no eviction search has been run for the applicant.
pub fn evaluate_criteria(
    record: &ApplicantRecord,
    evictions: Option<u32>,
    criteria: &ScreeningCriteria,
) -> Vec<CriteriaFlag> {
    let mut flags = Vec::new();

    if record.credit_score < criteria.minimum_credit_score {
        flags.push(CriteriaFlag::CreditBelowMinimum {
            minimum: criteria.minimum_credit_score,
            actual: record.credit_score,
        });
    }

    if let Some(rent) = record.rent.filter(|rent| *rent > 0.0) {
        let actual_ratio = record.monthly_income / rent;
        if actual_ratio < criteria.income_to_rent_ratio {
            flags.push(CriteriaFlag::InsufficientIncome {
                required_ratio: criteria.income_to_rent_ratio,
                actual_ratio,
            });
        }
    }

    if criteria.require_clean_background {
        if record.background_check.is_pending() {
            flags.push(CriteriaFlag::BackgroundPending);
        } else if !record.background_check.is_clear() {
            flags.push(CriteriaFlag::BackgroundNotClear {
                status: record.background_check.as_str().to_string(),
            });
        }
    }

    if criteria.require_no_evictions {
        if let Some(count) = evictions.filter(|count| *count > 0) {
            flags.push(CriteriaFlag::EvictionHistory { count });
        }
    }

    flags
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screening::domain::{ApplicantId, ApplicationStatus, BackgroundCheckStatus};
    use chrono::NaiveDate;

    fn applicant(credit_score: u16, monthly_income: f64, rent: Option<f64>, status: &str) -> ApplicantRecord {
        ApplicantRecord {
            id: ApplicantId::new("t-1"),
            name: "Test Applicant".to_string(),
            email: "test@example.com".to_string(),
            phone: "(555) 000-0000".to_string(),
            property: "1 Test St".to_string(),
            applied_date: NaiveDate::from_ymd_opt(2025, 11, 1).expect("valid date"),
            status: ApplicationStatus::Pending,
            credit_score,
            monthly_income,
            rent,
            background_check: BackgroundCheckStatus::parse(status),
            would_re_rent: None,
            employer: None,
        }
    }

    #[test]
    fn strong_applicant_raises_no_flags() {
        let record = applicant(750, 5500.0, Some(1650.0), "clear");
        assert!(evaluate_criteria(&record, Some(0), &ScreeningCriteria::default()).is_empty());
    }

    #[test]
    fn flags_credit_income_and_evictions() {
        let record = applicant(580, 3200.0, Some(1400.0), "clear");
        let flags = evaluate_criteria(&record, Some(1), &ScreeningCriteria::default());
        assert!(matches!(
            flags[0],
            CriteriaFlag::CreditBelowMinimum {
                minimum: 650,
                actual: 580
            }
        ));
        assert!(matches!(flags[1], CriteriaFlag::InsufficientIncome { .. }));
        assert_eq!(flags[2], CriteriaFlag::EvictionHistory { count: 1 });
    }

    #[test]
    fn pending_background_is_flagged_separately_from_adverse() {
        let pending = applicant(700, 6000.0, None, "pending");
        let review = applicant(700, 6000.0, None, "review");
        let criteria = ScreeningCriteria::default();
        assert_eq!(
            evaluate_criteria(&pending, None, &criteria),
            vec![CriteriaFlag::BackgroundPending]
        );
        assert_eq!(
            evaluate_criteria(&review, None, &criteria),
            vec![CriteriaFlag::BackgroundNotClear {
                status: "review".to_string()
            }]
        );
    }

    #[test]
    fn relaxed_criteria_skip_background_and_eviction_checks() {
        let record = applicant(700, 6000.0, None, "found");
        let criteria = ScreeningCriteria {
            require_clean_background: false,
            require_no_evictions: false,
            ..ScreeningCriteria::default()
        };
        assert!(evaluate_criteria(&record, Some(2), &criteria).is_empty());
    }
}
