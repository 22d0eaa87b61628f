//! Weighted applicant score.
//!
//! Four components contribute to a 0-100 score: credit (35%), income-to-rent (30%),
//! background check (20%), and rental history (15%). Weights are carried as
//! percentage points so the half-mark components land on exact binary fractions
//! and the final half-up rounding is not disturbed by representation error.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::domain::BackgroundCheckStatus;

pub const CREDIT_WEIGHT: f64 = 35.0;
pub const INCOME_WEIGHT: f64 = 30.0;
pub const BACKGROUND_WEIGHT: f64 = 20.0;
pub const RENTAL_WEIGHT: f64 = 15.0;

/// Highest score any bureau reports; credit is scaled linearly against it.
pub const MAX_CREDIT_SCORE: f64 = 850.0;
/// Lowest score on the bureau scale.
pub const MIN_BUREAU_CREDIT_SCORE: f64 = 300.0;
/// Income of three times rent earns the full income component.
pub const TARGET_INCOME_MULTIPLE: f64 = 3.0;

const HALF_MARKS: f64 = 0.5;

/// Raw scorer inputs, decoupled from any particular record shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreInputs {
    pub credit_score: f64,
    pub monthly_income: f64,
    pub rent: f64,
    pub background_check: BackgroundCheckStatus,
    #[serde(default)]
    pub would_re_rent: Option<bool>,
}

/// Rejections raised before any arithmetic runs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScoringError {
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },
    #[error("rent must be greater than zero (found {rent})")]
    NonPositiveRent { rent: f64 },
    #[error("monthly income cannot be negative (found {monthly_income})")]
    NegativeIncome { monthly_income: f64 },
    #[error("credit score {credit_score} is outside 0..=850")]
    CreditScoreOutOfRange { credit_score: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFactor {
    Credit,
    Income,
    Background,
    RentalHistory,
}

impl ScoreFactor {
    pub const fn weight(self) -> f64 {
        match self {
            ScoreFactor::Credit => CREDIT_WEIGHT,
            ScoreFactor::Income => INCOME_WEIGHT,
            ScoreFactor::Background => BACKGROUND_WEIGHT,
            ScoreFactor::RentalHistory => RENTAL_WEIGHT,
        }
    }
}

/// Weighted contribution of one factor, kept for transparent audits.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreComponent {
    pub factor: ScoreFactor,
    pub points: f64,
    pub notes: String,
}

/// Decision band rendered next to the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Excellent,
    Good,
    NeedsReview,
}

impl ScoreBand {
    /// Boundaries belong to the higher band: 80 is excellent, 60 is good.
    pub const fn for_score(score: u8) -> Self {
        if score >= 80 {
            Self::Excellent
        } else if score >= 60 {
            Self::Good
        } else {
            Self::NeedsReview
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent Candidate",
            Self::Good => "Good Candidate",
            Self::NeedsReview => "Needs Review",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub score: u8,
    pub band: ScoreBand,
    pub band_label: &'static str,
    pub unrounded: f64,
    pub components: Vec<ScoreComponent>,
}

/// Overall applicant score in `0..=100`.
pub fn compute_overall_score(inputs: &ScoreInputs) -> Result<u8, ScoringError> {
    score_breakdown(inputs).map(|breakdown| breakdown.score)
}

pub fn score_breakdown(inputs: &ScoreInputs) -> Result<ScoreBreakdown, ScoringError> {
    validate(inputs)?;

    if inputs.credit_score < MIN_BUREAU_CREDIT_SCORE {
        debug!(
            credit_score = inputs.credit_score,
            "credit score below bureau range, scoring linearly"
        );
    }

    let income_ratio = inputs.monthly_income / inputs.rent;
    let income_fraction = (income_ratio / TARGET_INCOME_MULTIPLE).min(1.0);

    let components = vec![
        ScoreComponent {
            factor: ScoreFactor::Credit,
            points: inputs.credit_score / MAX_CREDIT_SCORE * CREDIT_WEIGHT,
            notes: format!("credit score {} of {}", inputs.credit_score, MAX_CREDIT_SCORE),
        },
        ScoreComponent {
            factor: ScoreFactor::Income,
            points: income_fraction * INCOME_WEIGHT,
            notes: format!(
                "income {:.2}x rent against a {:.0}x target",
                income_ratio, TARGET_INCOME_MULTIPLE
            ),
        },
        background_component(&inputs.background_check),
        rental_component(inputs.would_re_rent),
    ];

    let unrounded: f64 = components.iter().map(|component| component.points).sum();
    // Validation keeps every component within its weight, so the sum is inside 0..=100.
    let score = unrounded.round().clamp(0.0, 100.0) as u8;
    let band = ScoreBand::for_score(score);

    Ok(ScoreBreakdown {
        score,
        band,
        band_label: band.label(),
        unrounded,
        components,
    })
}

fn validate(inputs: &ScoreInputs) -> Result<(), ScoringError> {
    for (field, value) in [
        ("credit_score", inputs.credit_score),
        ("monthly_income", inputs.monthly_income),
        ("rent", inputs.rent),
    ] {
        if !value.is_finite() {
            return Err(ScoringError::NonFinite { field });
        }
    }

    if inputs.rent <= 0.0 {
        return Err(ScoringError::NonPositiveRent { rent: inputs.rent });
    }
    if inputs.monthly_income < 0.0 {
        return Err(ScoringError::NegativeIncome {
            monthly_income: inputs.monthly_income,
        });
    }
    if !(0.0..=MAX_CREDIT_SCORE).contains(&inputs.credit_score) {
        return Err(ScoringError::CreditScoreOutOfRange {
            credit_score: inputs.credit_score,
        });
    }

    Ok(())
}

// Pending and adverse results earn the same half marks.
fn background_component(status: &BackgroundCheckStatus) -> ScoreComponent {
    let (fraction, notes) = if status.is_clear() {
        (1.0, "background check clear".to_string())
    } else {
        (HALF_MARKS, format!("background check {}", status.as_str()))
    };

    ScoreComponent {
        factor: ScoreFactor::Background,
        points: fraction * BACKGROUND_WEIGHT,
        notes,
    }
}

fn rental_component(would_re_rent: Option<bool>) -> ScoreComponent {
    let (fraction, notes) = match would_re_rent {
        Some(true) => (1.0, "previous landlord would re-rent"),
        Some(false) => (HALF_MARKS, "previous landlord would not re-rent"),
        None => (HALF_MARKS, "landlord reference outstanding"),
    };

    ScoreComponent {
        factor: ScoreFactor::RentalHistory,
        points: fraction * RENTAL_WEIGHT,
        notes: notes.to_string(),
    }
}
