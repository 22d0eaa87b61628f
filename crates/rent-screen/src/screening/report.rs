use serde::Serialize;
use tracing::warn;

use super::criteria::{evaluate_criteria, CriteriaFlag, ScreeningCriteria};
use super::domain::{ApplicantId, ApplicantRecord};
use super::records::CreditTier;
use super::scoring::{score_breakdown, ScoreComponent};

/// Screening summary rendered on the applicant detail page.
#[derive(Debug, Clone, Serialize)]
pub struct ScreeningReport {
    pub applicant_id: ApplicantId,
    pub name: String,
    pub property: String,
    pub status: &'static str,
    pub credit_tier: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub band: Option<&'static str>,
    pub rationale: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<ScoreComponent>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub flags: Vec<CriteriaFlag>,
}

impl ScreeningReport {
    pub fn flag_summaries(&self) -> Vec<String> {
        self.flags.iter().map(CriteriaFlag::summary).collect()
    }
}

/// Assemble the report for one applicant. Records without rent or with inputs the
/// scorer rejects still get a report, minus the score.
pub fn build_report(
    record: &ApplicantRecord,
    evictions: Option<u32>,
    criteria: &ScreeningCriteria,
) -> ScreeningReport {
    let flags = evaluate_criteria(record, evictions, criteria);

    let (score, band, components, rationale) = match record.score_inputs() {
        None => (None, None, Vec::new(), "rent not on file".to_string()),
        Some(inputs) => match score_breakdown(&inputs) {
            Ok(breakdown) => {
                let rationale = format!("{} ({} / 100)", breakdown.band_label, breakdown.score);
                (
                    Some(breakdown.score),
                    Some(breakdown.band_label),
                    breakdown.components,
                    rationale,
                )
            }
            Err(err) => {
                warn!(applicant = %record.id, error = %err, "applicant could not be scored");
                (None, None, Vec::new(), format!("not scorable: {err}"))
            }
        },
    };

    ScreeningReport {
        applicant_id: record.id.clone(),
        name: record.name.clone(),
        property: record.property.clone(),
        status: record.status.label(),
        credit_tier: CreditTier::from_score(record.credit_score).label(),
        score,
        band,
        rationale,
        components,
        flags,
    }
}
