use std::io::Write;

use serde::Serialize;

use super::domain::ApplicantRecord;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to flush export: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Serialize)]
struct ApplicantRow<'a> {
    id: &'a str,
    name: &'a str,
    email: &'a str,
    property: &'a str,
    applied_date: String,
    status: &'static str,
    credit_score: u16,
    monthly_income: f64,
    background_check: &'a str,
}

impl<'a> From<&'a ApplicantRecord> for ApplicantRow<'a> {
    fn from(record: &'a ApplicantRecord) -> Self {
        Self {
            id: record.id.as_str(),
            name: &record.name,
            email: &record.email,
            property: &record.property,
            applied_date: record.applied_date.format("%Y-%m-%d").to_string(),
            status: record.status.label(),
            credit_score: record.credit_score,
            monthly_income: record.monthly_income,
            background_check: record.background_check.as_str(),
        }
    }
}

/// Write the (already filtered) applicant rows as CSV with a header line.
pub fn write_applicants_csv<W: Write>(
    writer: W,
    records: &[&ApplicantRecord],
) -> Result<(), ExportError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);

    for record in records {
        csv_writer.serialize(ApplicantRow::from(*record))?;
    }

    if records.is_empty() {
        csv_writer.write_record([
            "id",
            "name",
            "email",
            "property",
            "applied_date",
            "status",
            "credit_score",
            "monthly_income",
            "background_check",
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}
