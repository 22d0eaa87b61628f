use super::common::dataset;
use crate::screening::filter::{filter_records, filter_searchable, FieldAccessor, RecordFilter};
use crate::screening::records::{average_monthly_income, StatusTally};
use crate::screening::ApplicantRecord;

fn applicant_names<'a>(records: &[&'a ApplicantRecord]) -> Vec<&'a str> {
    records.iter().map(|record| record.name.as_str()).collect()
}

#[test]
fn tenants_page_searches_name_email_and_property() {
    let dataset = dataset();

    let by_email = filter_searchable(&dataset.applicants, "EMILY.RODRIGUEZ@");
    assert_eq!(applicant_names(&by_email), vec!["Emily Rodriguez"]);

    let by_property = filter_searchable(&dataset.applicants, "maple");
    assert_eq!(applicant_names(&by_property), vec!["Jessica Martinez"]);

    let everyone = filter_searchable(&dataset.applicants, "");
    assert_eq!(everyone.len(), dataset.applicants.len());
}

#[test]
fn search_keeps_seed_order_across_fields() {
    let dataset = dataset();
    // "son" hits Johnson and Thompson by name and email.
    let matched = filter_searchable(&dataset.applicants, "son");
    assert_eq!(
        applicant_names(&matched),
        vec!["Sarah Johnson", "David Thompson"]
    );
}

#[test]
fn credit_page_matches_masked_ssn_digits() {
    let dataset = dataset();
    let matched = filter_searchable(&dataset.credit_reports, "9012");
    assert_eq!(
        matched.iter().map(|report| report.name.as_str()).collect::<Vec<_>>(),
        vec!["Emily Rodriguez"]
    );
}

#[test]
fn income_page_matches_employer() {
    let dataset = dataset();
    let matched = filter_searchable(&dataset.income_verifications, "healthcare");
    assert_eq!(
        matched
            .iter()
            .map(|verification| verification.name.as_str())
            .collect::<Vec<_>>(),
        vec!["Emily Rodriguez"]
    );
    assert_eq!(average_monthly_income(&dataset.income_verifications), Some(5300));
}

#[test]
fn reference_page_matches_applicant_name_only() {
    let dataset = dataset();
    // Landlord names are not searchable.
    assert!(filter_searchable(&dataset.reference_checks, "metro").is_empty());
    let matched = filter_searchable(&dataset.reference_checks, "chen");
    assert_eq!(
        matched
            .iter()
            .map(|check| check.applicant_name.as_str())
            .collect::<Vec<_>>(),
        vec!["Michael Chen"]
    );
}

#[test]
fn optional_employer_field_is_null_safe() {
    let dataset = dataset();
    fn employer(record: &ApplicantRecord) -> Option<&str> {
        record.employer.as_deref()
    }
    const BY_EMPLOYER: &[FieldAccessor<ApplicantRecord>] = &[employer];

    // David Thompson and Jessica Martinez have no employer on file.
    let matched = filter_records(&dataset.applicants, "inc", BY_EMPLOYER);
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].name, "Sarah Johnson");

    let filter = RecordFilter::new(BY_EMPLOYER.to_vec());
    assert!(!filter.matches(&dataset.applicants[3], "a"));
    assert!(filter.matches(&dataset.applicants[3], ""));
}

#[test]
fn dashboard_tiles_tally_statuses() {
    let dataset = dataset();
    let tally = StatusTally::from_labels(
        dataset
            .applicants
            .iter()
            .map(|record| record.status.label()),
    );
    assert_eq!(tally.total, 5);
    assert_eq!(tally.count("Approved"), 3);
    assert_eq!(tally.count("Reviewing"), 1);
    assert_eq!(tally.count("Rejected"), 1);
}
