use clap::{Args, ValueEnum};
use rent_screen::error::AppError;
use rent_screen::screening::{
    average_monthly_income, build_report, filter_searchable, score_breakdown,
    write_applicants_csv, ApplicantSource, BackgroundCheckStatus, ScoreInputs,
    ScreeningCriteria, ScreeningDataset, SeedDataSource, SourceError,
};

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Bureau credit score (0-850)
    #[arg(long)]
    pub(crate) credit_score: u16,
    /// Gross monthly income
    #[arg(long)]
    pub(crate) monthly_income: f64,
    /// Monthly rent for the unit applied for
    #[arg(long)]
    pub(crate) rent: f64,
    /// Background check status label (clear, pending, review, found)
    #[arg(long, default_value = "clear")]
    pub(crate) background: String,
    /// Whether a prior landlord would rent to the applicant again
    #[arg(long)]
    pub(crate) would_re_rent: Option<bool>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum SearchPage {
    Applicants,
    Credit,
    Background,
    Eviction,
    Identity,
    Income,
    References,
}

#[derive(Args, Debug)]
pub(crate) struct SearchArgs {
    /// Case-insensitive search text; omit to list every record
    pub(crate) query: Option<String>,
    /// Which record list to search
    #[arg(long, value_enum, default_value = "applicants")]
    pub(crate) page: SearchPage,
    /// Write matching applicants as CSV to stdout
    #[arg(long)]
    pub(crate) csv: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Minimum credit score required before an applicant is flagged
    #[arg(long)]
    pub(crate) min_credit: Option<u16>,
    /// Required income-to-rent multiple
    #[arg(long)]
    pub(crate) income_ratio: Option<f64>,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let inputs = ScoreInputs {
        credit_score: f64::from(args.credit_score),
        monthly_income: args.monthly_income,
        rent: args.rent,
        background_check: BackgroundCheckStatus::parse(&args.background),
        would_re_rent: args.would_re_rent,
    };

    let breakdown = score_breakdown(&inputs)?;
    println!(
        "Overall score: {} / 100 ({})",
        breakdown.score, breakdown.band_label
    );
    for component in &breakdown.components {
        println!(
            "  - {:?}: {:.1} ({})",
            component.factor, component.points, component.notes
        );
    }
    Ok(())
}

pub(crate) fn run_search(args: SearchArgs) -> Result<(), AppError> {
    let dataset = ScreeningDataset::seed().map_err(SourceError::from)?;
    let query = args.query.as_deref().unwrap_or("");

    if args.csv && args.page != SearchPage::Applicants {
        eprintln!("--csv only applies to the applicants page; listing matches instead");
    }

    match args.page {
        SearchPage::Applicants => {
            let matched = filter_searchable(&dataset.applicants, query);
            if args.csv {
                write_applicants_csv(std::io::stdout().lock(), &matched)?;
                return Ok(());
            }
            for record in &matched {
                println!(
                    "{} | {} | {} | {} | credit {}",
                    record.id,
                    record.name,
                    record.property,
                    record.status.label(),
                    record.credit_score
                );
            }
            print_match_count(matched.len(), dataset.applicants.len());
        }
        SearchPage::Credit => {
            let matched = filter_searchable(&dataset.credit_reports, query);
            for report in &matched {
                println!(
                    "{} | {} | {} ({})",
                    report.name,
                    report.ssn,
                    report.score,
                    report.tier().label()
                );
            }
            print_match_count(matched.len(), dataset.credit_reports.len());
        }
        SearchPage::Background => {
            let matched = filter_searchable(&dataset.background_checks, query);
            for check in &matched {
                println!("{} | {} | {}", check.name, check.ssn, check.status);
            }
            print_match_count(matched.len(), dataset.background_checks.len());
        }
        SearchPage::Eviction => {
            let matched = filter_searchable(&dataset.eviction_searches, query);
            for search in &matched {
                println!(
                    "{} | {} | {} eviction(s)",
                    search.name, search.status, search.evictions_found
                );
            }
            print_match_count(matched.len(), dataset.eviction_searches.len());
        }
        SearchPage::Identity => {
            let matched = filter_searchable(&dataset.identity_verifications, query);
            for verification in &matched {
                println!(
                    "{} | {} | {}",
                    verification.name,
                    verification.ssn,
                    verification.status.label()
                );
            }
            print_match_count(matched.len(), dataset.identity_verifications.len());
        }
        SearchPage::Income => {
            let matched = filter_searchable(&dataset.income_verifications, query);
            for verification in &matched {
                println!(
                    "{} | {} | ${:.0}/mo | {}",
                    verification.name,
                    verification.employer,
                    verification.monthly_income,
                    verification.status.label()
                );
            }
            print_match_count(matched.len(), dataset.income_verifications.len());
            if let Some(average) = average_monthly_income(&dataset.income_verifications) {
                println!("Average verified income: ${average}/mo");
            }
        }
        SearchPage::References => {
            let matched = filter_searchable(&dataset.reference_checks, query);
            for check in &matched {
                let rating = check
                    .average_rating()
                    .map(|rating| format!("{rating:.1}"))
                    .unwrap_or_else(|| "n/a".to_string());
                println!(
                    "{} | {} | avg rating {}",
                    check.applicant_name,
                    check.status.label(),
                    rating
                );
            }
            print_match_count(matched.len(), dataset.reference_checks.len());
        }
    }

    Ok(())
}

fn print_match_count(matched: usize, total: usize) {
    println!("{matched} of {total} records match");
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let defaults = ScreeningCriteria::default();
    let criteria = ScreeningCriteria {
        minimum_credit_score: args.min_credit.unwrap_or(defaults.minimum_credit_score),
        income_to_rent_ratio: args.income_ratio.unwrap_or(defaults.income_to_rent_ratio),
        ..defaults
    };

    let source = SeedDataSource::load()?;

    println!("Rent screening demo");
    println!(
        "Criteria: credit >= {} | income >= {:.1}x rent",
        criteria.minimum_credit_score, criteria.income_to_rent_ratio
    );

    for record in source.list()? {
        let evictions = source.evictions_for(&record.id)?;
        let report = build_report(&record, evictions, &criteria);
        println!(
            "\n{} ({}) - {} | credit tier {}",
            report.name, report.applicant_id, report.status, report.credit_tier
        );
        println!("  {}", report.property);
        println!("  {}", report.rationale);
        for component in &report.components {
            println!(
                "    - {:?}: {:.1} ({})",
                component.factor, component.points, component.notes
            );
        }
        for summary in report.flag_summaries() {
            println!("  ! {summary}");
        }
    }

    Ok(())
}
