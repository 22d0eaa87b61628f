use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, warn};

use super::criteria::ScreeningCriteria;
use super::domain::{ApplicantId, ApplicantRecord};
use super::filter::{filter_records, filter_searchable, FieldAccessor, Searchable};
use super::records::{StatusTally, DASHBOARD_FIELDS};
use super::report::build_report;
use super::scoring::{score_breakdown, ScoreInputs};
use super::source::{ApplicantSource, SourceError};

/// Shared state for the screening routes.
#[derive(Clone)]
pub struct ScreeningState {
    pub source: Arc<dyn ApplicantSource>,
    pub criteria: ScreeningCriteria,
}

impl ScreeningState {
    pub fn new(source: Arc<dyn ApplicantSource>, criteria: ScreeningCriteria) -> Self {
        Self { source, criteria }
    }
}

/// Router exposing scoring and search to the dashboard front-end.
pub fn screening_router(state: ScreeningState) -> Router {
    Router::new()
        .route("/api/v1/applicants", get(list_applicants_handler))
        .route("/api/v1/dashboard", get(dashboard_handler))
        .route(
            "/api/v1/applicants/:applicant_id/report",
            get(report_handler),
        )
        .route("/api/v1/score", post(score_handler))
        .route("/api/v1/screening/:kind", get(screening_page_handler))
        .with_state(Arc::new(state))
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: Option<String>,
}

impl SearchParams {
    fn query(&self) -> &str {
        self.q.as_deref().unwrap_or("")
    }
}

#[derive(Debug, Serialize)]
pub struct ApplicantListView {
    pub query: String,
    pub total: usize,
    pub pending_review: usize,
    pub status_counts: StatusTally,
    pub applicants: Vec<ApplicantRecord>,
}

/// Screening pages with a searchable record list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreeningPage {
    Credit,
    Background,
    Eviction,
    Identity,
    Income,
    References,
}

impl ScreeningPage {
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "credit" => Some(Self::Credit),
            "background" => Some(Self::Background),
            "eviction" => Some(Self::Eviction),
            "identity" => Some(Self::Identity),
            "income" => Some(Self::Income),
            "references" => Some(Self::References),
            _ => None,
        }
    }
}

/// Tenants page list: name, email and property are searched.
pub(crate) async fn list_applicants_handler(
    State(state): State<Arc<ScreeningState>>,
    Query(params): Query<SearchParams>,
) -> Response {
    applicant_list_response(&state, params.query(), ApplicantRecord::search_fields())
}

/// Dashboard recent-applications list: name and property only.
pub(crate) async fn dashboard_handler(
    State(state): State<Arc<ScreeningState>>,
    Query(params): Query<SearchParams>,
) -> Response {
    applicant_list_response(&state, params.query(), DASHBOARD_FIELDS)
}

fn applicant_list_response(
    state: &ScreeningState,
    query: &str,
    fields: &[FieldAccessor<ApplicantRecord>],
) -> Response {
    let records = match state.source.list() {
        Ok(records) => records,
        Err(err) => return source_error_response(err),
    };

    let status_counts = StatusTally::from_labels(records.iter().map(|record| record.status.label()));
    let pending_review = records
        .iter()
        .filter(|record| record.status.awaiting_decision())
        .count();
    let applicants: Vec<ApplicantRecord> = filter_records(&records, query, fields)
        .into_iter()
        .cloned()
        .collect();
    debug!(query, matched = applicants.len(), "applicant search");

    let view = ApplicantListView {
        query: query.to_string(),
        total: records.len(),
        pending_review,
        status_counts,
        applicants,
    };
    (StatusCode::OK, Json(view)).into_response()
}

pub(crate) async fn report_handler(
    State(state): State<Arc<ScreeningState>>,
    Path(applicant_id): Path<String>,
) -> Response {
    let id = ApplicantId(applicant_id);
    let record = match state.source.fetch(&id) {
        Ok(Some(record)) => record,
        Ok(None) => return source_error_response(SourceError::NotFound),
        Err(err) => return source_error_response(err),
    };

    let evictions = match state.source.evictions_for(&id) {
        Ok(evictions) => evictions,
        Err(err) => return source_error_response(err),
    };

    let report = build_report(&record, evictions, &state.criteria);
    (StatusCode::OK, Json(report)).into_response()
}

pub(crate) async fn score_handler(Json(inputs): Json<ScoreInputs>) -> Response {
    match score_breakdown(&inputs) {
        Ok(breakdown) => (StatusCode::OK, Json(breakdown)).into_response(),
        Err(err) => {
            let payload = json!({ "error": err.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn screening_page_handler(
    State(state): State<Arc<ScreeningState>>,
    Path(kind): Path<String>,
    Query(params): Query<SearchParams>,
) -> Response {
    let Some(page) = ScreeningPage::from_slug(&kind) else {
        let payload = json!({ "error": format!("unknown screening page '{kind}'") });
        return (StatusCode::NOT_FOUND, Json(payload)).into_response();
    };

    let dataset = match state.source.snapshot() {
        Ok(dataset) => dataset,
        Err(err) => return source_error_response(err),
    };

    let query = params.query();
    match page {
        ScreeningPage::Credit => page_response(&dataset.credit_reports, query, |report| {
            report.tier().label()
        }),
        ScreeningPage::Background => {
            page_response(&dataset.background_checks, query, |check| check.status.as_str())
        }
        ScreeningPage::Eviction => {
            page_response(&dataset.eviction_searches, query, |search| search.status.as_str())
        }
        ScreeningPage::Identity => {
            page_response(&dataset.identity_verifications, query, |verification| {
                verification.status.label()
            })
        }
        ScreeningPage::Income => {
            page_response(&dataset.income_verifications, query, |verification| {
                verification.status.label()
            })
        }
        ScreeningPage::References => {
            page_response(&dataset.reference_checks, query, |check| check.status.label())
        }
    }
}

fn page_response<T, F>(records: &[T], query: &str, status_of: F) -> Response
where
    T: Searchable + Serialize,
    F: Fn(&T) -> &str,
{
    let status_counts = StatusTally::from_labels(records.iter().map(|record| status_of(record)));
    let matched = filter_searchable(records, query);
    let payload = json!({
        "query": query,
        "total": records.len(),
        "status_counts": status_counts,
        "records": matched,
    });
    (StatusCode::OK, Json(payload)).into_response()
}

fn source_error_response(err: SourceError) -> Response {
    match err {
        SourceError::NotFound => {
            let payload = json!({ "error": "applicant not found" });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
        SourceError::Unavailable(_) => {
            warn!(error = %err, "screening data source unavailable");
            let payload = json!({ "error": err.to_string() });
            (StatusCode::SERVICE_UNAVAILABLE, Json(payload)).into_response()
        }
    }
}
