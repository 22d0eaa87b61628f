use super::common::*;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

use crate::screening::router::{report_handler, score_handler, SearchParams};

#[tokio::test]
async fn applicant_list_filters_case_insensitively() {
    let response = seed_router()
        .oneshot(get("/api/v1/applicants?q=SARAH"))
        .await
        .expect("router response");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["query"], "SARAH");
    assert_eq!(payload["total"], 5);
    assert_eq!(payload["pending_review"], 1);
    let applicants = payload["applicants"].as_array().expect("applicant array");
    assert_eq!(applicants.len(), 1);
    assert_eq!(applicants[0]["name"], "Sarah Johnson");
}

#[tokio::test]
async fn applicant_list_without_query_returns_everyone() {
    let response = seed_router()
        .oneshot(get("/api/v1/applicants"))
        .await
        .expect("router response");

    let payload = read_json_body(response).await;
    assert_eq!(payload["query"], "");
    assert_eq!(payload["applicants"].as_array().map(Vec::len), Some(5));
}

#[tokio::test]
async fn report_route_scores_seed_applicant() {
    let response = seed_router()
        .oneshot(get("/api/v1/applicants/1/report"))
        .await
        .expect("router response");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["score"], 96);
    assert_eq!(payload["band"], "Excellent Candidate");
    assert_eq!(payload["components"].as_array().map(Vec::len), Some(4));
}

#[tokio::test]
async fn report_handler_returns_not_found_for_unknown_applicant() {
    let response = report_handler(State(Arc::new(seed_state())), Path("99".to_string())).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn report_handler_returns_unavailable_when_source_is_down() {
    let response = offline_router()
        .oneshot(get("/api/v1/applicants/1/report"))
        .await
        .expect("router response");
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let payload = read_json_body(response).await;
    assert!(payload["error"]
        .as_str()
        .expect("error message")
        .contains("bureau feed offline"));
}

#[tokio::test]
async fn score_handler_returns_breakdown() {
    let inputs = serde_json::from_value(json!({
        "credit_score": 850,
        "monthly_income": 9000.0,
        "rent": 1000.0,
        "background_check": "clear",
        "would_re_rent": true
    }))
    .expect("valid inputs");

    let response = score_handler(axum::Json(inputs)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["score"], 100);
    assert_eq!(payload["band"], "excellent");
}

#[tokio::test]
async fn score_route_rejects_non_positive_rent() {
    let body = json!({
        "credit_score": 700,
        "monthly_income": 5000.0,
        "rent": 0.0,
        "background_check": "clear",
        "would_re_rent": null
    });
    let response = seed_router()
        .oneshot(
            axum::http::Request::post("/api/v1/score")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    serde_json::to_vec(&body).expect("serialize body"),
                ))
                .expect("request builds"),
        )
        .await
        .expect("router response");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn screening_page_filters_by_ssn_fragment() {
    let response = seed_router()
        .oneshot(get("/api/v1/screening/eviction?q=3456"))
        .await
        .expect("router response");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["total"], 4);
    let records = payload["records"].as_array().expect("record array");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["name"], "David Thompson");
}

#[tokio::test]
async fn screening_page_tallies_statuses() {
    let response = seed_router()
        .oneshot(get("/api/v1/screening/background"))
        .await
        .expect("router response");

    let payload = read_json_body(response).await;
    assert_eq!(payload["status_counts"]["total"], 3);
    assert_eq!(payload["status_counts"]["counts"], json!([["clear", 2], ["pending", 1]]));
}

#[tokio::test]
async fn unknown_screening_page_is_not_found() {
    let response = seed_router()
        .oneshot(get("/api/v1/screening/payroll"))
        .await
        .expect("router response");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[test]
fn search_params_default_to_empty_query() {
    let uri: axum::http::Uri = "/api/v1/applicants".parse().expect("uri");
    let Query(params): Query<SearchParams> = Query::try_from_uri(&uri).expect("query parses");
    assert_eq!(params.q, None);
}

#[tokio::test]
async fn dashboard_search_skips_email_but_tenants_list_matches_it() {
    let dashboard = seed_router()
        .oneshot(get("/api/v1/dashboard?q=email.com"))
        .await
        .expect("router response");
    assert_eq!(dashboard.status(), StatusCode::OK);
    let payload = read_json_body(dashboard).await;
    assert_eq!(payload["total"], 5);
    assert_eq!(payload["applicants"].as_array().map(Vec::len), Some(0));

    let tenants = seed_router()
        .oneshot(get("/api/v1/applicants?q=email.com"))
        .await
        .expect("router response");
    let payload = read_json_body(tenants).await;
    assert_eq!(payload["applicants"].as_array().map(Vec::len), Some(5));
}

#[tokio::test]
async fn dashboard_search_matches_property() {
    let response = seed_router()
        .oneshot(get("/api/v1/dashboard?q=PINE%20RD"))
        .await
        .expect("router response");
    let payload = read_json_body(response).await;
    let applicants = payload["applicants"].as_array().expect("applicant array");
    assert_eq!(applicants.len(), 1);
    assert_eq!(applicants[0]["name"], "Emily Rodriguez");
}

#[tokio::test]
async fn report_reads_eviction_count_without_a_dataset_snapshot() {
    let response = lookup_only_router()
        .oneshot(get("/api/v1/applicants/4/report"))
        .await
        .expect("router response");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["name"], "David Thompson");
    let flags = payload["flags"].as_array().expect("flag array");
    assert!(flags
        .iter()
        .any(|flag| flag["kind"] == "eviction_history" && flag["count"] == 1));
}
