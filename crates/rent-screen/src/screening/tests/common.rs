use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::screening::domain::{ApplicantId, ApplicantRecord};
use crate::screening::router::{screening_router, ScreeningState};
use crate::screening::seed::ScreeningDataset;
use crate::screening::source::{ApplicantSource, SeedDataSource, SourceError};
use crate::screening::ScreeningCriteria;

pub(super) fn dataset() -> ScreeningDataset {
    ScreeningDataset::seed().expect("seed parses")
}

pub(super) fn seed_state() -> ScreeningState {
    let source = SeedDataSource::load().expect("seed loads");
    ScreeningState::new(Arc::new(source), ScreeningCriteria::default())
}

pub(super) fn seed_router() -> axum::Router {
    screening_router(seed_state())
}

pub(super) struct OfflineSource;

impl ApplicantSource for OfflineSource {
    fn fetch(&self, _id: &ApplicantId) -> Result<Option<ApplicantRecord>, SourceError> {
        Err(SourceError::Unavailable("bureau feed offline".to_string()))
    }

    fn list(&self) -> Result<Vec<ApplicantRecord>, SourceError> {
        Err(SourceError::Unavailable("bureau feed offline".to_string()))
    }

    fn evictions_for(&self, _id: &ApplicantId) -> Result<Option<u32>, SourceError> {
        Err(SourceError::Unavailable("bureau feed offline".to_string()))
    }

    fn snapshot(&self) -> Result<ScreeningDataset, SourceError> {
        Err(SourceError::Unavailable("bureau feed offline".to_string()))
    }
}

/// Serves single-applicant lookups but refuses whole-dataset snapshots.
pub(super) struct LookupOnlySource(pub(super) SeedDataSource);

impl ApplicantSource for LookupOnlySource {
    fn fetch(&self, id: &ApplicantId) -> Result<Option<ApplicantRecord>, SourceError> {
        self.0.fetch(id)
    }

    fn list(&self) -> Result<Vec<ApplicantRecord>, SourceError> {
        self.0.list()
    }

    fn evictions_for(&self, id: &ApplicantId) -> Result<Option<u32>, SourceError> {
        self.0.evictions_for(id)
    }

    fn snapshot(&self) -> Result<ScreeningDataset, SourceError> {
        Err(SourceError::Unavailable("snapshot export disabled".to_string()))
    }
}

pub(super) fn lookup_only_router() -> axum::Router {
    let source = SeedDataSource::load().expect("seed loads");
    screening_router(ScreeningState::new(
        Arc::new(LookupOnlySource(source)),
        ScreeningCriteria::default(),
    ))
}

pub(super) fn offline_router() -> axum::Router {
    screening_router(ScreeningState::new(
        Arc::new(OfflineSource),
        ScreeningCriteria::default(),
    ))
}

pub(super) fn get(uri: &str) -> axum::http::Request<axum::body::Body> {
    axum::http::Request::get(uri)
        .body(axum::body::Body::empty())
        .expect("request builds")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
