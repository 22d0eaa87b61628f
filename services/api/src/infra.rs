use metrics_exporter_prometheus::PrometheusHandle;
use rent_screen::config::AppConfig;
use rent_screen::error::AppError;
use rent_screen::screening::{ScreeningState, SeedDataSource};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Screening state backed by the bundled dataset and the configured criteria.
pub(crate) fn seed_screening_state(config: &AppConfig) -> Result<ScreeningState, AppError> {
    let source = SeedDataSource::load()?;
    Ok(ScreeningState::new(
        Arc::new(source),
        config.screening.clone(),
    ))
}
