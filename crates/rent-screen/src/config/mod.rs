use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

use crate::screening::ScreeningCriteria;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the screening service.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub screening: ScreeningCriteria,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let mut screening = ScreeningCriteria::default();
        if let Ok(raw) = env::var("SCREENING_MIN_CREDIT") {
            screening.minimum_credit_score = raw
                .trim()
                .parse::<u16>()
                .ok()
                .filter(|score| (300..=850).contains(score))
                .ok_or(ConfigError::InvalidMinimumCredit { value: raw })?;
        }
        if let Ok(raw) = env::var("SCREENING_INCOME_RATIO") {
            screening.income_to_rent_ratio = parse_income_ratio(&raw)
                .ok_or(ConfigError::InvalidIncomeRatio { value: raw })?;
        }

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            screening,
        })
    }
}

/// Accepts the settings-page spellings ("3x", "2.5x") as well as a bare number.
fn parse_income_ratio(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    let numeric = trimmed
        .strip_suffix('x')
        .or_else(|| trimmed.strip_suffix('X'))
        .unwrap_or(trimmed);
    numeric
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|ratio| ratio.is_finite() && *ratio > 0.0)
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidMinimumCredit { value: String },
    InvalidIncomeRatio { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidMinimumCredit { value } => write!(
                f,
                "SCREENING_MIN_CREDIT must be a credit score between 300 and 850 (found '{value}')"
            ),
            ConfigError::InvalidIncomeRatio { value } => write!(
                f,
                "SCREENING_INCOME_RATIO must be a positive multiple such as 3 or 2.5x (found '{value}')"
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidMinimumCredit { .. }
            | ConfigError::InvalidIncomeRatio { .. } => None,
        }
    }
}
