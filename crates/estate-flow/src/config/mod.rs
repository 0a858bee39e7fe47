use crate::workflows::estimation::{EstimationError, RentEstimatorConfig};
use std::env;
use std::fmt;
use std::fs;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

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

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub tools: ToolsConfig,
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

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            tools: ToolsConfig::from_env()?,
        })
    }
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

/// Calculator tuning: the rent heuristic table and the simulated request latencies.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolsConfig {
    pub simulated_latency: Duration,
    pub verification_latency: Duration,
    pub rent_model: RentEstimatorConfig,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            simulated_latency: Duration::from_millis(2000),
            verification_latency: Duration::from_millis(3000),
            rent_model: RentEstimatorConfig::default(),
        }
    }
}

impl ToolsConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let simulated_latency =
            parse_millis_var("APP_SIMULATED_LATENCY_MS")?.unwrap_or(defaults.simulated_latency);
        let verification_latency = parse_millis_var("APP_VERIFICATION_LATENCY_MS")?
            .unwrap_or(defaults.verification_latency);

        let mut rent_model = match env::var("APP_RENT_MODEL_PATH") {
            Ok(path) => load_rent_model(PathBuf::from(path))?,
            Err(_) => defaults.rent_model,
        };

        if let Some(rate) = parse_f64_var("APP_RENT_RATE_PER_SQFT")? {
            rent_model.rate_per_sq_ft = rate;
        }
        if let Some(bonus) = parse_f64_var("APP_RENT_AMENITY_BONUS")? {
            rent_model.per_amenity_bonus = bonus;
        }

        rent_model.validate().map_err(ConfigError::RentModel)?;

        Ok(Self {
            simulated_latency,
            verification_latency,
            rent_model,
        })
    }
}

fn parse_millis_var(key: &'static str) -> Result<Option<Duration>, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<u64>()
            .map(|millis| Some(Duration::from_millis(millis)))
            .map_err(|_| ConfigError::InvalidNumber { key, value: raw }),
        Err(_) => Ok(None),
    }
}

fn parse_f64_var(key: &'static str) -> Result<Option<f64>, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidNumber { key, value: raw }),
        Err(_) => Ok(None),
    }
}

fn load_rent_model(path: PathBuf) -> Result<RentEstimatorConfig, ConfigError> {
    let raw = fs::read_to_string(&path).map_err(|source| ConfigError::RentModelFile {
        path: path.clone(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ConfigError::RentModelFormat { path, source })
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost {
        source: std::net::AddrParseError,
    },
    InvalidNumber {
        key: &'static str,
        value: String,
    },
    RentModelFile {
        path: PathBuf,
        source: std::io::Error,
    },
    RentModelFormat {
        path: PathBuf,
        source: serde_json::Error,
    },
    RentModel(EstimationError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidNumber { key, value } => {
                write!(f, "{key} must be numeric (got '{value}')")
            }
            ConfigError::RentModelFile { path, .. } => {
                write!(f, "unable to read rent model at {}", path.display())
            }
            ConfigError::RentModelFormat { path, .. } => {
                write!(f, "rent model at {} is not valid JSON", path.display())
            }
            ConfigError::RentModel(err) => write!(f, "rent model rejected: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort | ConfigError::InvalidNumber { .. } => None,
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::RentModelFile { source, .. } => Some(source),
            ConfigError::RentModelFormat { source, .. } => Some(source),
            ConfigError::RentModel(err) => Some(err),
        }
    }
}
