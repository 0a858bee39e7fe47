use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::workflows::agreement::AgreementError;
use crate::workflows::estimation::EstimationError;
use crate::workflows::verification::VerificationError;
use crate::workflows::wizard::{CompletionError, WizardError};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    Estimation(EstimationError),
    Agreement(AgreementError),
    Wizard(WizardError),
    Completion(CompletionError),
    Verification(VerificationError),
    RequestFile {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl AppError {
    /// A request file that was read but does not describe a valid request.
    pub fn request_file(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::RequestFile {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::Estimation(err) => write!(f, "estimation error: {}", err),
            AppError::Agreement(err) => write!(f, "agreement error: {}", err),
            AppError::Wizard(err) => write!(f, "wizard error: {}", err),
            AppError::Completion(err) => write!(f, "completion error: {}", err),
            AppError::Verification(err) => write!(f, "verification error: {}", err),
            AppError::RequestFile { path, source } => {
                write!(f, "invalid request file {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::Estimation(err) => Some(err),
            AppError::Agreement(err) => Some(err),
            AppError::Wizard(err) => Some(err),
            AppError::Completion(err) => Some(err),
            AppError::Verification(err) => Some(err),
            AppError::RequestFile { source, .. } => Some(source),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Estimation(_) | AppError::Agreement(_) | AppError::Verification(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::Wizard(_) | AppError::RequestFile { .. } => StatusCode::BAD_REQUEST,
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_)
            | AppError::Completion(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<EstimationError> for AppError {
    fn from(value: EstimationError) -> Self {
        Self::Estimation(value)
    }
}

impl From<AgreementError> for AppError {
    fn from(value: AgreementError) -> Self {
        Self::Agreement(value)
    }
}

impl From<WizardError> for AppError {
    fn from(value: WizardError) -> Self {
        Self::Wizard(value)
    }
}

impl From<VerificationError> for AppError {
    fn from(value: VerificationError) -> Self {
        Self::Verification(value)
    }
}

impl From<CompletionError> for AppError {
    fn from(value: CompletionError) -> Self {
        Self::Completion(value)
    }
}
