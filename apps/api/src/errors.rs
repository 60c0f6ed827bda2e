use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Configuration error: {0}")]
    Configuration(String),

    /// `status` is the upstream HTTP status, absent for transport failures.
    #[error("Upstream error: {message}")]
    Upstream { status: Option<u16>, message: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Upstream { status, .. } => upstream_status_code(*status),
            AppError::Configuration(_)
            | AppError::MalformedResponse(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            AppError::Configuration(_) => "CONFIGURATION_ERROR",
            AppError::Upstream { .. } => "UPSTREAM_ERROR",
            AppError::MalformedResponse(_) => "MALFORMED_RESPONSE",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

/// Client-attributable upstream failures (4xx) pass through unchanged.
/// Upstream 5xx and transport failures become 502.
fn upstream_status_code(status: Option<u16>) -> StatusCode {
    status
        .and_then(|s| StatusCode::from_u16(s).ok())
        .filter(StatusCode::is_client_error)
        .unwrap_or(StatusCode::BAD_GATEWAY)
}

impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::Api { status, message } => AppError::Upstream {
                status: Some(status),
                message: format!("Generation service returned {status}: {message}"),
            },
            LlmError::Http(e) if e.is_timeout() => AppError::Upstream {
                status: None,
                message: "Generation service timed out".to_string(),
            },
            LlmError::Http(e) => AppError::Upstream {
                status: None,
                message: format!("Could not reach generation service: {e}"),
            },
            LlmError::Parse(e) => AppError::Upstream {
                status: None,
                message: format!("Generation service sent an unreadable response: {e}"),
            },
            LlmError::EmptyContent { reason } => AppError::MalformedResponse(format!(
                "Generation service returned no feedback text ({reason})"
            )),
            LlmError::MissingApiKey => {
                AppError::Configuration(format!("{} is not set", crate::config::API_KEY_VAR))
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.code();

        let (message, upstream_status) = match &self {
            AppError::Validation(msg) => (msg.clone(), None),
            AppError::MethodNotAllowed => ("Method Not Allowed".to_string(), None),
            AppError::Configuration(msg) => {
                tracing::error!("Configuration error: {msg}");
                (msg.clone(), None)
            }
            AppError::Upstream { status, message } => {
                tracing::warn!("Upstream error (status {status:?}): {message}");
                (message.clone(), *status)
            }
            AppError::MalformedResponse(msg) => {
                tracing::error!("Malformed response: {msg}");
                (
                    "The generated feedback could not be understood. Please try again."
                        .to_string(),
                    None,
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    "Internal server error during analysis.".to_string(),
                    None,
                )
            }
        };

        let mut error = json!({
            "code": code,
            "message": message,
        });
        if let Some(upstream) = upstream_status {
            error["upstream_status"] = json!(upstream);
        }

        (status, Json(json!({ "error": error }))).into_response()
    }
}
