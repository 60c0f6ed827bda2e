//! Axum route handlers for the Feedback API.

use axum::{extract::State, Json};
use bytes::Bytes;
use serde_json::Value;

use crate::config::API_KEY_VAR;
use crate::errors::AppError;
use crate::feedback::classifier::ratings_from_value;
use crate::feedback::pipeline::{synthesize_feedback, FeedbackInput};
use crate::models::feedback::FeedbackResult;
use crate::state::AppState;

impl FeedbackInput {
    /// Parses a raw request body into one of the accepted shapes.
    ///
    /// `{ "ratings": [...] }` is preferred and wins when both keys are present;
    /// `{ "prompt": "..." }` bypasses classification and composition.
    pub fn from_body(body: &[u8]) -> Result<Self, AppError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(AppError::Validation("Request body is required".to_string()));
        }

        let value: Value = serde_json::from_slice(body)
            .map_err(|e| AppError::Validation(format!("Request body is not valid JSON: {e}")))?;

        let Value::Object(fields) = value else {
            return Err(AppError::Validation(
                "Request body must be a JSON object".to_string(),
            ));
        };

        match (fields.get("ratings"), fields.get("prompt")) {
            (Some(ratings), _) if !ratings.is_null() => {
                Ok(FeedbackInput::Ratings(ratings_from_value(Some(ratings))?))
            }
            (_, Some(Value::String(prompt))) if !prompt.trim().is_empty() => {
                Ok(FeedbackInput::Prompt(prompt.clone()))
            }
            (_, Some(_)) => Err(AppError::Validation(
                "prompt must be a non-empty string".to_string(),
            )),
            _ => Err(AppError::Validation("ratings is required".to_string())),
        }
    }
}

/// POST /api/v1/feedback (also POST /.netlify/functions/gemini)
///
/// Classifies ratings, generates feedback and returns the normalized
/// `FeedbackResult` object as the body.
pub async fn handle_feedback(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<FeedbackResult>, AppError> {
    let input = FeedbackInput::from_body(&body)?;

    let api_key = state
        .api_key
        .current()
        .ok_or_else(|| AppError::Configuration(format!("{API_KEY_VAR} is not set")))?;

    let feedback = synthesize_feedback(state.generator.as_ref(), &api_key, &input).await?;

    Ok(Json(feedback))
}

/// Any method other than POST on a feedback route.
pub async fn handle_method_not_allowed() -> Result<(), AppError> {
    Err(AppError::MethodNotAllowed)
}
