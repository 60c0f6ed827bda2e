//! Feedback synthesis — orchestrates the full pipeline for one request.
//!
//! Flow: classify → compose → generate → normalize.
//! Nothing here outlives the request; there is no cache and no retry.

use tracing::{error, info};

use crate::errors::AppError;
use crate::feedback::classifier::classify;
use crate::feedback::composer::compose;
use crate::feedback::normalizer::normalize;
use crate::llm_client::FeedbackGenerator;
use crate::models::feedback::FeedbackResult;
use crate::models::rating::Rating;

/// The two accepted request shapes, unified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackInput {
    /// Pillar ratings; classified and composed into a prompt here.
    Ratings(Vec<Rating>),
    /// A prompt built by the caller, sent to the generation service as-is.
    Prompt(String),
}

/// Runs the pipeline and returns normalized feedback.
///
/// Steps:
/// 1. classify() → ClassifiedRatings (ratings input only)
/// 2. compose() → prompt text (ratings input only)
/// 3. generator.generate() → raw model text (exactly one outbound call)
/// 4. normalize() → FeedbackResult
pub async fn synthesize_feedback(
    generator: &dyn FeedbackGenerator,
    api_key: &str,
    input: &FeedbackInput,
) -> Result<FeedbackResult, AppError> {
    let prompt = match input {
        FeedbackInput::Ratings(ratings) => {
            let classified = classify(ratings);
            info!(
                "Classified {} ratings: {} strengths, {} focus areas",
                ratings.len(),
                classified.strengths.len(),
                classified.focus_areas.len()
            );
            compose(&classified)
        }
        FeedbackInput::Prompt(prompt) => {
            info!("Using caller-supplied prompt ({} chars)", prompt.len());
            prompt.clone()
        }
    };

    let raw_text = generator.generate(&prompt, api_key).await?;

    let feedback = normalize(&raw_text).map_err(|e| {
        error!(raw_text = %raw_text, "Generated feedback failed normalization: {e}");
        AppError::MalformedResponse(e.to_string())
    })?;

    info!(
        "Feedback synthesized: {} strengths, {} steps",
        feedback.strengths.len(),
        feedback.steps.len()
    );

    Ok(feedback)
}
