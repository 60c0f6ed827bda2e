use serde::{Deserialize, Serialize};

/// The canonical feedback payload returned to the caller.
///
/// Field names match the response schema sent to the generation service, so
/// the same struct both parses model output and serializes the 200 body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackResult {
    pub intro: String,
    pub strengths: Vec<StrengthAnalysis>,
    pub steps: Vec<ActionStep>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthAnalysis {
    pub label: String,
    pub analysis: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionStep {
    pub label: String,
    pub advice: Vec<String>,
}
