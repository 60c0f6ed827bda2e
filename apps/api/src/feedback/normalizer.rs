//! Response normalization — turns raw model text into a `FeedbackResult`.
//!
//! Schema-constrained generation should make this a pass-through check. The
//! fence stripping stays as a fallback for models that wrap JSON in markdown.

use thiserror::Error;

use crate::models::feedback::FeedbackResult;

#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("generated text is not valid feedback JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("generated feedback has an empty intro")]
    EmptyIntro,
}

/// Parses raw generated text into a `FeedbackResult`.
///
/// Missing or mistyped fields are rejected, never filled in. String values
/// are trimmed and otherwise passed through verbatim.
pub fn normalize(raw_text: &str) -> Result<FeedbackResult, NormalizeError> {
    let cleaned = strip_json_fences(raw_text);
    let mut feedback: FeedbackResult = serde_json::from_str(cleaned)?;

    trim_in_place(&mut feedback.intro);
    for strength in &mut feedback.strengths {
        trim_in_place(&mut strength.label);
        trim_in_place(&mut strength.analysis);
    }
    for step in &mut feedback.steps {
        trim_in_place(&mut step.label);
        step.advice.iter_mut().for_each(trim_in_place);
    }

    if feedback.intro.is_empty() {
        return Err(NormalizeError::EmptyIntro);
    }

    Ok(feedback)
}

fn trim_in_place(value: &mut String) {
    let trimmed = value.trim();
    if trimmed.len() != value.len() {
        *value = trimmed.to_string();
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let inner = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```JSON"))
        .or_else(|| text.strip_prefix("```"));

    match inner {
        Some(stripped) => {
            let stripped = stripped.trim_start();
            stripped
                .strip_suffix("```")
                .map(|s| s.trim())
                .unwrap_or(stripped)
        }
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"{
        "intro": "Lifestyle change is a profound investment in your future health.",
        "strengths": [{"label": "Sleep", "analysis": "You're sleeping well."}],
        "steps": [{"label": "Diet", "advice": ["Add a serve of veg to lunch."]}]
    }"#;

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        let input = "  {\"key\": \"value\"}\n";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_unterminated() {
        let input = "```json\n{\"key\": \"value\"}";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_normalize_plain_json() {
        let feedback = normalize(VALID).unwrap();
        assert_eq!(feedback.strengths[0].label, "Sleep");
        assert_eq!(feedback.steps[0].advice, vec!["Add a serve of veg to lunch."]);
    }

    #[test]
    fn test_normalize_fenced_json() {
        let fenced = format!("```json\n{VALID}\n```");
        assert_eq!(normalize(&fenced).unwrap(), normalize(VALID).unwrap());
    }

    #[test]
    fn test_normalize_trims_whitespace_only() {
        let raw = r#"{"intro": "  Hello  ", "strengths": [],
            "steps": [{"label": " Diet ", "advice": [" Cook at home. "]}]}"#;
        let feedback = normalize(raw).unwrap();
        assert_eq!(feedback.intro, "Hello");
        assert_eq!(feedback.steps[0].label, "Diet");
        assert_eq!(feedback.steps[0].advice[0], "Cook at home.");
    }

    #[test]
    fn test_normalize_rejects_missing_fields() {
        let raw = r#"{"intro": "Hello", "strengths": []}"#;
        assert!(matches!(normalize(raw), Err(NormalizeError::Parse(_))));
    }

    #[test]
    fn test_normalize_rejects_wrong_types() {
        let raw = r#"{"intro": "Hello", "strengths": [], "steps": [{"label": "Diet", "advice": "eat"}]}"#;
        assert!(matches!(normalize(raw), Err(NormalizeError::Parse(_))));
    }

    #[test]
    fn test_normalize_rejects_prose_and_empty_object() {
        assert!(normalize("Here is your feedback!").is_err());
        assert!(normalize("{}").is_err());
        assert!(normalize("").is_err());
    }

    #[test]
    fn test_normalize_rejects_blank_intro() {
        let raw = r#"{"intro": "   ", "strengths": [], "steps": []}"#;
        assert!(matches!(normalize(raw), Err(NormalizeError::EmptyIntro)));
    }
}
