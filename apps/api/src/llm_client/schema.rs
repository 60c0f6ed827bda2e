use serde_json::{json, Value};

/// Gemini `responseSchema` describing `FeedbackResult`.
///
/// Keep in step with `models::feedback::FeedbackResult`; the normalizer
/// parses model output into that struct.
pub fn feedback_response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "intro": { "type": "STRING" },
            "strengths": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "label": { "type": "STRING" },
                        "analysis": { "type": "STRING" }
                    },
                    "required": ["label", "analysis"],
                    "propertyOrdering": ["label", "analysis"]
                }
            },
            "steps": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "label": { "type": "STRING" },
                        "advice": {
                            "type": "ARRAY",
                            "items": { "type": "STRING" }
                        }
                    },
                    "required": ["label", "advice"],
                    "propertyOrdering": ["label", "advice"]
                }
            }
        },
        "required": ["intro", "strengths", "steps"],
        "propertyOrdering": ["intro", "strengths", "steps"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::feedback::{ActionStep, FeedbackResult, StrengthAnalysis};

    #[test]
    fn test_schema_requires_every_feedback_field() {
        let schema = feedback_response_schema();
        assert_eq!(schema["required"], json!(["intro", "strengths", "steps"]));
        assert_eq!(
            schema["properties"]["strengths"]["items"]["required"],
            json!(["label", "analysis"])
        );
        assert_eq!(
            schema["properties"]["steps"]["items"]["properties"]["advice"]["type"],
            "ARRAY"
        );
    }

    #[test]
    fn test_schema_properties_match_feedback_result_fields() {
        let sample = FeedbackResult {
            intro: "Hi".to_string(),
            strengths: vec![StrengthAnalysis {
                label: "Sleep".to_string(),
                analysis: "Great".to_string(),
            }],
            steps: vec![ActionStep {
                label: "Diet".to_string(),
                advice: vec!["Eat greens".to_string()],
            }],
        };
        let serialized = serde_json::to_value(&sample).unwrap();
        let schema = feedback_response_schema();

        let top: Vec<&String> = serialized.as_object().unwrap().keys().collect();
        for key in top {
            assert!(schema["properties"].get(key).is_some(), "{key} missing from schema");
        }
        for key in serialized["steps"][0].as_object().unwrap().keys() {
            assert!(schema["properties"]["steps"]["items"]["properties"]
                .get(key)
                .is_some());
        }
    }
}
