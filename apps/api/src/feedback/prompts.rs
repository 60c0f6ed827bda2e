// Prompt constants for pillar feedback.

/// Placeholder used when a category has no ratings.
pub const EMPTY_CATEGORY_PLACEHOLDER: &str = "None yet identified.";

/// First mandatory statement. Must appear verbatim in every composed prompt.
pub const INVESTMENT_STATEMENT: &str =
    "Acknowledge that lifestyle change is a profound investment in future health.";

/// Second mandatory statement. Must appear verbatim in every composed prompt.
pub const PROFESSIONAL_ADVICE_STATEMENT: &str =
    "Advise that if unsure how to start, they should discuss these ideas with a health professional.";

/// Feedback prompt template.
/// Replace: {investment_statement}, {professional_statement}, {strengths},
///          {focus_areas}, {json_only_instruction}
pub const FEEDBACK_PROMPT_TEMPLATE: &str = r#"Act as a professional health coach from Psych and Lifestyle.
Provide warm, encouraging, motivating feedback in Australian English.

MANDATORY STATEMENTS (include both in the intro):
1. {investment_statement}
2. {professional_statement}

USER DATA:
Established Assets:
{strengths}

Growth Areas:
{focus_areas}

Write one "strengths" entry for each Established Asset and one "steps" entry for each Growth Area, using the pillar name exactly as given for "label". Each step needs at least one practical, achievable piece of advice.

Respond with a JSON object with these exact keys:
"intro" (string), "strengths" (array of {label, analysis}), "steps" (array of {label, advice[]}).
{json_only_instruction}"#;
