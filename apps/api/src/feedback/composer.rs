//! Prompt composition for pillar feedback.

use crate::feedback::prompts::{
    EMPTY_CATEGORY_PLACEHOLDER, FEEDBACK_PROMPT_TEMPLATE, INVESTMENT_STATEMENT,
    PROFESSIONAL_ADVICE_STATEMENT,
};
use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;
use crate::models::rating::{ClassifiedRatings, Rating};

/// Renders the generation prompt for classified ratings.
///
/// Output depends only on the input; both mandatory statements are part of
/// the template and cannot be dropped by an empty category.
pub fn compose(classified: &ClassifiedRatings) -> String {
    let strengths = render_category(&classified.strengths);
    let focus_areas = render_category(&classified.focus_areas);

    fill_template(
        FEEDBACK_PROMPT_TEMPLATE,
        &[
            ("investment_statement", INVESTMENT_STATEMENT),
            ("professional_statement", PROFESSIONAL_ADVICE_STATEMENT),
            ("strengths", strengths.as_str()),
            ("focus_areas", focus_areas.as_str()),
            ("json_only_instruction", JSON_ONLY_INSTRUCTION),
        ],
    )
}

/// Substitutes `{name}` placeholders in a single pass over the template.
///
/// Inserted values are never rescanned, so labels that look like
/// placeholders are emitted verbatim. Braces that do not name a known
/// placeholder (e.g. `{label, analysis}`) are kept as-is.
fn fill_template(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start + 1..];

        let matched = vars.iter().find(|(name, _)| {
            tail.strip_prefix(*name)
                .is_some_and(|after| after.starts_with('}'))
        });

        match matched {
            Some((name, value)) => {
                out.push_str(value);
                rest = &tail[name.len() + 1..];
            }
            None => {
                out.push('{');
                rest = tail;
            }
        }
    }

    out.push_str(rest);
    out
}

fn render_category(ratings: &[Rating]) -> String {
    if ratings.is_empty() {
        return EMPTY_CATEGORY_PLACEHOLDER.to_string();
    }
    ratings
        .iter()
        .map(|r| format!("* {} ({}/10)", r.label, r.value))
        .collect::<Vec<_>>()
        .join("\n")
}
