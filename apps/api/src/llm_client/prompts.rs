// Shared prompt fragments for calls that go through llm_client.
// Feature-specific templates live next to the feature (see feedback::prompts).

/// Output instruction appended to every structured-generation prompt.
/// The response schema enforces structure; this keeps the model from adding prose.
pub const JSON_ONLY_INSTRUCTION: &str = "\
Return ONLY the JSON object. \
Do NOT include any text outside the JSON object. \
Do NOT use markdown code fences.";
