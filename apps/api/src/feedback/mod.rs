// Pillar feedback synthesis.
// Implements: rating classification, prompt composition, response normalization,
// and the HTTP handler that sequences them around the llm_client call.

pub mod classifier;
pub mod composer;
pub mod handlers;
pub mod normalizer;
pub mod pipeline;
pub mod prompts;
