// Resume analysis: PDF text extraction, prompt, model call, reply normalization.
// All model calls go through llm_client.

pub mod extractor;
pub mod handlers;
pub mod models;
pub mod normalizer;
pub mod pipeline;
pub mod prompts;
