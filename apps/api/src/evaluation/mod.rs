// EEAT evaluation: template registry, prompt building, reply extraction.
// All completion calls go through llm_client — no direct HTTP here.

pub mod builder;
pub mod evaluator;
pub mod extractor;
pub mod handlers;
pub mod prompts;
pub mod templates;
