mod explain_concept;
mod generate_brochure;
mod generate_poster;
mod run_debate;
mod summarize_for_kids;
mod summarize_website;

pub use explain_concept::{ExplainConcept, LlmBackend};
pub use generate_brochure::GenerateBrochure;
pub use generate_poster::GeneratePoster;
pub use run_debate::{
    RunDebate, MAX_DEBATE_TEMPERATURE, MAX_DEBATE_TURNS, MIN_DEBATE_TEMPERATURE, MIN_DEBATE_TURNS,
};
pub use summarize_for_kids::SummarizeForKids;
pub use summarize_website::SummarizeWebsite;

/// Returned instead of an error whenever the local server fails its liveness check.
pub const OLLAMA_OFFLINE_MESSAGE: &str = "# Ollama Offline\nPlease start Ollama locally and try again.";

pub(crate) fn generated_on() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Fallback used when a model answers with empty content.
pub(crate) fn or_placeholder(text: Option<String>, placeholder: &str) -> String {
    match text {
        Some(text) if !text.trim().is_empty() => text,
        _ => placeholder.to_string(),
    }
}
