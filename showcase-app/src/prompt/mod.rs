//! Prompt builders for every demo.
//!
//! All functions here are pure: the same inputs always produce the same
//! prompt. Oversized scraped text is cut with [`truncate_chars`].

mod brochure;
mod concept;
mod debate;
mod poster;
mod summary;

pub use brochure::{
    brochure_context, brochure_messages, link_selection_messages, BROCHURE_CONTEXT_CHARS,
    LANDING_PAGE_CHARS, MAX_CANDIDATE_LINKS, MAX_SELECTED_LINKS, SUB_PAGE_CHARS,
};
pub use concept::{concept_messages, concept_prompt_local, HOSTED_CONCEPT_SYSTEM, LOCAL_CONCEPT_SYSTEM};
pub use debate::{
    debate_messages, debate_prompt_local, hosted_opening, local_opening, HOSTED_DEBATE_SYSTEM,
    LOCAL_DEBATE_SYSTEM,
};
pub use poster::{poster_caption, poster_prompt};
pub use summary::{
    kid_summary_prompt_local, summary_messages, HOSTED_SUMMARY_CHARS, LOCAL_SUMMARY_CHARS,
};

pub use crate::domain::truncate_chars;

/// Single-string prompt format understood by the local generate endpoint.
pub fn local_prompt(system: &str, user: &str) -> String {
    format!("### System: {}\n\n### User: {}\n\n### Assistant:", system, user)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_prompt_layout() {
        assert_eq!(
            local_prompt("Be calm.", "Hello"),
            "### System: Be calm.\n\n### User: Hello\n\n### Assistant:"
        );
    }
}
