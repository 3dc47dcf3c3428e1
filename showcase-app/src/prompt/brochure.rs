use super::truncate_chars;
use crate::domain::{ChatMessage, ScrapedPage};

pub const MAX_CANDIDATE_LINKS: usize = 80;
pub const MAX_SELECTED_LINKS: usize = 3;
pub const LANDING_PAGE_CHARS: usize = 5_000;
pub const SUB_PAGE_CHARS: usize = 3_500;
pub const BROCHURE_CONTEXT_CHARS: usize = 14_000;

const LINK_SELECTION_SYSTEM: &str = "Select brochure-relevant links from a company website. \
    Respond in JSON with key 'links', each item containing 'type' and 'url'.";

const LINK_SELECTION_SCHEMA: &str =
    r#"{"links":[{"type":"about page","url":"https://example.com/about"}]}"#;

const BROCHURE_SYSTEM: &str = "You create high-converting B2B AI SaaS brochures in markdown. \
    Include: Overview, Product Value, Why It Wins, Social Proof, CTA.";

pub fn link_selection_messages(landing: &ScrapedPage) -> Vec<ChatMessage> {
    let candidates: Vec<&str> = landing
        .links
        .iter()
        .take(MAX_CANDIDATE_LINKS)
        .map(String::as_str)
        .collect();
    let user = format!(
        "Website: {}\n\
         Ignore privacy, terms, and social links. Prioritize about, product, pricing, docs, careers.\n\n\
         {}\n\nReturn ONLY valid JSON in this schema: {}",
        landing.url,
        candidates.join("\n"),
        LINK_SELECTION_SCHEMA
    );
    vec![ChatMessage::system(LINK_SELECTION_SYSTEM), ChatMessage::user(user)]
}

/// Joins the landing page and each `(type, page)` pair into markdown blocks.
pub fn brochure_context(
    company_name: &str,
    landing: &ScrapedPage,
    sub_pages: &[(String, ScrapedPage)],
) -> String {
    let mut blocks = vec![
        format!("## Company\n{}", company_name),
        format!(
            "## Landing Page\n{}",
            truncate_chars(&landing.text, LANDING_PAGE_CHARS)
        ),
    ];
    for (kind, page) in sub_pages {
        blocks.push(format!(
            "## {}\n{}",
            kind,
            truncate_chars(&page.text, SUB_PAGE_CHARS)
        ));
    }
    blocks.join("\n\n")
}

pub fn brochure_messages(
    company_name: &str,
    extra_requirements: &str,
    context: &str,
) -> Vec<ChatMessage> {
    let user = format!(
        "Company: {}\nExtra requirements: {}\n\nWebsite context:\n{}",
        company_name,
        extra_requirements,
        truncate_chars(context, BROCHURE_CONTEXT_CHARS)
    );
    vec![ChatMessage::system(BROCHURE_SYSTEM), ChatMessage::user(user)]
}
