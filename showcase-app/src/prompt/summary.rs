use super::{local_prompt, truncate_chars};
use crate::domain::{ChatMessage, ScrapedPage};

pub const HOSTED_SUMMARY_CHARS: usize = 12_000;
pub const LOCAL_SUMMARY_CHARS: usize = 15_000;

/// The hosted summarizer names untitled pages differently from the scraper.
const HOSTED_NO_TITLE: &str = "No title";

const HOSTED_SUMMARY_SYSTEM: &str = "You summarize websites with focus on important numbers and business signals. \
    Explain clearly and keep markdown structure easy to scan.";

const LOCAL_SUMMARY_SYSTEM: &str = "You analyze websites and explain the content in clear markdown. \
    Focus on numbers, key events, and simple language for children.";

pub fn summary_messages(page: &ScrapedPage, explain_like_child: bool) -> Vec<ChatMessage> {
    let user = format!(
        "Website title: {}\n\
         Summarize the key ideas, highlight numeric data, and include business implications.\n\
         Explain for a 5-year-old: {}\n\n\
         Website content:\n{}",
        page.title_or(HOSTED_NO_TITLE),
        if explain_like_child { "yes" } else { "no" },
        truncate_chars(&page.text, HOSTED_SUMMARY_CHARS)
    );
    vec![ChatMessage::system(HOSTED_SUMMARY_SYSTEM), ChatMessage::user(user)]
}

pub fn kid_summary_prompt_local(page: &ScrapedPage) -> String {
    let user = format!(
        "Analyze this page titled '{}'. \
         Summarize in child-friendly language and preserve key numbers.\n\n\
         Content:\n{}",
        page.title,
        truncate_chars(&page.text, LOCAL_SUMMARY_CHARS)
    );
    local_prompt(LOCAL_SUMMARY_SYSTEM, &user)
}
