use super::local_prompt;
use crate::domain::ChatMessage;

pub const HOSTED_CONCEPT_SYSTEM: &str = "You are a practical technical assistant for SaaS AI teams. \
    Use markdown sections: What it is, How it was created, and Practical SaaS use.";

pub const LOCAL_CONCEPT_SYSTEM: &str = "You are a technical AI assistant. Respond in markdown using this format: \
    1) What it is, 2) How it was created, 3) Practical use in SaaS products.";

pub fn concept_messages(question: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(HOSTED_CONCEPT_SYSTEM),
        ChatMessage::user(question),
    ]
}

pub fn concept_prompt_local(question: &str) -> String {
    local_prompt(LOCAL_CONCEPT_SYSTEM, question)
}
