use super::local_prompt;
use crate::domain::{ChatMessage, DebateTranscript, Speaker};

pub const HOSTED_DEBATE_SYSTEM: &str = "You are a highly argumentative assistant. \
    Disagree, challenge assumptions, and use concise snarky tone.";

pub const LOCAL_DEBATE_SYSTEM: &str = "You are a calm and diplomatic assistant. \
    Seek common ground and de-escalate conflicts while staying practical.";

pub fn hosted_opening(topic: &str) -> String {
    format!("My position on '{}' is absolute, and you are wrong.", topic)
}

pub fn local_opening(topic: &str) -> String {
    format!("Let's discuss '{}' calmly and find practical common ground.", topic)
}

/// Hosted side sees its own lines as `assistant` turns and the local
/// side's lines as `user` turns, paired round by round.
pub fn debate_messages(transcript: &DebateTranscript) -> Vec<ChatMessage> {
    let mut messages = vec![ChatMessage::system(HOSTED_DEBATE_SYSTEM)];
    for (hosted, local) in transcript
        .history(Speaker::Hosted)
        .zip(transcript.history(Speaker::Local))
    {
        messages.push(ChatMessage::assistant(hosted));
        messages.push(ChatMessage::user(local));
    }
    messages
}

pub fn debate_prompt_local(last_hosted_message: &str) -> String {
    local_prompt(LOCAL_DEBATE_SYSTEM, last_hosted_message)
}
