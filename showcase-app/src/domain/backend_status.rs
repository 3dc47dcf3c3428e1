use serde::{Deserialize, Serialize};

/// Which backends the running server can reach right now.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendStatus {
    pub openai_configured: bool,
    pub gemini_configured: bool,
    pub ollama_online: bool,
}
