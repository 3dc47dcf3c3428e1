use serde::{Deserialize, Serialize};

/// Markdown output of one text demo invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub title: String,
    pub markdown: String,
    pub generated_at: chrono::DateTime<chrono::Utc>,
}

impl Report {
    pub fn new(title: impl Into<String>, markdown: String) -> Self {
        Self {
            title: title.into(),
            markdown,
            generated_at: chrono::Utc::now(),
        }
    }
}
