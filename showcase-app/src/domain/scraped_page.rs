use serde::{Deserialize, Serialize};

pub const NO_TITLE_PLACEHOLDER: &str = "No title found";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapedPage {
    pub url: String,
    pub title: String,
    pub text: String,
    pub links: Vec<String>,
    #[serde(default)]
    title_found: bool,
}

impl ScrapedPage {
    pub fn new(url: String) -> Self {
        Self {
            url,
            title: NO_TITLE_PLACEHOLDER.to_string(),
            text: String::new(),
            links: Vec::new(),
            title_found: false,
        }
    }

    /// Keeps the placeholder when the page has no usable title.
    pub fn with_title(mut self, title: Option<String>) -> Self {
        if let Some(title) = title.filter(|t| !t.trim().is_empty()) {
            self.title = title.trim().to_string();
            self.title_found = true;
        }
        self
    }

    /// The page title, or `placeholder` when the page had none.
    pub fn title_or<'a>(&'a self, placeholder: &'a str) -> &'a str {
        if self.title_found {
            &self.title
        } else {
            placeholder
        }
    }

    pub fn with_text(mut self, text: String) -> Self {
        self.text = text;
        self
    }

    pub fn with_links(mut self, links: Vec<String>) -> Self {
        self.links = links;
        self
    }
}
