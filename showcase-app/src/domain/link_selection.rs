use serde::{Deserialize, Serialize};

const DEFAULT_LINK_TYPE: &str = "Additional Page";

/// One model-picked link. Either field may be missing or `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedLink {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl SelectedLink {
    pub fn kind(&self) -> &str {
        self.kind
            .as_deref()
            .map(str::trim)
            .filter(|kind| !kind.is_empty())
            .unwrap_or(DEFAULT_LINK_TYPE)
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref().map(str::trim).filter(|url| !url.is_empty())
    }
}

/// Brochure-relevant links picked by the model from a landing page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkSelection {
    #[serde(default)]
    pub links: Vec<SelectedLink>,
}

impl LinkSelection {
    /// Parses model output, tolerating prose or code fences around the JSON.
    ///
    /// Tries the whole text first, then the span from the first `{` to the
    /// last `}`. Anything else degrades to an empty selection.
    pub fn parse_lenient(content: &str) -> Self {
        if let Ok(selection) = serde_json::from_str::<Self>(content) {
            return selection;
        }

        match (content.find('{'), content.rfind('}')) {
            (Some(start), Some(end)) if end > start => {
                serde_json::from_str::<Self>(&content[start..=end]).unwrap_or_default()
            }
            _ => Self::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// The first `limit` entries that carry a url.
    pub fn usable(&self, limit: usize) -> impl Iterator<Item = &SelectedLink> {
        self.links
            .iter()
            .take(limit)
            .filter(|link| link.url().is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_strict_json() {
        let selection = LinkSelection::parse_lenient(
            r#"{"links": [{"type":"about","url":"https://x.com/about"}]}"#,
        );
        assert_eq!(selection.links.len(), 1);
        assert_eq!(selection.links[0].kind(), "about");
        assert_eq!(selection.links[0].url(), Some("https://x.com/about"));
    }

    #[test]
    fn test_garbage_yields_empty_selection() {
        assert!(LinkSelection::parse_lenient("I could not find any links, sorry!").is_empty());
        assert!(LinkSelection::parse_lenient("} nonsense {").is_empty());
        assert!(LinkSelection::parse_lenient("{ not json at all }").is_empty());
        assert!(LinkSelection::parse_lenient("").is_empty());
    }

    #[test]
    fn test_extracts_json_from_code_fence() {
        let content = "Here you go:\n```json\n{\"links\": [\
            {\"type\": \"pricing page\", \"url\": \"https://x.com/pricing\"},\
            {\"type\": \"careers page\", \"url\": \"https://x.com/careers\"}]}\n```";
        let selection = LinkSelection::parse_lenient(content);
        assert_eq!(selection.links.len(), 2);
        assert_eq!(selection.links[1].url(), Some("https://x.com/careers"));
    }

    #[test]
    fn test_wrong_shape_degrades_to_empty() {
        assert!(LinkSelection::parse_lenient(r#"{"links": "about"}"#).is_empty());
    }

    #[test]
    fn test_missing_fields_get_defaults() {
        let selection = LinkSelection::parse_lenient(r#"{"links": [{"url": "https://x.com/docs"}, {"type": "blog"}]}"#);
        assert_eq!(selection.links[0].kind(), "Additional Page");
        let usable: Vec<_> = selection.usable(3).collect();
        assert_eq!(usable.len(), 1);
        assert_eq!(usable[0].url(), Some("https://x.com/docs"));
    }

    #[test]
    fn test_null_entry_skips_only_that_link() {
        let selection = LinkSelection::parse_lenient(
            r#"{"links":[{"type":"about page","url":"https://x.com/about"},{"type":"careers page","url":null},{"type":null,"url":"https://x.com/docs"}]}"#,
        );
        assert_eq!(selection.links.len(), 3);

        let usable: Vec<_> = selection.usable(3).collect();
        assert_eq!(usable.len(), 2);
        assert_eq!(usable[0].kind(), "about page");
        assert_eq!(usable[1].kind(), "Additional Page");
        assert_eq!(usable[1].url(), Some("https://x.com/docs"));
    }

    #[test]
    fn test_usable_respects_limit() {
        let links = (0..5)
            .map(|i| SelectedLink {
                kind: Some(format!("page {}", i)),
                url: Some(format!("https://x.com/{}", i)),
            })
            .collect();
        let selection = LinkSelection { links };
        assert_eq!(selection.usable(3).count(), 3);
    }
}
