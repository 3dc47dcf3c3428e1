use crate::domain::ScrapedPage;
use crate::infrastructure::security::InputSanitizer;
use scraper::{ElementRef, Html, Selector};
use showcase_errors::AppError;
use url::Url;

pub const SCRAPER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36";

const SCRAPE_TIMEOUT_SECS: u64 = 20;

/// Elements whose text never reaches the prompt.
const NOISY_TAGS: &[&str] = &["script", "style", "img", "input", "noscript"];

pub struct WebsiteScraper {
    http_client: reqwest::Client,
}

impl WebsiteScraper {
    pub fn new() -> Self {
        Self {
            http_client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(SCRAPE_TIMEOUT_SECS))
                .user_agent(SCRAPER_USER_AGENT)
                .build()
                .expect("Failed to create HTTP client"),
        }
    }

    pub async fn scrape(&self, url: &str) -> Result<ScrapedPage, AppError> {
        let validated = InputSanitizer::validate_url(url)?;
        let parsed_url =
            Url::parse(&validated).map_err(|_| AppError::InvalidUrl(url.to_string()))?;

        tracing::info!("Scraping {}", parsed_url);

        let response = self
            .http_client
            .get(parsed_url.as_str())
            .header("Accept", "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8")
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AppError::Timeout
                } else {
                    AppError::ScrapingFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Scraping {} returned {}", parsed_url, status);
            return Err(AppError::ScrapingFailed(format!("HTTP {}", status)));
        }

        let html = response
            .text()
            .await
            .map_err(|e| AppError::ScrapingFailed(e.to_string()))?;

        Ok(Self::parse_html(&parsed_url, &html))
    }

    pub fn parse_html(url: &Url, html: &str) -> ScrapedPage {
        let document = Html::parse_document(html);

        ScrapedPage::new(url.to_string())
            .with_title(Self::extract_title(&document))
            .with_text(Self::extract_body_text(&document))
            .with_links(Self::extract_links(url, &document))
    }

    fn extract_title(document: &Html) -> Option<String> {
        let selector = Selector::parse("title").ok()?;
        document
            .select(&selector)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
    }

    /// Every trimmed, non-empty text node of `<body>` outside the noisy tags,
    /// one per line.
    fn extract_body_text(document: &Html) -> String {
        let Some(body) = Selector::parse("body")
            .ok()
            .and_then(|sel| document.select(&sel).next())
        else {
            return String::new();
        };

        body.descendants()
            .filter_map(|node| node.value().as_text().map(|text| (node, text)))
            .filter(|(node, _)| {
                !node.ancestors().any(|ancestor| {
                    ElementRef::wrap(ancestor)
                        .is_some_and(|el| NOISY_TAGS.contains(&el.value().name()))
                })
            })
            .map(|(_, text)| text.trim())
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn extract_links(base: &Url, document: &Html) -> Vec<String> {
        let Ok(selector) = Selector::parse("a[href]") else {
            return Vec::new();
        };

        document
            .select(&selector)
            .filter_map(|el| el.value().attr("href"))
            .filter(|href| !href.trim().is_empty())
            .filter_map(|href| base.join(href.trim()).ok())
            .map(|url| url.to_string())
            .collect()
    }
}

impl Default for WebsiteScraper {
    fn default() -> Self {
        Self::new()
    }
}
