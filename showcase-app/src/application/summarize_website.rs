use super::or_placeholder;
use crate::domain::Report;
use crate::infrastructure::hosted::HostedClient;
use crate::infrastructure::scraper::WebsiteScraper;
use crate::prompt::summary_messages;
use showcase_errors::AppError;

const MODEL: &str = "gpt-4o-mini";

/// Hosted website summarizer with an optional "explain like I'm five" mode.
pub struct SummarizeWebsite {
    scraper: WebsiteScraper,
    hosted: HostedClient,
}

impl SummarizeWebsite {
    pub fn new(scraper: WebsiteScraper, hosted: HostedClient) -> Self {
        Self { scraper, hosted }
    }

    pub async fn execute(&self, url: &str, explain_like_child: bool) -> Result<Report, AppError> {
        self.hosted.ensure_credential()?;

        let website = self.scraper.scrape(url).await?;
        tracing::info!(
            "Summarizing '{}' ({} chars, eli5={})",
            website.title,
            website.text.chars().count(),
            explain_like_child
        );

        let summary = self
            .hosted
            .complete(MODEL, summary_messages(&website, explain_like_child), None)
            .await?;
        let summary = or_placeholder(Some(summary), "No summary generated.");

        let markdown = format!("# Website Summary\n\n**Source:** {}\n\n{}", url.trim(), summary);
        Ok(Report::new("OpenAI Website Summarizer", markdown))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{serve, HitCounter};
    use axum::response::Html;
    use axum::routing::{get, post};
    use axum::{Json, Router};

    #[tokio::test]
    async fn test_summary_embeds_scraped_page() {
        let hits = HitCounter::default();
        let router = Router::new()
            .route(
                "/news",
                get(|| async { Html("<title>Daily News</title><body><p>GDP grew 3%.</p></body>") }),
            )
            .route(
                "/chat/completions",
                post({
                    let hits = hits.clone();
                    move |Json(body): Json<serde_json::Value>| {
                        let hits = hits.clone();
                        async move {
                            hits.hit();
                            let user = body["messages"][1]["content"].as_str().unwrap_or_default().to_string();
                            assert!(user.starts_with("Website title: Daily News\n"));
                            assert!(user.contains("Explain for a 5-year-old: no"));
                            assert!(user.ends_with("Website content:\nGDP grew 3%."));
                            Json(serde_json::json!({"choices": [{"message": {"content": "- Growth: **3%**"}}]}))
                        }
                    }
                }),
            );
        let base_url = serve(router).await;
        let use_case = SummarizeWebsite::new(
            WebsiteScraper::new(),
            HostedClient::new(&base_url, Some("key".to_string()), "OPENAI_API_KEY"),
        );

        let url = format!("{}/news", base_url);
        let report = use_case.execute(&url, false).await.unwrap();

        assert_eq!(
            report.markdown,
            format!("# Website Summary\n\n**Source:** {}\n\n- Growth: **3%**", url)
        );
        assert_eq!(hits.count(), 1);
    }

    #[tokio::test]
    async fn test_missing_key_skips_scraping() {
        let hits = HitCounter::default();
        let router = Router::new().route(
            "/news",
            get({
                let hits = hits.clone();
                move || {
                    let hits = hits.clone();
                    async move {
                        hits.hit();
                        Html("<title>x</title>")
                    }
                }
            }),
        );
        let base_url = serve(router).await;
        let use_case = SummarizeWebsite::new(
            WebsiteScraper::new(),
            HostedClient::new(&base_url, None, "OPENAI_API_KEY"),
        );

        let err = use_case.execute(&format!("{}/news", base_url), true).await.unwrap_err();
        assert!(matches!(err, AppError::MissingCredential(_)));
        assert_eq!(hits.count(), 0);
    }
}
