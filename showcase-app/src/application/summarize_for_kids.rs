use super::{generated_on, or_placeholder, OLLAMA_OFFLINE_MESSAGE};
use crate::domain::Report;
use crate::infrastructure::ollama::{GenerateRequest, OllamaClient};
use crate::infrastructure::scraper::WebsiteScraper;
use crate::prompt::kid_summary_prompt_local;
use showcase_errors::AppError;
use std::time::{Duration, Instant};

const MODEL: &str = "llama3.2:1b";
const TIMEOUT_SECS: u64 = 90;

/// Child-friendly summary of a website, generated by the local model.
pub struct SummarizeForKids {
    scraper: WebsiteScraper,
    ollama: OllamaClient,
}

impl SummarizeForKids {
    pub fn new(scraper: WebsiteScraper, ollama: OllamaClient) -> Self {
        Self { scraper, ollama }
    }

    pub async fn execute(&self, url: &str) -> Result<Report, AppError> {
        if !self.ollama.is_available().await {
            return Ok(Report::new("Ollama Offline", OLLAMA_OFFLINE_MESSAGE.to_string()));
        }

        let start = Instant::now();
        let page = self.scraper.scrape(url).await?;

        let request = GenerateRequest::new(MODEL, kid_summary_prompt_local(&page));
        let summary = self
            .ollama
            .generate(&request, Duration::from_secs(TIMEOUT_SECS))
            .await?;
        let summary = or_placeholder(summary, "No summary generated.");
        let elapsed = start.elapsed().as_secs_f64();

        tracing::info!("Kid-friendly summary of {} took {:.2}s", page.url, elapsed);

        let markdown = format!(
            "# Website Analysis Report\n\n\
             - **URL:** {}\n\
             - **Title:** {}\n\
             - **Generated:** {}\n\
             - **Processing Time:** {:.2}s\n\
             - **Model:** {}\n\n\
             ## Summary\n{}",
            page.url,
            page.title,
            generated_on(),
            elapsed,
            MODEL,
            summary
        );
        Ok(Report::new("Ollama Kid-Friendly Summarizer", markdown))
    }
}
