use crate::domain::{LinkSelection, ScrapedPage};
use crate::infrastructure::hosted::{CompletionStream, HostedClient};
use crate::infrastructure::scraper::WebsiteScraper;
use crate::infrastructure::security::InputSanitizer;
use crate::prompt::{brochure_context, brochure_messages, link_selection_messages, MAX_SELECTED_LINKS};
use showcase_errors::AppError;
use url::Url;

const MODEL: &str = "gemini-2.0-flash";

/// Scrapes a company site, lets the model pick sub-pages, then streams a
/// markdown brochure.
pub struct GenerateBrochure {
    scraper: WebsiteScraper,
    hosted: HostedClient,
    model: String,
}

impl GenerateBrochure {
    pub fn new(scraper: WebsiteScraper, hosted: HostedClient) -> Self {
        Self {
            scraper,
            hosted,
            model: MODEL.to_string(),
        }
    }

    /// Asks the model which landing-page links belong in a brochure.
    /// Unusable model output yields an empty selection, not an error.
    pub async fn pick_relevant_links(&self, landing: &ScrapedPage) -> Result<LinkSelection, AppError> {
        let content = self
            .hosted
            .complete(&self.model, link_selection_messages(landing), None)
            .await?;

        let selection = LinkSelection::parse_lenient(&content);
        if selection.is_empty() {
            tracing::warn!(
                "Link selection for {} produced no usable links; continuing with landing page only",
                landing.url
            );
        }
        Ok(selection)
    }

    pub async fn gather_context(&self, company_name: &str, website_url: &str) -> Result<String, AppError> {
        let landing = self.scraper.scrape(website_url).await?;
        let selection = self.pick_relevant_links(&landing).await?;

        let mut sub_pages = Vec::new();
        for link in selection.usable(MAX_SELECTED_LINKS) {
            let Some(url) = link.url() else { continue };
            let target = resolve_link(&landing.url, url);
            tracing::info!("Adding {} ({}) to brochure context", link.kind(), target);
            let page = self.scraper.scrape(&target).await?;
            sub_pages.push((link.kind().to_string(), page));
        }

        Ok(brochure_context(company_name, &landing, &sub_pages))
    }

    /// Fails before any network call when the credential is missing; scraping
    /// and link selection finish before the first snapshot is produced.
    pub async fn start(
        &self,
        company_name: &str,
        website_url: &str,
        extra_requirements: &str,
    ) -> Result<CompletionStream, AppError> {
        self.hosted.ensure_credential()?;
        let company_name = InputSanitizer::require_text("company name", company_name)?;

        let context = self.gather_context(&company_name, website_url).await?;
        tracing::info!("Streaming brochure for {} ({} context chars)", company_name, context.chars().count());

        self.hosted
            .complete_stream(
                &self.model,
                brochure_messages(&company_name, extra_requirements.trim(), &context),
            )
            .await
    }
}

/// Models sometimes answer with site-relative paths.
fn resolve_link(landing_url: &str, link: &str) -> String {
    Url::parse(landing_url)
        .and_then(|base| base.join(link.trim()))
        .map(|url| url.to_string())
        .unwrap_or_else(|_| link.trim().to_string())
}
