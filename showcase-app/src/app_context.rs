use crate::application::{
    ExplainConcept, GenerateBrochure, GeneratePoster, RunDebate, SummarizeForKids,
    SummarizeWebsite,
};
use crate::config::{Settings, GEMINI_API_KEY, OPENAI_API_KEY};
use crate::domain::BackendStatus;
use crate::infrastructure::hosted::HostedClient;
use crate::infrastructure::ollama::OllamaClient;
use crate::infrastructure::scraper::WebsiteScraper;
use std::sync::Arc;

/// Shared, read-only state handed to every route and server function.
#[derive(Clone)]
pub struct AppContext {
    pub explain_concept: Arc<ExplainConcept>,
    pub summarize_website: Arc<SummarizeWebsite>,
    pub summarize_for_kids: Arc<SummarizeForKids>,
    pub run_debate: Arc<RunDebate>,
    pub generate_brochure: Arc<GenerateBrochure>,
    pub generate_poster: Arc<GeneratePoster>,
    pub ollama: OllamaClient,
    pub settings: Arc<Settings>,
}

impl AppContext {
    pub fn from_env() -> Self {
        Self::from_settings(Settings::from_env())
    }

    pub fn from_settings(settings: Settings) -> Self {
        for (name, key) in [
            (OPENAI_API_KEY, &settings.openai_api_key),
            (GEMINI_API_KEY, &settings.gemini_api_key),
        ] {
            if key.is_some() {
                tracing::info!("{} configured", name);
            } else {
                tracing::warn!("{} not set; demos that need it will report it missing", name);
            }
        }
        tracing::info!("Using Ollama at {}", settings.ollama_base_url);

        let openai = HostedClient::new(
            &settings.openai_base_url,
            settings.openai_api_key.clone(),
            OPENAI_API_KEY,
        );
        let gemini = HostedClient::new(
            &settings.gemini_base_url,
            settings.gemini_api_key.clone(),
            GEMINI_API_KEY,
        );
        let ollama = OllamaClient::new(&settings.ollama_base_url);

        Self {
            explain_concept: Arc::new(ExplainConcept::new(openai.clone(), ollama.clone())),
            summarize_website: Arc::new(SummarizeWebsite::new(WebsiteScraper::new(), openai.clone())),
            summarize_for_kids: Arc::new(SummarizeForKids::new(WebsiteScraper::new(), ollama.clone())),
            run_debate: Arc::new(RunDebate::new(openai.clone(), ollama.clone())),
            generate_brochure: Arc::new(GenerateBrochure::new(WebsiteScraper::new(), gemini)),
            generate_poster: Arc::new(GeneratePoster::new(openai)),
            ollama,
            settings: Arc::new(settings),
        }
    }

    pub async fn backend_status(&self) -> BackendStatus {
        BackendStatus {
            openai_configured: self.settings.openai_api_key.is_some(),
            gemini_configured: self.settings.gemini_api_key.is_some(),
            ollama_online: self.ollama.is_available().await,
        }
    }
}
