use super::{generated_on, or_placeholder, OLLAMA_OFFLINE_MESSAGE};
use crate::domain::Report;
use crate::infrastructure::hosted::HostedClient;
use crate::infrastructure::ollama::{GenerateRequest, OllamaClient};
use crate::infrastructure::security::InputSanitizer;
use crate::prompt::{concept_messages, concept_prompt_local};
use showcase_errors::AppError;
use std::str::FromStr;
use std::time::Duration;

const HOSTED_MODEL: &str = "gpt-4o-mini";
const LOCAL_MODEL: &str = "llama3.2";
const LOCAL_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LlmBackend {
    Hosted,
    Local,
}

impl FromStr for LlmBackend {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "openai" | "hosted" => Ok(Self::Hosted),
            "ollama" | "local" => Ok(Self::Local),
            other => Err(AppError::InvalidInput(format!("unknown backend: {}", other))),
        }
    }
}

/// Tech concept assistant, answered by either backend.
pub struct ExplainConcept {
    hosted: HostedClient,
    ollama: OllamaClient,
}

impl ExplainConcept {
    pub fn new(hosted: HostedClient, ollama: OllamaClient) -> Self {
        Self { hosted, ollama }
    }

    pub async fn execute(&self, question: &str, backend: LlmBackend) -> Result<Report, AppError> {
        let question = InputSanitizer::require_text("question", question)?;
        tracing::info!("Explaining concept with {:?} backend", backend);

        match backend {
            LlmBackend::Hosted => self.explain_hosted(&question).await,
            LlmBackend::Local => self.explain_local(&question).await,
        }
    }

    async fn explain_hosted(&self, question: &str) -> Result<Report, AppError> {
        let content = self
            .hosted
            .complete(HOSTED_MODEL, concept_messages(question), None)
            .await?;
        let content = or_placeholder(Some(content), "No response generated.");

        let markdown = format!(
            "# OpenAI Technical Brief\nGenerated on: {}\n\n## Query\n{}\n\n## Response\n{}",
            generated_on(),
            question,
            content
        );
        Ok(Report::new("OpenAI Tech Assistant", markdown))
    }

    async fn explain_local(&self, question: &str) -> Result<Report, AppError> {
        if !self.ollama.is_available().await {
            return Ok(Report::new("Ollama Tech Assistant", OLLAMA_OFFLINE_MESSAGE.to_string()));
        }

        let request = GenerateRequest::new(LOCAL_MODEL, concept_prompt_local(question));
        let body = self
            .ollama
            .generate(&request, Duration::from_secs(LOCAL_TIMEOUT_SECS))
            .await?;
        let body = or_placeholder(body, "No response generated.");

        let markdown = format!(
            "# Technology Concept Explanation\nGenerated on: {}\n\n## Query\n{}\n\n## Response\n{}\n\n---\nGenerated using {}",
            generated_on(),
            question,
            body,
            LOCAL_MODEL
        );
        Ok(Report::new("Ollama Tech Assistant", markdown))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{closed_base_url, serve, HitCounter};
    use axum::routing::{get, post};
    use axum::{Json, Router};

    fn ollama_router(hits: HitCounter) -> Router {
        Router::new()
            .route("/api/version", get(|| async { "{\"version\":\"0.5.1\"}" }))
            .route(
                "/api/generate",
                post(move || {
                    let hits = hits.clone();
                    async move {
                        hits.hit();
                        Json(serde_json::json!({"response": "A vector store keeps embeddings."}))
                    }
                }),
            )
    }

    #[test]
    fn test_backend_from_form_value() {
        assert_eq!("OpenAI".parse::<LlmBackend>(), Ok(LlmBackend::Hosted));
        assert_eq!("ollama".parse::<LlmBackend>(), Ok(LlmBackend::Local));
        assert!("claude".parse::<LlmBackend>().is_err());
    }

    #[tokio::test]
    async fn test_local_answer_is_wrapped_in_report() {
        let hits = HitCounter::default();
        let base_url = serve(ollama_router(hits.clone())).await;
        let use_case = ExplainConcept::new(
            HostedClient::new(&base_url, None, "OPENAI_API_KEY"),
            OllamaClient::new(&base_url),
        );

        let report = use_case
            .execute("Explain vector databases.", LlmBackend::Local)
            .await
            .unwrap();

        assert!(report.markdown.starts_with("# Technology Concept Explanation\nGenerated on: "));
        assert!(report.markdown.contains("## Query\nExplain vector databases.\n\n## Response\nA vector store keeps embeddings."));
        assert!(report.markdown.ends_with("---\nGenerated using llama3.2"));
        assert_eq!(hits.count(), 1);
    }

    #[tokio::test]
    async fn test_offline_server_short_circuits() {
        let use_case = ExplainConcept::new(
            HostedClient::new("http://unused.invalid", None, "OPENAI_API_KEY"),
            OllamaClient::new(&closed_base_url().await),
        );

        let report = use_case.execute("What is RAG?", LlmBackend::Local).await.unwrap();
        assert_eq!(report.markdown, OLLAMA_OFFLINE_MESSAGE);
    }

    #[tokio::test]
    async fn test_empty_question_is_rejected() {
        let use_case = ExplainConcept::new(
            HostedClient::new("http://unused.invalid", None, "OPENAI_API_KEY"),
            OllamaClient::new("http://unused.invalid"),
        );
        let err = use_case.execute("   ", LlmBackend::Hosted).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }
}
