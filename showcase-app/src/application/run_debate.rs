use super::OLLAMA_OFFLINE_MESSAGE;
use crate::domain::{DebateTranscript, Report};
use crate::infrastructure::hosted::HostedClient;
use crate::infrastructure::ollama::{GenerateRequest, OllamaClient};
use crate::infrastructure::security::InputSanitizer;
use crate::prompt::{debate_messages, debate_prompt_local, hosted_opening, local_opening};
use showcase_errors::AppError;
use std::time::Duration;

const HOSTED_MODEL: &str = "gpt-4o-mini";
const LOCAL_MODEL: &str = "llama3.2";
const LOCAL_TIMEOUT_SECS: u64 = 45;

pub const MIN_DEBATE_TURNS: u32 = 1;
pub const MAX_DEBATE_TURNS: u32 = 8;
pub const MIN_DEBATE_TEMPERATURE: f32 = 0.1;
pub const MAX_DEBATE_TEMPERATURE: f32 = 1.2;

/// Argumentative hosted model against a diplomatic local model.
pub struct RunDebate {
    hosted: HostedClient,
    ollama: OllamaClient,
}

impl RunDebate {
    pub fn new(hosted: HostedClient, ollama: OllamaClient) -> Self {
        Self { hosted, ollama }
    }

    pub async fn execute(&self, topic: &str, turns: u32, temperature: f32) -> Result<Report, AppError> {
        let markdown = match self.debate(topic, turns, temperature).await? {
            Some(transcript) => transcript.to_markdown(),
            None => OLLAMA_OFFLINE_MESSAGE.to_string(),
        };
        Ok(Report::new("AI Chat Duel", markdown))
    }

    /// Runs exactly `turns` rounds. `Ok(None)` means the local server is
    /// offline and nothing was generated.
    pub async fn debate(
        &self,
        topic: &str,
        turns: u32,
        temperature: f32,
    ) -> Result<Option<DebateTranscript>, AppError> {
        let topic = InputSanitizer::require_text("topic", topic)?;
        if !(MIN_DEBATE_TURNS..=MAX_DEBATE_TURNS).contains(&turns) {
            return Err(AppError::InvalidInput(format!(
                "turns must be between {} and {}",
                MIN_DEBATE_TURNS, MAX_DEBATE_TURNS
            )));
        }
        if !(MIN_DEBATE_TEMPERATURE..=MAX_DEBATE_TEMPERATURE).contains(&temperature) {
            return Err(AppError::InvalidInput(format!(
                "temperature must be between {} and {}",
                MIN_DEBATE_TEMPERATURE, MAX_DEBATE_TEMPERATURE
            )));
        }

        self.hosted.ensure_credential()?;

        if !self.ollama.is_available().await {
            return Ok(None);
        }

        tracing::info!("Starting {}-round debate on '{}'", turns, topic);

        let mut transcript =
            DebateTranscript::open(topic.clone(), hosted_opening(&topic), local_opening(&topic));

        for round in 1..=turns {
            let hosted_reply = self
                .hosted
                .complete(HOSTED_MODEL, debate_messages(&transcript), Some(temperature))
                .await?;

            let request = GenerateRequest::new(LOCAL_MODEL, debate_prompt_local(&hosted_reply))
                .with_temperature(temperature);
            let local_reply = self
                .ollama
                .generate(&request, Duration::from_secs(LOCAL_TIMEOUT_SECS))
                .await?;

            transcript.record_round(hosted_reply, local_reply.unwrap_or_default());
            tracing::debug!("Debate round {} recorded", round);
        }

        debug_assert_eq!(transcript.rounds(), turns);
        Ok(Some(transcript))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Speaker, Utterance};
    use crate::test_support::{closed_base_url, serve, HitCounter};
    use axum::routing::{get, post};
    use axum::{Json, Router};

    /// Both backends on one mock server; replies are numbered by call order.
    fn debate_router(hosted_hits: HitCounter, local_hits: HitCounter) -> Router {
        Router::new()
            .route("/api/version", get(|| async { "{}" }))
            .route(
                "/chat/completions",
                post(move |Json(body): Json<serde_json::Value>| {
                    let hits = hosted_hits.clone();
                    async move {
                        hits.hit();
                        let history = body["messages"].as_array().map(Vec::len).unwrap_or_default();
                        assert_eq!(body["temperature"], 0.5);
                        Json(serde_json::json!({
                            "choices": [{"message": {"content": format!("gpt {} (saw {} messages)", hits.count(), history)}}]
                        }))
                    }
                }),
            )
            .route(
                "/api/generate",
                post(move |Json(body): Json<serde_json::Value>| {
                    let hits = local_hits.clone();
                    async move {
                        hits.hit();
                        let prompt = body["prompt"].as_str().unwrap_or_default().to_string();
                        assert!(prompt.contains(&format!("### User: gpt {}", hits.count())));
                        assert_eq!(body["options"]["temperature"], 0.5);
                        Json(serde_json::json!({"response": format!("ollama {}", hits.count())}))
                    }
                }),
            )
    }

    #[tokio::test]
    async fn test_runs_exactly_the_requested_rounds() {
        let hosted_hits = HitCounter::default();
        let local_hits = HitCounter::default();
        let base_url = serve(debate_router(hosted_hits.clone(), local_hits.clone())).await;
        let use_case = RunDebate::new(
            HostedClient::new(&base_url, Some("key".to_string()), "OPENAI_API_KEY"),
            OllamaClient::new(&base_url),
        );

        let transcript = use_case.debate("Remote work", 3, 0.5).await.unwrap().unwrap();

        assert_eq!(transcript.rounds(), 3);
        assert_eq!(hosted_hits.count(), 3);
        assert_eq!(local_hits.count(), 3);

        let texts: Vec<(u32, Speaker, &str)> = transcript
            .utterances()
            .iter()
            .map(|Utterance { round, speaker, text }| (*round, *speaker, text.as_str()))
            .collect();
        assert_eq!(
            texts,
            vec![
                (0, Speaker::Hosted, "My position on 'Remote work' is absolute, and you are wrong."),
                (0, Speaker::Local, "Let's discuss 'Remote work' calmly and find practical common ground."),
                (1, Speaker::Hosted, "gpt 1 (saw 3 messages)"),
                (1, Speaker::Local, "ollama 1"),
                (2, Speaker::Hosted, "gpt 2 (saw 5 messages)"),
                (2, Speaker::Local, "ollama 2"),
                (3, Speaker::Hosted, "gpt 3 (saw 7 messages)"),
                (3, Speaker::Local, "ollama 3"),
            ]
        );

        let markdown = transcript.to_markdown();
        assert_eq!(markdown.matches("## Round ").count(), 3);
    }

    #[tokio::test]
    async fn test_offline_local_server_returns_message() {
        let hosted_hits = HitCounter::default();
        let hosted_url = serve(debate_router(hosted_hits.clone(), HitCounter::default())).await;
        let use_case = RunDebate::new(
            HostedClient::new(&hosted_url, Some("key".to_string()), "OPENAI_API_KEY"),
            OllamaClient::new(&closed_base_url().await),
        );

        let report = use_case.execute("Remote work", 2, 0.5).await.unwrap();

        assert_eq!(report.markdown, OLLAMA_OFFLINE_MESSAGE);
        assert_eq!(hosted_hits.count(), 0);
    }

    #[tokio::test]
    async fn test_turns_out_of_range_are_rejected() {
        let use_case = RunDebate::new(
            HostedClient::new("http://unused.invalid", None, "OPENAI_API_KEY"),
            OllamaClient::new("http://unused.invalid"),
        );
        for turns in [0, MAX_DEBATE_TURNS + 1] {
            let err = use_case.debate("topic", turns, 0.7).await.unwrap_err();
            assert!(matches!(err, AppError::InvalidInput(_)));
        }

        let err = use_case.debate("topic", 3, 1.5).await.unwrap_err();
        assert_eq!(
            err,
            AppError::InvalidInput("temperature must be between 0.1 and 1.2".to_string())
        );
    }
}
