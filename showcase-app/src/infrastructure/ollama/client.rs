use super::types::{GenerateRequest, GenerateResponse};
use showcase_errors::AppError;
use std::time::Duration;

const LIVENESS_TIMEOUT_SECS: u64 = 5;

/// Client for a local Ollama server.
#[derive(Clone)]
pub struct OllamaClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl OllamaClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Liveness check: `GET /api/version` must answer 200 within five seconds.
    pub async fn is_available(&self) -> bool {
        let url = format!("{}/api/version", self.base_url);
        match self
            .http_client
            .get(&url)
            .timeout(Duration::from_secs(LIVENESS_TIMEOUT_SECS))
            .send()
            .await
        {
            Ok(response) if response.status() == reqwest::StatusCode::OK => true,
            Ok(response) => {
                tracing::warn!("Ollama liveness check returned {}", response.status());
                false
            }
            Err(e) => {
                tracing::warn!("Ollama liveness check failed: {}", e);
                false
            }
        }
    }

    /// Runs a non-streaming generation. `Ok(None)` means the server answered
    /// without a `response` field.
    pub async fn generate(
        &self,
        request: &GenerateRequest,
        timeout: Duration,
    ) -> Result<Option<String>, AppError> {
        let url = format!("{}/api/generate", self.base_url);
        let response = self
            .http_client
            .post(&url)
            .header("Content-Type", "application/json")
            .timeout(timeout)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AppError::Timeout
                } else {
                    AppError::LocalModelFailed(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Ollama error: {} - {}", status, body);
            return Err(AppError::LocalModelFailed(format!("API error: {}", status)));
        }

        let generated: GenerateResponse = response
            .json()
            .await
            .map_err(|e| AppError::LocalModelFailed(e.to_string()))?;

        Ok(generated.response)
    }
}
