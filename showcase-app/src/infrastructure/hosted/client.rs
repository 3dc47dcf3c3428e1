use super::sse::{SseBuffer, SseEvent};
use super::types::{
    ChatCompletionChunk, ChatCompletionRequest, ChatCompletionResponse, ImageGenerationRequest,
    ImageGenerationResponse,
};
use crate::domain::ChatMessage;
use base64::Engine;
use futures::Stream;
use showcase_errors::AppError;
use std::pin::Pin;
use std::time::Duration;

const CHAT_TIMEOUT_SECS: u64 = 90;
const IMAGE_TIMEOUT_SECS: u64 = 180;
const ERROR_BODY_PREVIEW_CHARS: usize = 300;

/// Cumulative completion text, one snapshot per received delta.
pub type CompletionStream = Pin<Box<dyn Stream<Item = Result<String, AppError>> + Send>>;

/// Client for an OpenAI-compatible REST API.
///
/// The key is optional so the server can start without it; every call
/// checks it first and fails with [`AppError::MissingCredential`] before
/// touching the network.
#[derive(Clone)]
pub struct HostedClient {
    http_client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    credential_name: &'static str,
}

impl HostedClient {
    pub fn new(base_url: &str, api_key: Option<String>, credential_name: &'static str) -> Self {
        Self {
            http_client: reqwest::Client::builder()
                .connect_timeout(Duration::from_secs(10))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            credential_name,
        }
    }

    pub fn ensure_credential(&self) -> Result<(), AppError> {
        self.api_key().map(|_| ())
    }

    fn api_key(&self) -> Result<&str, AppError> {
        self.api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| AppError::MissingCredential(self.credential_name.to_string()))
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    pub async fn complete(
        &self,
        model: &str,
        messages: Vec<ChatMessage>,
        temperature: Option<f32>,
    ) -> Result<String, AppError> {
        let api_key = self.api_key()?;
        let request = ChatCompletionRequest::new(model, messages).with_temperature(temperature);

        let response = self
            .post_json(api_key, "chat/completions", &request, CHAT_TIMEOUT_SECS)
            .await?;

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| AppError::CompletionFailed(e.to_string()))?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content.unwrap_or_default())
            .ok_or_else(|| AppError::CompletionFailed("No response from model".to_string()))
    }

    /// Opens a streamed completion. The returned stream ends on `[DONE]` or
    /// when the server closes the body.
    pub async fn complete_stream(
        &self,
        model: &str,
        messages: Vec<ChatMessage>,
    ) -> Result<CompletionStream, AppError> {
        let api_key = self.api_key()?;
        let request = ChatCompletionRequest::new(model, messages).streaming();

        let response = self
            .post_json(api_key, "chat/completions", &request, CHAT_TIMEOUT_SECS)
            .await?;

        Ok(Box::pin(cumulative_snapshots(response)))
    }

    /// Returns the decoded bytes of the first generated image.
    pub async fn generate_image(
        &self,
        model: &str,
        prompt: String,
        size: &str,
    ) -> Result<Vec<u8>, AppError> {
        let api_key = self.api_key()?;
        let request = ImageGenerationRequest {
            model: model.to_string(),
            prompt,
            size: size.to_string(),
        };

        let response = self
            .post_json(api_key, "images/generations", &request, IMAGE_TIMEOUT_SECS)
            .await?;

        let generated: ImageGenerationResponse = response
            .json()
            .await
            .map_err(|e| AppError::CompletionFailed(e.to_string()))?;

        let encoded = generated
            .data
            .into_iter()
            .next()
            .and_then(|d| d.b64_json)
            .ok_or_else(|| AppError::ImageDecodeFailed("response carried no image data".to_string()))?;

        base64::engine::general_purpose::STANDARD
            .decode(encoded.trim())
            .map_err(|e| AppError::ImageDecodeFailed(e.to_string()))
    }

    async fn post_json<T: serde::Serialize>(
        &self,
        api_key: &str,
        path: &str,
        body: &T,
        timeout_secs: u64,
    ) -> Result<reqwest::Response, AppError> {
        let url = self.endpoint(path);
        let response = self
            .http_client
            .post(&url)
            .bearer_auth(api_key)
            .header("Content-Type", "application/json")
            .timeout(Duration::from_secs(timeout_secs))
            .json(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AppError::Timeout
                } else {
                    AppError::CompletionFailed(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Hosted API error at {}: {} - {}", url, status, body);
            let preview: String = body.chars().take(ERROR_BODY_PREVIEW_CHARS).collect();
            return Err(AppError::CompletionFailed(format!(
                "API error: {} {}",
                status,
                preview.trim()
            )));
        }

        Ok(response)
    }
}

fn cumulative_snapshots(
    mut response: reqwest::Response,
) -> impl Stream<Item = Result<String, AppError>> + Send {
    async_stream::try_stream! {
        let mut buffer = SseBuffer::default();
        let mut partial = String::new();

        'read: while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| AppError::CompletionFailed(format!("Failed to read stream: {}", e)))?
        {
            for event in buffer.push(&chunk) {
                let data = match event {
                    SseEvent::Done => break 'read,
                    SseEvent::Data(data) => data,
                };

                let Ok(parsed) = serde_json::from_str::<ChatCompletionChunk>(&data) else {
                    tracing::warn!("Skipping unparseable stream chunk");
                    continue;
                };

                if let Some(ref error) = parsed.error {
                    tracing::error!("Hosted stream aborted: {}", error);
                    Err::<(), _>(AppError::CompletionFailed(error.to_string()))?;
                }

                if let Some(delta) = parsed.delta_content().filter(|d| !d.is_empty()) {
                    partial.push_str(delta);
                    yield partial.clone();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{serve, HitCounter};
    use axum::http::StatusCode;
    use axum::routing::post;
    use axum::{Json, Router};
    use futures::StreamExt;

    fn chat_router(hits: HitCounter, reply: &'static str) -> Router {
        Router::new().route(
            "/chat/completions",
            post(move |Json(body): Json<serde_json::Value>| {
                let hits = hits.clone();
                async move {
                    hits.hit();
                    assert_eq!(body["messages"][0]["role"], "system");
                    Json(serde_json::json!({
                        "choices": [{"message": {"role": "assistant", "content": reply}}]
                    }))
                }
            }),
        )
    }

    #[tokio::test]
    async fn test_complete_returns_first_choice() {
        let hits = HitCounter::default();
        let base_url = serve(chat_router(hits.clone(), "Vectors, mostly.")).await;
        let client = HostedClient::new(&base_url, Some("sk-test".to_string()), "OPENAI_API_KEY");

        let text = client
            .complete("gpt-4o-mini", vec![ChatMessage::system("s"), ChatMessage::user("u")], None)
            .await
            .unwrap();

        assert_eq!(text, "Vectors, mostly.");
        assert_eq!(hits.count(), 1);
    }

    #[tokio::test]
    async fn test_missing_key_fails_before_request() {
        let hits = HitCounter::default();
        let base_url = serve(chat_router(hits.clone(), "unused")).await;
        let client = HostedClient::new(&base_url, None, "OPENAI_API_KEY");

        let err = client
            .complete("gpt-4o-mini", vec![ChatMessage::system("s")], None)
            .await
            .unwrap_err();
        assert_eq!(err, AppError::MissingCredential("OPENAI_API_KEY".to_string()));

        let err = client
            .generate_image("gpt-image-1", "a poster".to_string(), "1024x1024")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::MissingCredential(_)));

        assert!(client.complete_stream("m", vec![]).await.is_err());
        assert_eq!(hits.count(), 0);
    }

    #[tokio::test]
    async fn test_error_status_is_reported() {
        let router = Router::new().route(
            "/chat/completions",
            post(|| async { (StatusCode::UNAUTHORIZED, "invalid api key") }),
        );
        let base_url = serve(router).await;
        let client = HostedClient::new(&base_url, Some("sk-bad".to_string()), "OPENAI_API_KEY");

        let err = client.complete("m", vec![], None).await.unwrap_err();
        match err {
            AppError::CompletionFailed(message) => {
                assert!(message.contains("401"));
                assert!(message.contains("invalid api key"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_stream_yields_cumulative_snapshots() {
        let body = concat!(
            "data: {\"choices\":[{\"delta\":{\"role\":\"assistant\"}}]}\n\n",
            "data: {\"choices\":[{\"delta\":{\"content\":\"# Acme\"}}]}\n\n",
            ": keep-alive\n\n",
            "data: {\"choices\":[{\"delta\":{\"content\":\" brochure\"}}]}\n\n",
            "data: [DONE]\n\n",
            "data: {\"choices\":[{\"delta\":{\"content\":\" ignored\"}}]}\n\n",
        );
        let router = Router::new().route(
            "/chat/completions",
            post(move || async move {
                ([("content-type", "text/event-stream")], body)
            }),
        );
        let base_url = serve(router).await;
        let client = HostedClient::new(&base_url, Some("key".to_string()), "GEMINI_API_KEY");

        let snapshots: Vec<String> = client
            .complete_stream("gemini-2.0-flash", vec![ChatMessage::user("go")])
            .await
            .unwrap()
            .map(|s| s.unwrap())
            .collect()
            .await;

        assert_eq!(snapshots, vec!["# Acme".to_string(), "# Acme brochure".to_string()]);
    }

    #[tokio::test]
    async fn test_stream_error_event_fails_the_stream() {
        let body = concat!(
            "data: {\"choices\":[{\"delta\":{\"content\":\"# Acme\"}}]}\n\n",
            "data: {\"error\":{\"code\":429,\"message\":\"Resource exhausted\"}}\n\n",
            "data: {\"choices\":[{\"delta\":{\"content\":\" never\"}}]}\n\n",
        );
        let router = Router::new().route(
            "/chat/completions",
            post(move || async move {
                ([("content-type", "text/event-stream")], body)
            }),
        );
        let base_url = serve(router).await;
        let client = HostedClient::new(&base_url, Some("key".to_string()), "GEMINI_API_KEY");

        let items: Vec<Result<String, AppError>> = client
            .complete_stream("gemini-2.0-flash", vec![ChatMessage::user("go")])
            .await
            .unwrap()
            .collect()
            .await;

        assert_eq!(
            items,
            vec![
                Ok("# Acme".to_string()),
                Err(AppError::CompletionFailed("stream error 429: Resource exhausted".to_string())),
            ]
        );
    }

    #[tokio::test]
    async fn test_image_is_base64_decoded() {
        let router = Router::new().route(
            "/images/generations",
            post(|Json(body): Json<serde_json::Value>| async move {
                assert_eq!(body["size"], "1024x1024");
                Json(serde_json::json!({"data": [{"b64_json": "iVBORw0KGgo="}]}))
            }),
        );
        let base_url = serve(router).await;
        let client = HostedClient::new(&base_url, Some("key".to_string()), "OPENAI_API_KEY");

        let bytes = client
            .generate_image("gpt-image-1", "poster".to_string(), "1024x1024")
            .await
            .unwrap();
        assert_eq!(bytes, vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
    }
}
