use anyhow::{Context, Result};
use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

use super::sse_parser::sse_to_text_stream;
use super::{Completer, CompletionResult, FailureKind, GenerationFailure};

pub const DEFAULT_TEMPERATURE: f32 = 0.4;
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Connection and sampling settings for [`ChatCompletionClient`].
#[derive(Debug, Clone)]
pub struct ClientSettings {
    /// Base URL including the API version, e.g. `https://api.openai.com/v1`.
    pub endpoint: String,
    pub api_key: Option<String>,
    pub model: String,
    pub temperature: f32,
    pub timeout: Duration,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: [Message<'a>; 1],
    temperature: f32,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

type ProgressFn = dyn Fn(usize) + Send + Sync;

/// Streaming client for `POST {endpoint}/chat/completions`.
pub struct ChatCompletionClient {
    client: Client,
    settings: ClientSettings,
    progress: Option<Arc<ProgressFn>>,
}

impl ChatCompletionClient {
    pub fn new(settings: ClientSettings) -> Result<Self> {
        let client = Client::builder()
            .timeout(settings.timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            settings,
            progress: None,
        })
    }

    /// Registers a callback receiving the number of characters received so far.
    #[must_use]
    pub fn with_progress(mut self, progress: impl Fn(usize) + Send + Sync + 'static) -> Self {
        self.progress = Some(Arc::new(progress));
        self
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.settings.endpoint.trim_end_matches('/')
        )
    }

    async fn request(&self, prompt: &str) -> Result<String, GenerationFailure> {
        let url = self.completions_url();

        let body = ChatCompletionRequest {
            model: &self.settings.model,
            messages: [Message {
                role: "user",
                content: prompt,
            }],
            temperature: self.settings.temperature,
            stream: true,
        };

        tracing::debug!(
            %url,
            model = %self.settings.model,
            temperature = self.settings.temperature,
            prompt_len = prompt.len(),
            "sending completion request"
        );

        let mut http_request = self.client.post(&url).json(&body);

        if let Some(api_key) = &self.settings.api_key {
            http_request = http_request.header("Authorization", format!("Bearer {api_key}"));
        }

        let response = http_request.send().await.map_err(|e| {
            GenerationFailure::new(
                FailureKind::Transport,
                format!("Failed to connect to API endpoint {url}: {e}"),
            )
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let kind = if matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN) {
                FailureKind::Authentication
            } else {
                FailureKind::Provider
            };
            return Err(GenerationFailure::new(
                kind,
                format!("API request failed with status {status}: {}", body.trim()),
            ));
        }

        let stream = sse_to_text_stream(response.bytes_stream());
        let mut stream = std::pin::pin!(stream);
        let mut text = String::new();
        let mut received = 0;

        while let Some(chunk_result) = stream.next().await {
            let chunk = chunk_result
                .map_err(|e| GenerationFailure::new(FailureKind::Transport, e.to_string()))?;

            received += chunk.chars().count();
            text.push_str(&chunk);

            if let Some(progress) = &self.progress {
                progress(received);
            }
        }

        tracing::debug!(response_len = text.len(), "completion finished");

        if text.trim().is_empty() {
            return Err(GenerationFailure::new(
                FailureKind::Provider,
                "The model returned an empty response",
            ));
        }

        Ok(text)
    }
}

#[async_trait]
impl Completer for ChatCompletionClient {
    async fn complete(&self, prompt: &str) -> CompletionResult {
        match self.request(prompt).await {
            Ok(text) => CompletionResult::Success(text),
            Err(failure) => {
                tracing::debug!(kind = ?failure.kind, "completion failed");
                CompletionResult::Failure(failure)
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Serves one canned HTTP response and returns the raw request it received.
    async fn serve_once(response: String) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let endpoint = format!("http://{}/v1", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 4096];

            loop {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
                if request_complete(&request) {
                    break;
                }
            }

            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
            String::from_utf8_lossy(&request).into_owned()
        });

        (endpoint, handle)
    }

    fn request_complete(request: &[u8]) -> bool {
        let text = String::from_utf8_lossy(request);
        let Some(header_end) = text.find("\r\n\r\n") else {
            return false;
        };
        let content_length = text[..header_end]
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                name.eq_ignore_ascii_case("content-length")
                    .then(|| value.trim().parse::<usize>().ok())
                    .flatten()
            })
            .unwrap_or(0);
        request.len() >= header_end + 4 + content_length
    }

    fn settings(endpoint: String, api_key: Option<&str>) -> ClientSettings {
        ClientSettings {
            endpoint,
            api_key: api_key.map(str::to_string),
            model: "gemini-2.0-flash".to_string(),
            temperature: DEFAULT_TEMPERATURE,
            timeout: Duration::from_secs(5),
        }
    }

    fn sse_response(parts: &[&str]) -> String {
        let mut body = String::new();
        for part in parts {
            let event = serde_json::json!({ "choices": [{ "delta": { "content": part } }] });
            body.push_str(&format!("data: {event}\n\n"));
        }
        body.push_str("data: [DONE]\n\n");
        format!(
            "HTTP/1.1 200 OK\r\nContent-Type: text/event-stream\r\nConnection: close\r\n\r\n{body}"
        )
    }

    #[tokio::test]
    async fn test_complete_accumulates_stream() {
        let (endpoint, server) = serve_once(sse_response(&["```sql\n", "SELECT 1;", "\n```"])).await;
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);

        let client = ChatCompletionClient::new(settings(endpoint, Some("secret")))
            .unwrap()
            .with_progress(move |_| {
                seen.fetch_add(1, Ordering::SeqCst);
            });

        let result = client.complete("Explain DROP TABLE foo;").await;
        let request = server.await.unwrap();

        assert_eq!(
            result,
            CompletionResult::Success("```sql\nSELECT 1;\n```".to_string())
        );
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert!(request.starts_with("POST /v1/chat/completions"));
        assert!(request.contains("Bearer secret"));
        assert!(request.contains("\"temperature\":0.4"));
        assert!(request.contains("\"stream\":true"));
        assert!(request.contains("Explain DROP TABLE foo;"));
    }

    #[tokio::test]
    async fn test_unauthorized_is_authentication_failure() {
        let response = "HTTP/1.1 401 Unauthorized\r\nContent-Length: 15\r\nConnection: close\r\n\r\ninvalid api key"
            .to_string();
        let (endpoint, server) = serve_once(response).await;

        let client = ChatCompletionClient::new(settings(endpoint, Some("wrong"))).unwrap();
        let result = client.complete("prompt").await;
        server.await.unwrap();

        let CompletionResult::Failure(failure) = result else {
            panic!("expected failure");
        };
        assert_eq!(failure.kind, FailureKind::Authentication);
        assert!(failure.message.contains("401"));
        assert!(failure.message.contains("invalid api key"));
    }

    #[tokio::test]
    async fn test_rate_limit_is_provider_failure() {
        let response =
            "HTTP/1.1 429 Too Many Requests\r\nContent-Length: 4\r\nConnection: close\r\n\r\nslow"
                .to_string();
        let (endpoint, server) = serve_once(response).await;

        let client = ChatCompletionClient::new(settings(endpoint, None)).unwrap();
        let result = client.complete("prompt").await;
        server.await.unwrap();

        assert!(matches!(
            result,
            CompletionResult::Failure(GenerationFailure {
                kind: FailureKind::Provider,
                ..
            })
        ));
    }

    #[tokio::test]
    async fn test_empty_stream_is_provider_failure() {
        let (endpoint, server) = serve_once(sse_response(&[])).await;

        let client = ChatCompletionClient::new(settings(endpoint, None)).unwrap();
        let result = client.complete("prompt").await;
        server.await.unwrap();

        let failure = result.into_result().unwrap_err();
        assert_eq!(failure.kind, FailureKind::Provider);
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_failure() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let endpoint = format!("http://{}/v1", listener.local_addr().unwrap());
        drop(listener);

        let client = ChatCompletionClient::new(settings(endpoint, None)).unwrap();
        let failure = client.complete("prompt").await.into_result().unwrap_err();

        assert_eq!(failure.kind, FailureKind::Transport);
        assert!(failure.message.contains("Failed to connect"));
    }

    #[test]
    fn test_completions_url_trims_trailing_slash() {
        let client =
            ChatCompletionClient::new(settings("https://api.example.com/v1/".into(), None))
                .unwrap();
        assert_eq!(
            client.completions_url(),
            "https://api.example.com/v1/chat/completions"
        );
    }
}
