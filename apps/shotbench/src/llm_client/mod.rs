/// LLM Client: the single point of entry for all chat-completion calls in shotbench.
///
/// No other module talks HTTP. Drivers depend on the `Completer` trait so any
/// backend with the same shape (hosted, local, scripted in tests) can stand in.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::Config;

const CHAT_COMPLETIONS_PATH: &str = "/chat/completions";
/// First retry waits this long; each further retry doubles it.
const DEFAULT_BACKOFF_BASE: Duration = Duration::from_secs(1);

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Rate limited after {attempts} attempts")]
    RateLimited { attempts: u32 },

    #[error("LLM returned empty content")]
    EmptyContent,
}

impl LlmError {
    /// Timeouts, transport failures, 429 and 5xx are worth another attempt.
    pub fn is_transient(&self) -> bool {
        match self {
            LlmError::Http(_) | LlmError::Timeout(_) | LlmError::RateLimited { .. } => true,
            LlmError::Api { status, .. } => *status == 429 || *status >= 500,
            LlmError::Parse(_) | LlmError::EmptyContent => false,
        }
    }
}

/// The external call abstraction the drivers depend on.
#[async_trait]
pub trait Completer: Send + Sync {
    /// Sends `prompt` as a single user message and returns the trimmed reply.
    async fn complete(
        &self,
        prompt: &str,
        max_output_tokens: u32,
        temperature: f64,
    ) -> Result<String, LlmError>;

    /// Sends a system message followed by a user message.
    async fn chat(
        &self,
        system: &str,
        user: &str,
        max_output_tokens: u32,
        temperature: f64,
    ) -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage<'a>],
    temperature: f64,
    max_tokens: u32,
    n: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<Choice>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

impl ChatResponse {
    /// Text of the first choice, trimmed.
    pub fn text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .map(str::trim)
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Client for an OpenAI-compatible chat-completions endpoint (Groq by default).
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    endpoint: String,
    api_key: String,
    model: String,
    timeout: Duration,
    max_attempts: u32,
    backoff_base: Duration,
}

impl LlmClient {
    pub fn new(config: &Config) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().timeout(config.request_timeout).build()?,
            endpoint: format!("{}{}", config.base_url, CHAT_COMPLETIONS_PATH),
            api_key: config.groq_api_key.clone(),
            model: config.model.clone(),
            timeout: config.request_timeout,
            max_attempts: config.max_attempts.max(1),
            backoff_base: DEFAULT_BACKOFF_BASE,
        })
    }

    /// Overrides the retry backoff base delay.
    #[cfg(test)]
    pub fn with_backoff(mut self, base: Duration) -> Self {
        self.backoff_base = base;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Makes a raw call to the chat-completions API, returning the full response object.
    /// Transient failures are retried with exponential backoff up to `max_attempts`.
    async fn call(
        &self,
        messages: &[ChatMessage<'_>],
        max_output_tokens: u32,
        temperature: f64,
    ) -> Result<ChatResponse, LlmError> {
        let request_body = ChatRequest {
            model: &self.model,
            messages,
            temperature,
            max_tokens: max_output_tokens,
            n: 1,
        };

        let mut last_error: Option<LlmError> = None;

        for attempt in 0..self.max_attempts {
            if attempt > 0 {
                let delay = self.backoff_base.saturating_mul(1u32 << (attempt - 1).min(16));
                warn!(
                    "LLM call attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            match self.attempt(&request_body).await {
                Ok(response) => return Ok(response),
                Err(e) if e.is_transient() => {
                    warn!("LLM call failed: {e}");
                    last_error = Some(e);
                }
                Err(e) => return Err(e),
            }
        }

        Err(match last_error {
            Some(LlmError::Api { status: 429, .. }) if self.max_attempts > 1 => {
                LlmError::RateLimited {
                    attempts: self.max_attempts,
                }
            }
            Some(e) => e,
            None => LlmError::RateLimited {
                attempts: self.max_attempts,
            },
        })
    }

    async fn attempt(&self, request_body: &ChatRequest<'_>) -> Result<ChatResponse, LlmError> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(request_body)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.transport_error(e))?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorEnvelope>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let chat_response: ChatResponse = serde_json::from_str(&body)?;

        if let Some(usage) = &chat_response.usage {
            debug!(
                "LLM call succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        Ok(chat_response)
    }

    fn transport_error(&self, e: reqwest::Error) -> LlmError {
        if e.is_timeout() {
            LlmError::Timeout(self.timeout)
        } else {
            LlmError::Http(e)
        }
    }
}

#[async_trait]
impl Completer for LlmClient {
    async fn complete(
        &self,
        prompt: &str,
        max_output_tokens: u32,
        temperature: f64,
    ) -> Result<String, LlmError> {
        let messages = [ChatMessage {
            role: "user",
            content: prompt,
        }];
        let response = self.call(&messages, max_output_tokens, temperature).await?;
        response
            .text()
            .map(str::to_string)
            .ok_or(LlmError::EmptyContent)
    }

    async fn chat(
        &self,
        system: &str,
        user: &str,
        max_output_tokens: u32,
        temperature: f64,
    ) -> Result<String, LlmError> {
        let messages = [
            ChatMessage {
                role: "system",
                content: system,
            },
            ChatMessage {
                role: "user",
                content: user,
            },
        ];
        let response = self.call(&messages, max_output_tokens, temperature).await?;
        response
            .text()
            .map(str::to_string)
            .ok_or(LlmError::EmptyContent)
    }
}
