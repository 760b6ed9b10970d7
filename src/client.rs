use std::time::Duration;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use reqwest::{Client, ClientBuilder};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::{AppError, Result};

/// Shown when the completion service answers without a usable `result`.
pub const FALLBACK_RESULT: &str = "No response.";

// Shared client so every completion request reuses pooled connections
static CLIENT: Lazy<Client> = Lazy::new(|| {
    ClientBuilder::new()
        .connect_timeout(Duration::from_secs(5))
        .pool_max_idle_per_host(10)
        .build()
        .unwrap_or_else(|_| Client::new())
});

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub prompt: String,
}

/// Something that turns a prompt into display text.
#[async_trait]
pub trait CompletionService: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String>;
}

/// Talks to a `POST /api/generate` style endpoint.
#[derive(Debug, Clone)]
pub struct HttpCompletionClient {
    url: String,
    timeout: Duration,
}

impl HttpCompletionClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            timeout,
        }
    }
}

#[async_trait]
impl CompletionService for HttpCompletionClient {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let body = GenerateRequest {
            prompt: prompt.to_string(),
        };

        let res = CLIENT
            .post(&self.url)
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await?;

        // Status codes are not inspected; only the body shape matters.
        debug!(status = %res.status(), url = %self.url, "completion response received");
        let raw = res.text().await?;
        result_text(&raw)
    }
}

/// Extracts the display text from a completion response body.
///
/// The body must be JSON. A falsy or missing `result` (absent, `null`,
/// `""`, `false`, `0`) yields [`FALLBACK_RESULT`], as does a body that is
/// not an object. Non-string truthy values are shown as their JSON text.
pub fn result_text(raw: &str) -> Result<String> {
    let json: Value = serde_json::from_str(raw)?;

    let field = match &json {
        Value::Null => {
            return Err(AppError::ParseError(
                "completion response body is null".to_string(),
            ));
        }
        Value::Object(map) => map.get("result"),
        _ => None,
    };

    let text = match field {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(Value::Bool(true)) => "true".to_string(),
        Some(Value::Number(n)) if n.as_f64().is_some_and(|v| v != 0.0) => n.to_string(),
        Some(value @ (Value::Array(_) | Value::Object(_))) => value.to_string(),
        _ => FALLBACK_RESULT.to_string(),
    };

    Ok(text)
}
