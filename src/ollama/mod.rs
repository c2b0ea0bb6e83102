//! HTTP client for a local Ollama server
//!
//! Non-streaming generation plus the two read endpoints the assistant
//! needs (version for health checks, tags for installed models). Every
//! failure maps to `ServiceUnavailable`, `Timeout`, or `OllamaApi` so
//! callers can decide whether to fall back.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::errors::{HealthPathError, Result};

/// Default Ollama API endpoint
pub const DEFAULT_OLLAMA_URL: &str = "http://127.0.0.1:11434";

/// Default model tag
pub const DEFAULT_MODEL: &str = "llama3.2:3b";

/// Request timeout for generation
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Quick-probe timeout for health checks
const PROBE_TIMEOUT: Duration = Duration::from_secs(2);

/// Ollama API client
#[derive(Debug, Clone)]
pub struct OllamaClient {
    client: Client,
    base_url: String,
    model: String,
}

impl OllamaClient {
    /// Create a client with default endpoint and model
    pub fn new() -> Result<Self> {
        Self::with_config(DEFAULT_OLLAMA_URL, DEFAULT_MODEL)
    }

    /// Create a client with custom endpoint and model
    pub fn with_config(base_url: &str, model: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(HealthPathError::Http)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
        })
    }

    /// Generate a completion for `prompt` (non-streaming)
    pub async fn generate(&self, prompt: &str) -> Result<String> {
        let url = format!("{}/api/generate", self.base_url);

        let request = GenerateRequest {
            model: self.model.clone(),
            prompt: prompt.to_string(),
            stream: false,
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    HealthPathError::Timeout {
                        duration_ms: REQUEST_TIMEOUT.as_millis() as u64,
                    }
                } else if e.is_connect() {
                    HealthPathError::ServiceUnavailable(format!(
                        "cannot reach Ollama at {}: {}",
                        self.base_url, e
                    ))
                } else {
                    HealthPathError::Http(e)
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(HealthPathError::OllamaApi(format!("HTTP {}: {}", status, body)));
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|e| HealthPathError::OllamaApi(format!("bad generate response: {}", e)))?;

        if parsed.response.trim().is_empty() {
            return Err(HealthPathError::OllamaApi(
                "model returned an empty response".to_string(),
            ));
        }

        Ok(parsed.response)
    }

    /// Check whether the Ollama server answers at all
    pub async fn health_check(&self) -> bool {
        let url = format!("{}/api/version", self.base_url);
        match self
            .client
            .get(&url)
            .timeout(PROBE_TIMEOUT)
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }

    /// List installed model tags
    pub async fn list_models(&self) -> Result<Vec<String>> {
        let url = format!("{}/api/tags", self.base_url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            HealthPathError::ServiceUnavailable(format!("failed to list models: {}", e))
        })?;

        if !response.status().is_success() {
            return Err(HealthPathError::OllamaApi(format!(
                "HTTP {} listing models",
                response.status()
            )));
        }

        let parsed: TagsResponse = response
            .json()
            .await
            .map_err(|e| HealthPathError::OllamaApi(format!("bad tags response: {}", e)))?;

        Ok(parsed.models.into_iter().map(|m| m.name).collect())
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[derive(Debug, Clone, Serialize)]
struct GenerateRequest {
    model: String,
    prompt: String,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
}

#[derive(Debug, Deserialize)]
struct TagsResponse {
    models: Vec<TagInfo>,
}

#[derive(Debug, Deserialize)]
struct TagInfo {
    name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_defaults() {
        let client = OllamaClient::new().unwrap();
        assert_eq!(client.model(), DEFAULT_MODEL);
        assert_eq!(client.base_url(), DEFAULT_OLLAMA_URL);
    }

    #[test]
    fn test_client_with_config_trims_slash() {
        let client = OllamaClient::with_config("http://localhost:8080/", "llama3:8b").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
        assert_eq!(client.model(), "llama3:8b");
    }

    #[tokio::test]
    async fn test_generate_against_closed_port_is_unavailable() {
        // Port 9 (discard) is essentially never listening locally
        let client = OllamaClient::with_config("http://127.0.0.1:9", "llama3.2:3b").unwrap();
        let err = client.generate("hello").await.unwrap_err();
        assert!(matches!(
            err,
            HealthPathError::ServiceUnavailable(_) | HealthPathError::Timeout { .. }
        ));
    }

    #[tokio::test]
    async fn test_health_check_against_closed_port_is_false() {
        let client = OllamaClient::with_config("http://127.0.0.1:9", "llama3.2:3b").unwrap();
        assert!(!client.health_check().await);
    }

    #[tokio::test]
    #[ignore] // Requires Ollama running
    async fn test_list_models_integration() {
        let client = OllamaClient::new().unwrap();
        assert!(client.list_models().await.is_ok());
    }
}
