use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{common::entities::app_errors::CoreError, generation::ports::LLMClient};

/// Non-streaming client for a local Ollama server's chat endpoint.
#[derive(Debug, Clone)]
pub struct OllamaLLMClient {
    base_url: String,
    model_name: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct OllamaChatRequest<'a> {
    model: &'a str,
    messages: Vec<Message>,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct Message {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct OllamaChatResponse {
    message: Option<MessageResponse>,
}

#[derive(Debug, Deserialize)]
struct MessageResponse {
    content: String,
}

impl OllamaLLMClient {
    pub fn new(
        base_url: String,
        model_name: String,
        request_timeout: Option<Duration>,
    ) -> Result<Self, CoreError> {
        let mut builder = Client::builder();
        if let Some(timeout) = request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| {
            CoreError::ExternalServiceError(format!("Failed to build LLM client: {}", e))
        })?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            model_name,
            client,
        })
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn call_ollama_api(&self, request: OllamaChatRequest<'_>) -> Result<String, CoreError> {
        let url = format!("{}/api/chat", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Ollama API request failed: {}", e);
                CoreError::ExternalServiceError(format!("LLM API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Ollama API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "LLM API returned error: {} - {}",
                status, error_text
            )));
        }

        let ollama_response: OllamaChatResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Ollama response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })?;

        ollama_response
            .message
            .map(|m| m.content)
            .ok_or_else(|| CoreError::ExternalServiceError("No response from LLM".to_string()))
    }
}

impl LLMClient for OllamaLLMClient {
    async fn generate_with_text(&self, prompt: String) -> Result<String, CoreError> {
        let request = OllamaChatRequest {
            model: &self.model_name,
            messages: vec![Message {
                role: "user",
                content: prompt,
            }],
            stream: false,
        };

        self.call_ollama_api(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let request = OllamaChatRequest {
            model: "mistral",
            messages: vec![Message {
                role: "user",
                content: "hi".to_string(),
            }],
            stream: false,
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({
                "model": "mistral",
                "messages": [{ "role": "user", "content": "hi" }],
                "stream": false
            })
        );
    }

    #[test]
    fn test_response_without_message_is_tolerated() {
        let parsed: OllamaChatResponse =
            serde_json::from_str(r#"{"model": "mistral", "done": true}"#).unwrap();
        assert!(parsed.message.is_none());
    }

    #[tokio::test]
    async fn test_unreachable_server_is_an_external_error() {
        let client = OllamaLLMClient::new(
            "http://127.0.0.1:9/".to_string(),
            "mistral".to_string(),
            Some(Duration::from_secs(5)),
        )
        .unwrap();
        assert_eq!(client.model_name(), "mistral");

        let result = client.generate_with_text("hello".to_string()).await;
        assert!(matches!(result, Err(CoreError::ExternalServiceError(_))));
    }
}
