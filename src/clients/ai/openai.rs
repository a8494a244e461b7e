use crate::clients::ai::CompletionClient;
use crate::config::{endpoint, Settings, COMPLETION_MODEL};
use crate::{AppError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Serialize)]
struct OpenAiRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct OpenAiResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

pub struct OpenAiClient {
    client: Client,
    api_key: String,
    url: String,
}

impl OpenAiClient {
    pub fn new(api_key: String, settings: &Settings) -> Result<Self> {
        if api_key.trim().is_empty() {
            return Err(AppError::Validation("LLM API key is empty".to_string()));
        }

        let client = Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key,
            url: endpoint(&settings.openai_api_base, "chat/completions"),
        })
    }

    async fn call_api(&self, system: &str, user: &str) -> Result<String> {
        let request = OpenAiRequest {
            model: COMPLETION_MODEL,
            messages: vec![
                Message {
                    role: "system",
                    content: system,
                },
                Message {
                    role: "user",
                    content: user,
                },
            ],
        };

        debug!("Sending completion request to {}", self.url);
        let response = self
            .client
            .post(&self.url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::CompletionApi(format!("OpenAI API request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::CompletionApi(format!(
                "OpenAI API returned {}: {}",
                status, error_text
            )));
        }

        let openai_response: OpenAiResponse = response
            .json()
            .await
            .map_err(|e| AppError::CompletionApi(format!("Failed to parse OpenAI response: {}", e)))?;

        openai_response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| AppError::CompletionApi("No content in OpenAI response".to_string()))
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(&self, system: &str, user: &str) -> Result<String> {
        self.call_api(system, user).await
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn client_for(server: &MockServer) -> OpenAiClient {
        let settings = Settings::for_base_url(&server.base_url(), false).unwrap();
        OpenAiClient::new("sk-test".to_string(), &settings).unwrap()
    }

    #[tokio::test]
    async fn complete_sends_two_messages_and_returns_first_choice() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/chat/completions")
                .header("authorization", "Bearer sk-test")
                .json_body(json!({
                    "model": "gpt-4",
                    "messages": [
                        {"role": "system", "content": "sys"},
                        {"role": "user", "content": "usr"}
                    ]
                }));
            then.status(200).json_body(json!({
                "choices": [
                    {"message": {"role": "assistant", "content": "<article>Hi</article>"}},
                    {"message": {"role": "assistant", "content": "ignored"}}
                ]
            }));
        });

        let reply = client_for(&server).complete("sys", "usr").await.unwrap();

        assert_eq!(reply, "<article>Hi</article>");
        mock.assert();
    }

    #[tokio::test]
    async fn complete_does_not_retry_server_errors() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST).path("/chat/completions");
            then.status(500).body("boom");
        });

        let err = client_for(&server).complete("sys", "usr").await.unwrap_err();

        assert!(matches!(err, AppError::CompletionApi(ref msg) if msg.contains("boom")));
        mock.assert_calls(1);
    }

    #[tokio::test]
    async fn complete_fails_on_empty_choices() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/chat/completions");
            then.status(200).json_body(json!({ "choices": [] }));
        });

        let err = client_for(&server).complete("sys", "usr").await.unwrap_err();
        assert!(matches!(err, AppError::CompletionApi(_)));
    }

    #[test]
    fn new_rejects_blank_key() {
        let settings = Settings::for_base_url("http://127.0.0.1:1", false).unwrap();
        assert!(OpenAiClient::new("  ".to_string(), &settings).is_err());
    }
}
