use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};

use super::stateless_llm_interface::{ChatMessage, LLMError, StatelessLLMInterface};

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
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

/// OpenAI compatible LLM implementation
/// Talks to `{base_url}/chat/completions` directly
pub struct OpenAICompatibleLLM {
    client: Client,
    model: String,
    base_url: String,
    api_key: String,
    organization_id: Option<String>,
    project_id: Option<String>,
    temperature: Option<f32>,
}

impl OpenAICompatibleLLM {
    pub fn new(
        client: Client,
        model: String,
        base_url: String,
        api_key: String,
        organization_id: Option<String>,
        project_id: Option<String>,
        temperature: Option<f32>,
    ) -> Self {
        info!(
            "Initialized OpenAICompatibleLLM: model={}, base_url={}",
            model, base_url
        );
        Self {
            client,
            model,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            organization_id,
            project_id,
            temperature,
        }
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

/// Pull a human readable message out of a failed provider response.
/// OpenAI style bodies look like `{"error": {"message": "..."}}`.
fn extract_error_message(status: reqwest::StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        let message = ["/error/message", "/error", "/message"]
            .iter()
            .filter_map(|pointer| value.pointer(pointer).and_then(|v| v.as_str()))
            .find(|s| !s.is_empty());
        if let Some(message) = message {
            return message.to_string();
        }
    }

    let trimmed = body.trim();
    if !trimmed.is_empty() {
        return trimmed.to_string();
    }

    status.to_string()
}

#[async_trait]
impl StatelessLLMInterface for OpenAICompatibleLLM {
    async fn chat_completion(
        &self,
        messages: Vec<ChatMessage>,
        system: Option<&str>,
    ) -> Result<String, LLMError> {
        let mut wire_messages = Vec::with_capacity(messages.len() + 1);
        if let Some(sys) = system {
            wire_messages.push(ChatMessage::system(sys));
        }
        wire_messages.extend(messages);

        let body = ChatCompletionRequest {
            model: &self.model,
            messages: wire_messages,
            temperature: self.temperature,
        };

        let url = self.completions_url();
        debug!("POST {} (model={})", url, self.model);

        let mut request = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body);
        if let Some(org) = &self.organization_id {
            request = request.header("OpenAI-Organization", org);
        }
        if let Some(project) = &self.project_id {
            request = request.header("OpenAI-Project", project);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = extract_error_message(status, &text);
            warn!("Completion API returned {}: {}", status, message);
            return Err(LLMError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let text = response.text().await?;
        let parsed: ChatCompletionResponse = serde_json::from_str(&text)
            .map_err(|e| LLMError::MalformedResponse(e.to_string()))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(LLMError::EmptyCompletion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        extract::State,
        http::{HeaderMap, StatusCode},
        routing::post,
        Json, Router,
    };
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured {
        body: Arc<Mutex<Option<Value>>>,
        auth: Arc<Mutex<Option<String>>>,
    }

    async fn spawn_mock(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}/v1", addr)
    }

    fn llm(base_url: String) -> OpenAICompatibleLLM {
        OpenAICompatibleLLM::new(
            Client::new(),
            "gpt-4o-mini".to_string(),
            base_url,
            "sk-test".to_string(),
            None,
            None,
            None,
        )
    }

    #[tokio::test]
    async fn returns_first_choice_and_sends_prompt() {
        let captured = Captured::default();
        let router = Router::new()
            .route(
                "/v1/chat/completions",
                post(
                    |State(captured): State<Captured>,
                     headers: HeaderMap,
                     Json(body): Json<Value>| async move {
                        *captured.auth.lock().unwrap() = headers
                            .get("authorization")
                            .and_then(|v| v.to_str().ok())
                            .map(String::from);
                        *captured.body.lock().unwrap() = Some(body);
                        Json(json!({
                            "choices": [
                                {"message": {"role": "assistant", "content": "Bonjour"}},
                                {"message": {"role": "assistant", "content": "Salut"}}
                            ]
                        }))
                    },
                ),
            )
            .with_state(captured.clone());
        let base_url = spawn_mock(router).await;

        let result = llm(base_url)
            .chat_completion(vec![ChatMessage::user("Hello")], Some("Be precise."))
            .await
            .unwrap();

        assert_eq!(result, "Bonjour");
        assert_eq!(
            captured.auth.lock().unwrap().as_deref(),
            Some("Bearer sk-test")
        );
        let body = captured.body.lock().unwrap().clone().unwrap();
        assert_eq!(body["model"], "gpt-4o-mini");
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][0]["content"], "Be precise.");
        assert_eq!(body["messages"][1]["role"], "user");
        assert_eq!(body["messages"][1]["content"], "Hello");
        assert!(body.get("temperature").is_none());
    }

    #[tokio::test]
    async fn maps_error_envelope_to_message() {
        let router = Router::new().route(
            "/v1/chat/completions",
            post(|| async {
                (
                    StatusCode::TOO_MANY_REQUESTS,
                    Json(json!({
                        "error": {
                            "message": "You exceeded your current quota",
                            "type": "insufficient_quota"
                        }
                    })),
                )
            }),
        );
        let base_url = spawn_mock(router).await;

        let err = llm(base_url)
            .chat_completion(vec![ChatMessage::user("Hello")], None)
            .await
            .unwrap_err();

        match err {
            LLMError::Api { status, message } => {
                assert_eq!(status, 429);
                assert_eq!(message, "You exceeded your current quota");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_choices_is_malformed() {
        let router = Router::new().route(
            "/v1/chat/completions",
            post(|| async { Json(json!({"object": "chat.completion"})) }),
        );
        let base_url = spawn_mock(router).await;

        let err = llm(base_url)
            .chat_completion(vec![ChatMessage::user("Hello")], None)
            .await
            .unwrap_err();

        assert!(matches!(err, LLMError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn empty_choices_is_empty_completion() {
        let router = Router::new().route(
            "/v1/chat/completions",
            post(|| async { Json(json!({"choices": []})) }),
        );
        let base_url = spawn_mock(router).await;

        let err = llm(base_url)
            .chat_completion(vec![ChatMessage::user("Hello")], None)
            .await
            .unwrap_err();

        assert!(matches!(err, LLMError::EmptyCompletion));
    }

    #[tokio::test]
    async fn unreachable_host_is_transport_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = llm(format!("http://{}/v1", addr))
            .chat_completion(vec![ChatMessage::user("Hello")], None)
            .await
            .unwrap_err();

        assert!(matches!(err, LLMError::Transport(_)));
    }

    #[test]
    fn error_message_falls_back_to_body_then_status() {
        let status = reqwest::StatusCode::BAD_GATEWAY;
        assert_eq!(extract_error_message(status, "upstream down"), "upstream down");
        assert_eq!(extract_error_message(status, "  "), "502 Bad Gateway");
        assert_eq!(
            extract_error_message(status, r#"{"error": "plain string"}"#),
            "plain string"
        );
    }
}
