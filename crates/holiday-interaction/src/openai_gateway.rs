//! OpenAIChatGateway - Chat Completions over plain REST.
//!
//! Configuration is resolved before construction (see `holiday-infrastructure`);
//! this module never reads the environment.

use crate::gateway::{CompletionGateway, GatewayError, GatewayReply, NO_RESPONSE_REPLY};
use crate::prompt::{PromptBuilder, RequestMessage};
use async_trait::async_trait;
use holiday_core::error::Result as HolidayResult;
use holiday_core::{GatewayConfig, Transcript};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

/// Gateway that talks to the OpenAI HTTP API.
///
/// One request per query: no timeout beyond the HTTP client's own, no
/// retries.
#[derive(Clone)]
pub struct OpenAIChatGateway {
    client: Client,
    config: GatewayConfig,
    prompts: PromptBuilder,
}

impl OpenAIChatGateway {
    pub fn new(config: GatewayConfig) -> HolidayResult<Self> {
        Ok(Self {
            client: Client::new(),
            config,
            prompts: PromptBuilder::new()?,
        })
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Runs one exchange. `Ok(None)` means the API answered with no choices.
    pub async fn complete(
        &self,
        query: &str,
        transcript: &Transcript,
    ) -> Result<Option<String>, GatewayError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(GatewayError::MissingCredential)?;

        let messages = self.prompts.build_messages(query, transcript)?;

        let request = ChatCompletionRequest {
            model: &self.config.model,
            messages: &messages,
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        self.send_request(api_key, &request).await
    }

    async fn send_request(
        &self,
        api_key: &str,
        body: &ChatCompletionRequest<'_>,
    ) -> Result<Option<String>, GatewayError> {
        tracing::debug!(
            endpoint = %self.config.endpoint,
            model = body.model,
            messages = body.messages.len(),
            "Sending chat completion request"
        );

        let response = self
            .client
            .post(&self.config.endpoint)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await?;

        let status = response.status();
        let body_text = check_status(status, response.text().await.map_err(GatewayError::from))?;
        tracing::debug!(status = status.as_u16(), "OpenAI response: {}", body_text);

        let parsed: ChatCompletionResponse =
            serde_json::from_str(&body_text).map_err(|e| GatewayError::Decode(e.to_string()))?;

        Ok(extract_text_response(parsed))
    }
}

#[async_trait]
impl CompletionGateway for OpenAIChatGateway {
    async fn get_response(&self, query: &str, transcript: &Transcript) -> GatewayReply {
        match self.complete(query, transcript).await {
            Ok(Some(content)) => {
                tracing::info!("Received reply ({} chars)", content.chars().count());
                GatewayReply::ok(content)
            }
            Ok(None) => {
                tracing::warn!("OpenAI returned no choices");
                GatewayReply::ok(NO_RESPONSE_REPLY)
            }
            Err(GatewayError::MissingCredential) => {
                tracing::error!("API key for OpenAI is not set; skipping request");
                GatewayError::MissingCredential.fallback_reply()
            }
            Err(err) => {
                tracing::error!("{}", err);
                err.fallback_reply()
            }
        }
    }
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [RequestMessage],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Option<Vec<Choice>>,
}

#[derive(Deserialize)]
struct Choice {
    #[serde(default)]
    message: ResponseMessage,
}

#[derive(Deserialize, Default)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Gives the body of a 200 response. Any other status becomes
/// `GatewayError::Status`, even when the body itself could not be read.
fn check_status(
    status: StatusCode,
    body: Result<String, GatewayError>,
) -> Result<String, GatewayError> {
    if status == StatusCode::OK {
        return body;
    }

    let body = body.unwrap_or_else(|e| format!("<unreadable body: {}>", e));
    Err(GatewayError::Status {
        status: status.as_u16(),
        body,
    })
}

/// First choice's text; a choice with null content reads as empty text.
fn extract_text_response(response: ChatCompletionResponse) -> Option<String> {
    response
        .choices
        .unwrap_or_default()
        .into_iter()
        .next()
        .map(|choice| choice.message.content.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> ChatCompletionResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_extract_first_choice() {
        let response = parse(
            r#"{"choices":[{"message":{"role":"assistant","content":"Try Lisbon."}},
                           {"message":{"role":"assistant","content":"Or Porto."}}]}"#,
        );
        assert_eq!(extract_text_response(response), Some("Try Lisbon.".to_string()));
    }

    #[test]
    fn test_empty_or_missing_choices() {
        assert_eq!(extract_text_response(parse(r#"{"choices":[]}"#)), None);
        assert_eq!(extract_text_response(parse(r#"{"id":"chatcmpl-1"}"#)), None);
        assert_eq!(extract_text_response(parse(r#"{"choices":null}"#)), None);
    }

    #[test]
    fn test_null_content_reads_as_empty() {
        let response = parse(r#"{"choices":[{"message":{"content":null}}]}"#);
        assert_eq!(extract_text_response(response), Some(String::new()));
    }

    #[test]
    fn test_check_status_passes_ok_body_through() {
        let body = check_status(StatusCode::OK, Ok("{}".to_string())).unwrap();
        assert_eq!(body, "{}");

        let err = check_status(StatusCode::OK, Err(GatewayError::Decode("eof".to_string())))
            .unwrap_err();
        assert!(matches!(err, GatewayError::Decode(_)));
    }

    #[test]
    fn test_check_status_keeps_status_when_body_is_unreadable() {
        let err = check_status(
            StatusCode::INTERNAL_SERVER_ERROR,
            Err(GatewayError::Decode("connection reset".to_string())),
        )
        .unwrap_err();

        match err {
            GatewayError::Status { status, body } => {
                assert_eq!(status, 500);
                assert!(body.contains("connection reset"));
            }
            other => panic!("Expected Status error, got {other:?}"),
        }
    }

    #[test]
    fn test_check_status_rejects_non_ok_with_body() {
        let err = check_status(StatusCode::NOT_FOUND, Ok("no such model".to_string()))
            .unwrap_err();
        assert!(matches!(
            err,
            GatewayError::Status { status: 404, ref body } if body == "no such model"
        ));
    }

    #[test]
    fn test_request_body_shape() {
        let messages = vec![RequestMessage::new(holiday_core::MessageRole::System, "sys")];
        let body = ChatCompletionRequest {
            model: "gpt-3.5-turbo-0125",
            messages: &messages,
            temperature: 0.0,
            max_tokens: 4095,
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "model": "gpt-3.5-turbo-0125",
                "messages": [{ "role": "system", "content": "sys" }],
                "temperature": 0.0,
                "max_tokens": 4095
            })
        );
    }
}
