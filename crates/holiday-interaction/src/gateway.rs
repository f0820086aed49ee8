use async_trait::async_trait;
use holiday_core::{HolidayError, Transcript};
use thiserror::Error;

pub const MISSING_CREDENTIAL_REPLY: &str = "API key is missing. Please check the .env file.";
pub const MISSING_CREDENTIAL_BANNER: &str = "API key for OpenAI is not set.";
pub const NO_RESPONSE_REPLY: &str = "No response from OpenAI.";
pub const API_ERROR_REPLY: &str = "Error fetching response from OpenAI. Please try again later.";
pub const NETWORK_ERROR_REPLY: &str = "Network error. Unable to connect to OpenAI.";
pub const NETWORK_ERROR_BANNER: &str =
    "Failed to connect to OpenAI API. Please check your network connection.";

/// What the UI shows for one submission.
///
/// `content` always becomes the next AI message. `banner` is set for the
/// failure branches and is meant to be displayed as an error notice next to
/// the conversation, not stored in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayReply {
    pub content: String,
    pub banner: Option<String>,
}

impl GatewayReply {
    pub fn ok(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            banner: None,
        }
    }

    pub fn with_banner(content: impl Into<String>, banner: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            banner: Some(banner.into()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.banner.is_some()
    }
}

/// Failures of a single completion exchange.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("OpenAI API key is not configured")]
    MissingCredential,

    #[error("OpenAI API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("OpenAI API error {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to parse OpenAI response: {0}")]
    Decode(String),

    #[error("Failed to build OpenAI request: {0}")]
    Prompt(#[from] HolidayError),
}

impl GatewayError {
    /// The reply that stands in for the model's answer.
    pub fn fallback_reply(&self) -> GatewayReply {
        match self {
            GatewayError::MissingCredential => {
                GatewayReply::with_banner(MISSING_CREDENTIAL_REPLY, MISSING_CREDENTIAL_BANNER)
            }
            GatewayError::Transport(_) | GatewayError::Decode(_) => {
                GatewayReply::with_banner(NETWORK_ERROR_REPLY, NETWORK_ERROR_BANNER)
            }
            GatewayError::Status { .. } | GatewayError::Prompt(_) => {
                GatewayReply::with_banner(API_ERROR_REPLY, self.to_string())
            }
        }
    }
}

/// Turns a query plus the conversation so far into display text.
///
/// Implementations never fail: every error is folded into a
/// [`GatewayReply`] so the conversation loop always has something to append.
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    /// `transcript` already ends with the human message for `query`.
    async fn get_response(&self, query: &str, transcript: &Transcript) -> GatewayReply;
}
