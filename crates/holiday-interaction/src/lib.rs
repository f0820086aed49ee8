//! Conversation plumbing for Holiday.AI.
//!
//! ```text
//! user query → ChatSession::submit → Transcript (Human)
//!            → CompletionGateway::get_response → Transcript (Ai) → UI
//! ```
//!
//! [`OpenAIChatGateway`] is the production gateway; anything implementing
//! [`CompletionGateway`] can stand in for it.

pub mod gateway;
pub mod openai_gateway;
pub mod prompt;
pub mod session;

pub use gateway::{CompletionGateway, GatewayError, GatewayReply};
pub use openai_gateway::OpenAIChatGateway;
pub use prompt::{PromptBuilder, RequestMessage};
pub use session::ChatSession;
