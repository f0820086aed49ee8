pub mod config;
pub mod error;
pub mod message;
pub mod transcript;

// Re-export common types
pub use config::{AppConfig, GatewayConfig, GatewaySettings, OpenAIConfig, SecretConfig};
pub use error::HolidayError;
pub use message::{ChatMessage, MessageRole};
pub use transcript::Transcript;
