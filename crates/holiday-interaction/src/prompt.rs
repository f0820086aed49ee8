//! Request message construction.
//!
//! The request replays the transcript with re-derived roles and then adds
//! one more user turn: the travel-assistant instructions with the whole
//! conversation flattened into `chat_history`. The history therefore reaches
//! the model twice. That duplication is deliberate and kept as-is.

use holiday_core::error::Result;
use holiday_core::{HolidayError, MessageRole, Transcript};
use minijinja::{Environment, context};
use serde::Serialize;

/// System instruction that opens every request.
pub const SYSTEM_PROMPT: &str = "You are a helpful travel assistant named Holiday.AI.";

const TEMPLATE_NAME: &str = "travel_assistant";

const TRAVEL_ASSISTANT_TEMPLATE: &str = r#"
You are a travel assistant chatbot your name is Yatra Sevak.AI designed to help users plan their trips and provide travel-related information. Here are some scenarios you should be able to handle:

1. Booking Flights: Assist users with booking flights to their desired destinations. Ask for departure city, destination city, travel dates, and any specific preferences (e.g., direct flights, airline preferences). Check available airlines and book the tickets accordingly.
2. Booking Hotels: Help users find and book accommodations. Inquire about city or region, check-in/check-out dates, number of guests, and accommodation preferences (e.g., budget, amenities).
3. Booking Rental Cars: Facilitate the booking of rental cars for travel convenience. Gather details such as pickup/drop-off locations, dates, car preferences (e.g., size, type), and any additional requirements.
4. Destination Information: Provide information about popular travel destinations. Offer insights on attractions, local cuisine, cultural highlights, weather conditions, and best times to visit.
5. Travel Tips: Offer practical travel tips and advice. Topics may include packing essentials, visa requirements, currency exchange, local customs, and safety tips.
6. Weather Updates: Give current weather updates for specific destinations or regions. Include temperature forecasts, precipitation chances, and any weather advisories.
7. Local Attractions: Suggest local attractions and points of interest based on the user's destination. Highlight must-see landmarks, museums, parks, and recreational activities.
8. Customer Service: Address customer service inquiries and provide assistance with travel-related issues. Handle queries about bookings, cancellations, refunds, and general support.

Please ensure responses are informative, accurate, and tailored to the user's queries and preferences. Use natural language to engage users and provide a seamless experience throughout their travel planning journey.

Chat history: {{ chat_history }}
User question: {{ user_question }}
"#;

/// One role/content pair of a Chat Completions request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestMessage {
    pub role: MessageRole,
    pub content: String,
}

impl RequestMessage {
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// Renders the request message list for a query.
#[derive(Clone)]
pub struct PromptBuilder {
    env: Environment<'static>,
}

impl PromptBuilder {
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.add_template(TEMPLATE_NAME, TRAVEL_ASSISTANT_TEMPLATE)
            .map_err(|e| HolidayError::template(e.to_string()))?;
        Ok(Self { env })
    }

    /// Builds the full message list sent to the completion endpoint.
    ///
    /// `transcript` is expected to already contain `query` as its last
    /// entry; the session appends before asking the gateway.
    pub fn build_messages(&self, query: &str, transcript: &Transcript) -> Result<Vec<RequestMessage>> {
        let mut messages = Vec::with_capacity(transcript.len() + 2);
        messages.push(RequestMessage::new(MessageRole::System, SYSTEM_PROMPT));

        for message in transcript {
            messages.push(RequestMessage::new(message.role(), message.content()));
        }

        let chat_history = messages
            .iter()
            .map(|m| m.content.as_str())
            .collect::<Vec<_>>()
            .join("\n");

        let instruction = self.render_instruction(&chat_history, query)?;
        messages.push(RequestMessage::new(MessageRole::User, instruction));

        Ok(messages)
    }

    fn render_instruction(&self, chat_history: &str, user_question: &str) -> Result<String> {
        let template = self
            .env
            .get_template(TEMPLATE_NAME)
            .map_err(|e| HolidayError::template(e.to_string()))?;
        template
            .render(context! {
                chat_history => chat_history,
                user_question => user_question,
            })
            .map_err(|e| HolidayError::template(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use holiday_core::ChatMessage;
    use holiday_core::transcript::GREETING;

    fn transcript_with(query: &str) -> Transcript {
        let mut transcript = Transcript::new();
        transcript.append(ChatMessage::human(query));
        transcript
    }

    #[test]
    fn test_system_prompt_comes_first() {
        let builder = PromptBuilder::new().unwrap();
        let messages = builder
            .build_messages("Hi", &transcript_with("Hi"))
            .unwrap();

        assert_eq!(messages[0], RequestMessage::new(MessageRole::System, SYSTEM_PROMPT));
    }

    #[test]
    fn test_roles_follow_transcript_variants() {
        let builder = PromptBuilder::new().unwrap();
        let mut transcript = transcript_with("Flights to Goa?");
        transcript.append(ChatMessage::ai("When do you want to travel?"));
        transcript.append(ChatMessage::human("Next Friday"));

        let messages = builder.build_messages("Next Friday", &transcript).unwrap();

        let roles: Vec<MessageRole> = messages.iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            vec![
                MessageRole::System,
                MessageRole::Assistant,
                MessageRole::User,
                MessageRole::Assistant,
                MessageRole::User,
                MessageRole::User,
            ]
        );
        assert_eq!(messages[1].content, GREETING);
        assert_eq!(messages[4].content, "Next Friday");
    }

    #[test]
    fn test_instruction_embeds_flattened_history_and_question() {
        let builder = PromptBuilder::new().unwrap();
        let messages = builder
            .build_messages("Best time to visit Kyoto?", &transcript_with("Best time to visit Kyoto?"))
            .unwrap();

        let instruction = &messages.last().unwrap().content;
        let expected_history = format!("{SYSTEM_PROMPT}\n{GREETING}\nBest time to visit Kyoto?");

        assert!(instruction.starts_with("\nYou are a travel assistant chatbot"));
        assert!(instruction.contains(&format!("Chat history: {expected_history}\n")));
        assert!(instruction.ends_with("User question: Best time to visit Kyoto?\n"));
    }

    #[test]
    fn test_user_text_is_not_escaped() {
        let builder = PromptBuilder::new().unwrap();
        let query = "Hotels <under> $100 & \"near\" the beach";
        let messages = builder.build_messages(query, &transcript_with(query)).unwrap();

        assert!(messages.last().unwrap().content.contains(query));
    }

    #[test]
    fn test_request_message_serializes_lowercase_role() {
        let json = serde_json::to_value(RequestMessage::new(MessageRole::Assistant, "ok")).unwrap();
        assert_eq!(json, serde_json::json!({ "role": "assistant", "content": "ok" }));
    }
}
