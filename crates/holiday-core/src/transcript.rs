use crate::message::ChatMessage;

/// Greeting every new transcript starts with.
pub const GREETING: &str = "Hello, I am Holiday.AI. How can I help you?";

/// The ordered record of one chat session.
///
/// `Transcript` is append-only: entries are never removed or edited, and
/// there is no size cap, so it grows for as long as the session lives.
/// A fresh transcript always holds exactly one entry, the AI greeting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    /// Creates a transcript seeded with the standard greeting.
    ///
    /// # Examples
    ///
    /// ```
    /// use holiday_core::Transcript;
    ///
    /// let transcript = Transcript::new();
    /// assert_eq!(transcript.len(), 1);
    /// ```
    pub fn new() -> Self {
        Self::with_greeting(GREETING)
    }

    /// Creates a transcript seeded with a custom AI greeting.
    pub fn with_greeting(greeting: impl Into<String>) -> Self {
        Self {
            messages: vec![ChatMessage::ai(greeting)],
        }
    }

    /// Adds a message to the end of the transcript.
    pub fn append(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    /// All messages in submission order.
    pub fn all(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ChatMessage> {
        self.messages.iter()
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a Transcript {
    type Item = &'a ChatMessage;
    type IntoIter = std::slice::Iter<'a, ChatMessage>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_transcript_is_seeded_with_greeting() {
        let transcript = Transcript::new();

        assert_eq!(transcript.len(), 1);
        assert!(!transcript.is_empty());
        assert_eq!(transcript.all()[0], ChatMessage::ai(GREETING));
    }

    #[test]
    fn test_append_preserves_order() {
        let mut transcript = Transcript::new();
        transcript.append(ChatMessage::human("Book me a flight to Rome"));
        transcript.append(ChatMessage::ai("From which city?"));
        transcript.append(ChatMessage::human("Berlin"));

        let contents: Vec<&str> = transcript.iter().map(ChatMessage::content).collect();
        assert_eq!(
            contents,
            vec![
                GREETING,
                "Book me a flight to Rome",
                "From which city?",
                "Berlin"
            ]
        );
        assert_eq!(transcript.last(), Some(&ChatMessage::human("Berlin")));
    }

    #[test]
    fn test_custom_greeting() {
        let transcript = Transcript::with_greeting("Namaste!");
        assert_eq!(transcript.all(), &[ChatMessage::ai("Namaste!")]);
    }

    #[test]
    fn test_grows_without_cap() {
        let mut transcript = Transcript::default();
        for i in 0..1_000 {
            transcript.append(ChatMessage::human(format!("message {i}")));
        }
        assert_eq!(transcript.len(), 1_001);
    }
}
