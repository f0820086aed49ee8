use crate::gateway::{CompletionGateway, GatewayReply};
use holiday_core::{ChatMessage, Transcript};

/// One user's conversation: a transcript plus the gateway that answers it.
///
/// Each [`submit`](ChatSession::submit) appends exactly one human message
/// and exactly one AI message, so after N submissions the transcript holds
/// `1 + 2N` entries (the greeting included).
pub struct ChatSession<G> {
    transcript: Transcript,
    gateway: G,
}

impl<G: CompletionGateway> ChatSession<G> {
    pub fn new(gateway: G) -> Self {
        Self::with_transcript(gateway, Transcript::new())
    }

    pub fn with_transcript(gateway: G, transcript: Transcript) -> Self {
        Self {
            transcript,
            gateway,
        }
    }

    /// Records the query, waits for the gateway, and records its reply.
    ///
    /// The returned reply carries the optional error banner for the UI.
    pub async fn submit(&mut self, query: impl Into<String>) -> GatewayReply {
        let query = query.into();
        self.transcript.append(ChatMessage::human(query.as_str()));

        let reply = self.gateway.get_response(&query, &self.transcript).await;
        if let Some(banner) = &reply.banner {
            tracing::warn!("Submission finished with error banner: {}", banner);
        }

        self.transcript.append(ChatMessage::ai(reply.content.as_str()));
        reply
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }
}
