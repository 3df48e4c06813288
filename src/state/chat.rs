//! Conversation state for the retrieval-backed chat widget.
//!
//! DESIGN
//! ======
//! The transcript is append-only: turns are never edited, removed, or
//! reordered once pushed, and it lives only as long as the page view. The
//! phase enum doubles as the busy flag — `submit` refuses new questions
//! while one is awaiting its answer.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

/// Speaker of a conversation turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// One message in the conversation, tagged with its speaker.
#[derive(Clone, Debug, PartialEq)]
pub struct Turn {
    pub role: Role,
    pub text: String,
    /// Source documents cited by the backend; always empty for user turns.
    pub sources: Vec<String>,
}

/// Request lifecycle of the chat widget.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChatPhase {
    /// No question in flight; the input accepts a new submission.
    #[default]
    Idle,
    /// A question has been sent and its answer has not settled yet.
    AwaitingResponse,
}

/// Canned assistant reply used when a query request fails.
pub const FALLBACK_ANSWER: &str = "Sorry, I encountered an error retrieving that information.";

/// Conversation transcript plus request phase.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    turns: Vec<Turn>,
    phase: ChatPhase,
}

impl ChatState {
    /// Read-only view of the transcript, oldest turn first.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// True while a question is awaiting its answer.
    pub fn is_awaiting(&self) -> bool {
        self.phase == ChatPhase::AwaitingResponse
    }

    /// Accept a question for sending.
    ///
    /// Appends the user turn, enters [`ChatPhase::AwaitingResponse`], and
    /// returns the trimmed question the caller must send. Returns `None`
    /// without touching the transcript when the input is blank or a request
    /// is already in flight.
    pub fn submit(&mut self, raw: &str) -> Option<String> {
        if self.is_awaiting() {
            return None;
        }
        let question = raw.trim();
        if question.is_empty() {
            return None;
        }
        self.turns.push(Turn {
            role: Role::User,
            text: question.to_owned(),
            sources: Vec::new(),
        });
        self.phase = ChatPhase::AwaitingResponse;
        Some(question.to_owned())
    }

    /// Settle the in-flight question with the backend's answer.
    pub fn resolve(&mut self, answer: String, sources: Option<&str>) {
        self.turns.push(Turn {
            role: Role::Assistant,
            text: answer,
            sources: parse_sources(sources),
        });
        self.phase = ChatPhase::Idle;
    }

    /// Settle the in-flight question with the canned failure reply.
    pub fn resolve_error(&mut self) {
        self.resolve(FALLBACK_ANSWER.to_owned(), None);
    }
}

/// Split a comma-delimited sources string into trimmed, non-empty tokens.
///
/// `None` and blank strings yield an empty list.
pub fn parse_sources(raw: Option<&str>) -> Vec<String> {
    raw.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .collect()
}
