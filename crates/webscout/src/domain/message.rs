//! Conversation Messages
//!
//! Minimal view of the host runtime's conversation state: enough to pick the
//! message an action should treat as its effective input.

use serde::{Deserialize, Serialize};

/// Who produced a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Agent,
}

/// One message in the recent conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationMessage {
    pub sender: Sender,
    pub text: String,
}

impl ConversationMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
        }
    }

    pub fn agent(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Agent,
            text: text.into(),
        }
    }
}

/// Strategy for picking the effective query message out of the conversation.
///
/// The source material carries two competing heuristics with no clear winner,
/// so the choice is explicit and injectable rather than baked in. See
/// DESIGN.md for the default and the trade-off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QuerySource {
    /// The most recent message, whoever sent it
    #[default]
    LastMessage,
    /// The first agent message after the last user message
    FirstAgentAfterLastUser,
}

/// Recent conversation supplied by the host runtime, oldest first
#[derive(Debug, Clone, Default)]
pub struct MessageContext {
    pub messages: Vec<ConversationMessage>,
}

impl MessageContext {
    pub fn new(messages: Vec<ConversationMessage>) -> Self {
        Self { messages }
    }

    /// Pick the message text an action should operate on.
    pub fn effective_query(&self, source: QuerySource) -> Option<&str> {
        match source {
            QuerySource::LastMessage => {
                self.messages.last().map(|m| m.text.as_str())
            }
            QuerySource::FirstAgentAfterLastUser => {
                let last_user = self
                    .messages
                    .iter()
                    .rposition(|m| m.sender == Sender::User)?;
                self.messages[last_user + 1..]
                    .iter()
                    .find(|m| m.sender == Sender::Agent)
                    .map(|m| m.text.as_str())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> MessageContext {
        MessageContext::new(vec![
            ConversationMessage::user("find news about SpaceX"),
            ConversationMessage::agent("Looking up SpaceX news"),
            ConversationMessage::agent("Here is what I found earlier"),
        ])
    }

    #[test]
    fn last_message_picks_most_recent() {
        let ctx = context();
        assert_eq!(
            ctx.effective_query(QuerySource::LastMessage),
            Some("Here is what I found earlier")
        );
    }

    // The two heuristics disagree on purpose: the source material never
    // settled on one, so both stay available and callers choose.
    #[test]
    fn first_agent_after_last_user_differs_from_last_message() {
        let ctx = context();
        assert_eq!(
            ctx.effective_query(QuerySource::FirstAgentAfterLastUser),
            Some("Looking up SpaceX news")
        );
        assert_ne!(
            ctx.effective_query(QuerySource::FirstAgentAfterLastUser),
            ctx.effective_query(QuerySource::LastMessage)
        );
    }

    #[test]
    fn empty_context_yields_none() {
        let ctx = MessageContext::default();
        assert_eq!(ctx.effective_query(QuerySource::LastMessage), None);
        assert_eq!(ctx.effective_query(QuerySource::FirstAgentAfterLastUser), None);
    }

    #[test]
    fn no_agent_reply_after_user_yields_none() {
        let ctx = MessageContext::new(vec![
            ConversationMessage::agent("hello"),
            ConversationMessage::user("find news"),
        ]);
        assert_eq!(ctx.effective_query(QuerySource::FirstAgentAfterLastUser), None);
        assert_eq!(ctx.effective_query(QuerySource::LastMessage), Some("find news"));
    }
}
