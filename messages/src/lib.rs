//! Shared message model and JSON codec for the chat wire protocol.
//!
//! This crate owns the wire representation used by both `server` and
//! `client`. Frames in both directions are UTF-8 JSON text carrying exactly
//! two string fields, so the codec is a thin layer over `serde_json`. The
//! sender-classification table lives here too: the widget uses it to pick a
//! styling class, the relay uses it for structured logging.

use serde::{Deserialize, Serialize};

/// Sender label stamped on messages originating from the local human user.
pub const HUMAN_SENDER: &str = "human";

/// Friendly label shown in place of the raw human sender label.
pub const HUMAN_DISPLAY: &str = "You";

/// Error returned by [`decode_message`].
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The payload was not a JSON object carrying `sender` and `text`.
    #[error("failed to decode message frame: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A single message on the chat wire protocol.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Short label identifying the originating party.
    pub sender: String,
    /// Message body, treated as opaque display content.
    pub text: String,
}

impl Message {
    /// Construct a message originating from the local human user.
    #[must_use]
    pub fn from_human(text: impl Into<String>) -> Self {
        Self { sender: HUMAN_SENDER.to_owned(), text: text.into() }
    }

    /// Classification of this message's sender label.
    #[must_use]
    pub fn sender_kind(&self) -> SenderKind {
        SenderKind::classify(&self.sender)
    }
}

/// Encode a message into a JSON text frame.
#[must_use]
pub fn encode_message(message: &Message) -> String {
    // A struct of two plain strings cannot fail to serialize.
    serde_json::to_string(message).unwrap_or_default()
}

/// Decode a JSON text frame into a message.
///
/// # Errors
///
/// Returns [`CodecError::Decode`] for payloads that are not valid JSON or do
/// not carry both string fields.
pub fn decode_message(text: &str) -> Result<Message, CodecError> {
    Ok(serde_json::from_str(text)?)
}

// =============================================================================
// SENDER CLASSIFICATION
// =============================================================================

/// Identity classification of a sender label.
///
/// Lookup is case-insensitive against a fixed table; any label not in the
/// table falls into the generic [`SenderKind::Agent`] bucket.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SenderKind {
    /// The local human user.
    Human,
    /// The Cascade agent.
    Cascade,
    /// The Roo Code agent.
    RooCode,
    /// Any other named agent.
    Agent,
}

const KNOWN_SENDERS: [(&str, SenderKind); 3] = [
    (HUMAN_SENDER, SenderKind::Human),
    ("cascade", SenderKind::Cascade),
    ("roo-code", SenderKind::RooCode),
];

impl SenderKind {
    /// Classify a sender label, ignoring ASCII case.
    #[must_use]
    pub fn classify(sender: &str) -> Self {
        KNOWN_SENDERS
            .iter()
            .find(|(label, _)| sender.eq_ignore_ascii_case(label))
            .map_or(Self::Agent, |&(_, kind)| kind)
    }

    /// Styling class applied to log entries from this kind of sender.
    #[must_use]
    pub fn style_class(self) -> &'static str {
        match self {
            Self::Human => "user-message",
            Self::Cascade => "cascade-message",
            Self::RooCode => "roo-message",
            Self::Agent => "agent-message",
        }
    }
}

/// Label shown for a sender in the log.
///
/// The human user's label is replaced with [`HUMAN_DISPLAY`]; every other
/// sender displays its raw label.
#[must_use]
pub fn display_label(sender: &str) -> &str {
    if SenderKind::classify(sender) == SenderKind::Human {
        HUMAN_DISPLAY
    } else {
        sender
    }
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
