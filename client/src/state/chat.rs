#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use messages::{Message, SenderKind};

/// One rendered log entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatEntry {
    pub sender: String,
    pub text: String,
}

impl ChatEntry {
    /// Label shown for this entry in the log.
    #[must_use]
    pub fn display_label(&self) -> &str {
        messages::display_label(&self.sender)
    }

    /// Styling class for this entry, chosen by sender classification.
    #[must_use]
    pub fn style_class(&self) -> &'static str {
        SenderKind::classify(&self.sender).style_class()
    }
}

impl From<Message> for ChatEntry {
    fn from(message: Message) -> Self {
        Self { sender: message.sender, text: message.text }
    }
}

/// State for the chat widget: the rendered log, in arrival order.
///
/// Entries are never stored anywhere else; the log IS the history.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub entries: Vec<ChatEntry>,
}

impl ChatState {
    /// Append one message to the log.
    pub fn apply_inbound(&mut self, message: Message) {
        self.entries.push(ChatEntry::from(message));
    }
}

/// Build the outbound message for the current input, if any.
///
/// The input is trimmed; whitespace-only input yields `None`, making the
/// send operation a silent no-op.
#[must_use]
pub fn prepare_outbound(input: &str) -> Option<Message> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(Message::from_human(trimmed))
}
