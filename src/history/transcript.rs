use super::types::ChatTurn;
use tracing::debug;

/// Append-only record of one session's turns, in submission order.
#[derive(Debug, Clone, Default)]
pub struct SessionTranscript {
    turns: Vec<ChatTurn>,
}

impl SessionTranscript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, turn: ChatTurn) {
        debug!(
            "Appending {} turn #{} to transcript",
            turn.role(),
            self.turns.len() + 1
        );
        self.turns.push(turn);
    }

    pub fn all(&self) -> &[ChatTurn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn last(&self) -> Option<&ChatTurn> {
        self.turns.last()
    }
}
