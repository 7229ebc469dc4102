//! Conversation history accumulator.
//!
//! The history is an ordered record of exchanges between the learner and the
//! tutor. Chain calls receive it rendered as a transcript; nothing in this
//! layer interprets the contents.

use serde::{Deserialize, Serialize};

/// One exchange: what the learner said and what the tutor replied.
///
/// Tutor-initiated messages (intro, continuation) carry an empty user input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    user_input: String,
    tutor_output: String,
}

impl Turn {
    /// Returns the learner's side of the exchange.
    pub fn user_input(&self) -> &str {
        &self.user_input
    }

    /// Returns the tutor's side of the exchange.
    pub fn tutor_output(&self) -> &str {
        &self.tutor_output
    }
}

/// Ordered list of conversation turns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ConversationHistory {
    turns: Vec<Turn>,
}

impl ConversationHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one exchange to the history.
    pub fn record_turn(&mut self, user_input: impl Into<String>, tutor_output: impl Into<String>) {
        self.turns.push(Turn {
            user_input: user_input.into(),
            tutor_output: tutor_output.into(),
        });
    }

    /// Returns the recorded turns, oldest first.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Returns the number of recorded turns.
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Returns true if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Renders the history as a `Human:`/`AI:` transcript for chain prompts.
    ///
    /// Empty history renders as an empty string.
    pub fn transcript(&self) -> String {
        let mut lines = Vec::with_capacity(self.turns.len() * 2);
        for turn in &self.turns {
            lines.push(format!("Human: {}", turn.user_input));
            lines.push(format!("AI: {}", turn.tutor_output));
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_history_is_empty() {
        let history = ConversationHistory::new();
        assert!(history.is_empty());
        assert_eq!(history.len(), 0);
        assert_eq!(history.transcript(), "");
    }

    #[test]
    fn record_turn_appends_in_order() {
        let mut history = ConversationHistory::new();
        history.record_turn("hello", "hi there");
        history.record_turn("tell me more", "gladly");

        assert_eq!(history.len(), 2);
        assert_eq!(history.turns()[0].user_input(), "hello");
        assert_eq!(history.turns()[1].tutor_output(), "gladly");
    }

    #[test]
    fn transcript_renders_human_ai_lines() {
        let mut history = ConversationHistory::new();
        history.record_turn("what is a star?", "A star is a ball of plasma.");

        assert_eq!(
            history.transcript(),
            "Human: what is a star?\nAI: A star is a ball of plasma."
        );
    }

    #[test]
    fn transcript_keeps_empty_user_input() {
        let mut history = ConversationHistory::new();
        history.record_turn("", "Welcome to the lesson!");

        assert_eq!(history.transcript(), "Human: \nAI: Welcome to the lesson!");
    }

    #[test]
    fn transcript_joins_turns_with_newlines() {
        let mut history = ConversationHistory::new();
        history.record_turn("a", "b");
        history.record_turn("c", "d");

        assert_eq!(history.transcript(), "Human: a\nAI: b\nHuman: c\nAI: d");
    }
}
