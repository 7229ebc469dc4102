//! Prompt templates for the tutoring chains.
//!
//! One template per chain operation. Templates receive pre-rendered context
//! (transcripts, quiz text, numbered answers) and produce the user prompt for
//! a single chat completion.

use crate::domain::tutor::{QuizAnswers, Subject};

/// Persona shared by every chain call.
pub(crate) const SYSTEM_PROMPT: &str = "You are a friendly tutor helping someone learn casually. \
     Keep a warm, conversational tone, explain things simply, and encourage curiosity.";

/// Placeholder used when a context slot has no content yet.
const NO_CONVERSATION: &str = "(no conversation yet)";

pub(crate) fn intro_prompt(subject: &Subject) -> String {
    format!(
        "Start an informal lesson about {subject}. Greet the learner, share a short, \
         enthusiastic overview of what makes {subject} fascinating, and invite them to \
         ask anything. Keep it under 150 words."
    )
}

pub(crate) fn quiz_prompt(subject: &Subject, prior_history: &str) -> String {
    format!(
        "Write a quiz of exactly 5 short questions about {subject}, numbered 1 to 5. \
         Favor material already touched on in the conversation; fill in with general \
         {subject} questions if needed. Output only the questions.\n\n\
         Conversation so far:\n{}",
        context_or_placeholder(prior_history)
    )
}

pub(crate) fn chat_reply_prompt(subject: &Subject, user_message: &str) -> String {
    format!(
        "The learner is studying {subject} and says:\n{user_message}\n\n\
         Reply conversationally. Stay on {subject} where you can, and gently steer \
         back to it if the question drifts."
    )
}

pub(crate) fn quiz_feedback_prompt(
    subject: &Subject,
    prior_history: &str,
    quiz: &str,
    answers: &QuizAnswers,
) -> String {
    format!(
        "The learner took a {subject} quiz. Go through it question by question: say \
         whether each answer is right, and give a one or two sentence explanation \
         either way.\n\n\
         Quiz:\n{quiz}\n\n\
         Their answers:\n{}\n\n\
         Conversation so far:\n{}",
        answers.numbered(),
        context_or_placeholder(prior_history)
    )
}

pub(crate) fn quiz_grade_prompt(subject: &Subject, feedback: &str) -> String {
    format!(
        "Based on this feedback for a 5-question {subject} quiz, state the score as \
         \"N out of 5\" followed by one short sentence of encouragement.\n\n\
         Feedback:\n{feedback}"
    )
}

pub(crate) fn continuation_prompt(
    subject: &Subject,
    feedback: &str,
    grade: &str,
    prior_history: &str,
) -> String {
    format!(
        "Pick the {subject} lesson back up. If there is quiz feedback below, briefly \
         acknowledge how the learner did and revisit anything they missed; otherwise \
         simply continue with a fresh angle on {subject}. End by inviting more \
         questions.\n\n\
         Quiz feedback:\n{}\n\n\
         Quiz grade:\n{}\n\n\
         Conversation so far:\n{}",
        context_or_placeholder(feedback),
        context_or_placeholder(grade),
        context_or_placeholder(prior_history)
    )
}

fn context_or_placeholder(context: &str) -> &str {
    if context.trim().is_empty() {
        NO_CONVERSATION
    } else {
        context
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subject() -> Subject {
        Subject::new("Astronomy").unwrap()
    }

    #[test]
    fn intro_prompt_names_subject() {
        let prompt = intro_prompt(&subject());
        assert!(prompt.contains("Astronomy"));
    }

    #[test]
    fn quiz_prompt_includes_history() {
        let prompt = quiz_prompt(&subject(), "Human: hi\nAI: hello");
        assert!(prompt.contains("Human: hi"));
        assert!(prompt.contains("exactly 5"));
    }

    #[test]
    fn quiz_prompt_marks_empty_history() {
        let prompt = quiz_prompt(&subject(), "");
        assert!(prompt.contains("(no conversation yet)"));
    }

    #[test]
    fn feedback_prompt_numbers_answers() {
        let answers = QuizAnswers::new(
            vec!["a", "b", "c", "d", "e"]
                .into_iter()
                .map(String::from)
                .collect(),
        )
        .unwrap();
        let prompt = quiz_feedback_prompt(&subject(), "", "Q1..Q5", &answers);
        assert!(prompt.contains("1. a"));
        assert!(prompt.contains("5. e"));
        assert!(prompt.contains("Q1..Q5"));
    }

    #[test]
    fn continuation_prompt_carries_feedback_and_grade() {
        let prompt = continuation_prompt(&subject(), "good work", "4 out of 5", "Human: x\nAI: y");
        assert!(prompt.contains("good work"));
        assert!(prompt.contains("4 out of 5"));
        assert!(prompt.contains("Human: x"));
    }
}
