//! Quiz cycle state machine and answer container.

use serde::{Deserialize, Serialize};

use super::errors::{AnswersError, QuizStateError};

/// Number of questions in a generated quiz, and of answers in a submission.
pub const ANSWER_COUNT: usize = 5;

/// Progress of the current quiz through its lifecycle.
///
/// Transitions:
///
/// ```text
/// NotStarted -> Issued -> Submitted -> Graded
/// ```
///
/// Issuing a new quiz is allowed from any state and discards prior progress.
/// Feedback may be re-recorded for an already submitted or graded quiz (the
/// learner can submit the same quiz again); a grade requires a pending
/// submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QuizCycle {
    /// No quiz exists yet.
    #[default]
    NotStarted,
    /// A quiz was generated and handed to the learner.
    Issued { quiz: String },
    /// Answers came back and feedback was produced; grading is pending.
    Submitted { quiz: String, feedback: String },
    /// Feedback and grade are both recorded.
    Graded {
        quiz: String,
        feedback: String,
        grade: String,
    },
}

impl QuizCycle {
    /// Replaces the current quiz with a freshly generated one.
    ///
    /// Any prior quiz, feedback, and grade are discarded.
    pub fn issue(&mut self, quiz: impl Into<String>) {
        *self = QuizCycle::Issued { quiz: quiz.into() };
    }

    /// Records feedback for a submission against the current quiz.
    ///
    /// # Errors
    ///
    /// - `NotStarted` if no quiz has been issued
    pub fn record_feedback(&mut self, feedback: impl Into<String>) -> Result<(), QuizStateError> {
        match std::mem::take(self) {
            QuizCycle::NotStarted => Err(QuizStateError::NotStarted),
            QuizCycle::Issued { quiz }
            | QuizCycle::Submitted { quiz, .. }
            | QuizCycle::Graded { quiz, .. } => {
                *self = QuizCycle::Submitted {
                    quiz,
                    feedback: feedback.into(),
                };
                Ok(())
            }
        }
    }

    /// Records the grade for the pending submission.
    ///
    /// # Errors
    ///
    /// - `NoPendingSubmission` unless feedback was just recorded
    pub fn record_grade(&mut self, grade: impl Into<String>) -> Result<(), QuizStateError> {
        match std::mem::take(self) {
            QuizCycle::Submitted { quiz, feedback } => {
                *self = QuizCycle::Graded {
                    quiz,
                    feedback,
                    grade: grade.into(),
                };
                Ok(())
            }
            other => {
                *self = other;
                Err(QuizStateError::NoPendingSubmission)
            }
        }
    }

    /// Returns true once a quiz has been issued.
    pub fn has_quiz(&self) -> bool {
        !matches!(self, QuizCycle::NotStarted)
    }

    /// Returns the text of the current quiz, or `""` if none was issued.
    pub fn quiz_text(&self) -> &str {
        match self {
            QuizCycle::NotStarted => "",
            QuizCycle::Issued { quiz }
            | QuizCycle::Submitted { quiz, .. }
            | QuizCycle::Graded { quiz, .. } => quiz,
        }
    }

    /// Returns the recorded feedback, or `""` if none exists.
    pub fn feedback(&self) -> &str {
        match self {
            QuizCycle::Submitted { feedback, .. } | QuizCycle::Graded { feedback, .. } => feedback,
            _ => "",
        }
    }

    /// Returns the recorded grade, or `""` if none exists.
    pub fn grade(&self) -> &str {
        match self {
            QuizCycle::Graded { grade, .. } => grade,
            _ => "",
        }
    }
}

/// Ordered set of exactly [`ANSWER_COUNT`] answer strings.
///
/// Only the container shape is validated; answer content is passed through
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizAnswers(Vec<String>);

impl QuizAnswers {
    /// Creates an answer set from a list of strings.
    ///
    /// # Errors
    ///
    /// - `WrongCount` if the list does not hold exactly [`ANSWER_COUNT`] entries
    pub fn new(answers: Vec<String>) -> Result<Self, AnswersError> {
        if answers.len() != ANSWER_COUNT {
            return Err(AnswersError::WrongCount {
                expected: ANSWER_COUNT,
                actual: answers.len(),
            });
        }
        Ok(Self(answers))
    }

    /// Creates an answer set from a decoded JSON value.
    ///
    /// Non-string elements are rendered to their JSON text form rather than
    /// rejected.
    ///
    /// # Errors
    ///
    /// - `NotAList` if the value is not an array
    /// - `WrongCount` if the array does not hold exactly [`ANSWER_COUNT`] entries
    pub fn from_json(value: &serde_json::Value) -> Result<Self, AnswersError> {
        let items = value.as_array().ok_or(AnswersError::NotAList)?;
        let answers = items
            .iter()
            .map(|item| match item.as_str() {
                Some(text) => text.to_string(),
                None => item.to_string(),
            })
            .collect();
        Self::new(answers)
    }

    /// Returns the answers in submission order.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Renders the answers as numbered lines for chain prompts.
    pub fn numbered(&self) -> String {
        self.0
            .iter()
            .enumerate()
            .map(|(i, answer)| format!("{}. {}", i + 1, answer))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
