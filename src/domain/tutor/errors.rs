//! Tutor domain error types.

use thiserror::Error;

/// Errors from invalid quiz cycle transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizStateError {
    /// No quiz has been issued yet.
    #[error("No quiz has been started")]
    NotStarted,

    /// A grade was recorded without a preceding submission.
    #[error("No submission is awaiting a grade")]
    NoPendingSubmission,
}

/// Errors from constructing a quiz answer set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnswersError {
    /// The submitted value was not a list.
    #[error("answers must be a list")]
    NotAList,

    /// The list did not contain the expected number of answers.
    #[error("expected exactly {expected} answers, got {actual}")]
    WrongCount { expected: usize, actual: usize },
}

/// Errors from constructing a subject.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubjectError {
    /// The subject string was empty or all whitespace.
    #[error("subject cannot be empty")]
    Empty,
}
