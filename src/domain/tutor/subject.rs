//! Subject value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::SubjectError;

/// Topic around which tutoring content is generated.
///
/// # Invariants
///
/// - Never empty or all whitespace
/// - Immutable once constructed
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Subject(String);

impl Subject {
    /// Creates a subject from a topic name.
    ///
    /// Surrounding whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// - `Empty` if the name is empty or all whitespace
    pub fn new(name: impl Into<String>) -> Result<Self, SubjectError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(SubjectError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the topic name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_topic_name() {
        let subject = Subject::new("Astronomy").unwrap();
        assert_eq!(subject.as_str(), "Astronomy");
    }

    #[test]
    fn new_trims_whitespace() {
        let subject = Subject::new("  Botany  ").unwrap();
        assert_eq!(subject.as_str(), "Botany");
    }

    #[test]
    fn new_rejects_empty() {
        assert_eq!(Subject::new(""), Err(SubjectError::Empty));
    }

    #[test]
    fn new_rejects_whitespace_only() {
        assert_eq!(Subject::new("   "), Err(SubjectError::Empty));
    }

    #[test]
    fn display_shows_topic() {
        let subject = Subject::new("Astronomy").unwrap();
        assert_eq!(subject.to_string(), "Astronomy");
    }
}
