//! Tutoring configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Tutoring configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TutorConfig {
    /// Subject used when no per-request subject applies
    #[serde(default = "default_subject")]
    pub default_subject: String,

    /// How the subject for a request is determined
    #[serde(default = "default_resolution")]
    pub subject_resolution: SubjectResolution,
}

/// Strategy for resolving the tutoring subject of a request
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SubjectResolution {
    /// Read the `subject` query parameter, falling back to the default
    #[default]
    Query,
    /// Always use the configured default, ignoring the query string
    Fixed,
}

impl TutorConfig {
    /// Validate tutoring configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.default_subject.trim().is_empty() {
            return Err(ValidationError::EmptyDefaultSubject);
        }
        Ok(())
    }
}

impl Default for TutorConfig {
    fn default() -> Self {
        Self {
            default_subject: default_subject(),
            subject_resolution: default_resolution(),
        }
    }
}

fn default_subject() -> String {
    "Astronomy".to_string()
}

fn default_resolution() -> SubjectResolution {
    SubjectResolution::Query
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tutor_config_defaults() {
        let config = TutorConfig::default();
        assert_eq!(config.default_subject, "Astronomy");
        assert_eq!(config.subject_resolution, SubjectResolution::Query);
    }

    #[test]
    fn test_validation_empty_subject() {
        let config = TutorConfig {
            default_subject: "   ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_valid_config() {
        let config = TutorConfig {
            default_subject: "Botany".to_string(),
            subject_resolution: SubjectResolution::Fixed,
        };
        assert!(config.validate().is_ok());
    }
}
