//! Error categories decide how a workflow error is shown: how loud the
//! notice is and whether a recovery hint follows the message.

use std::fmt;

/// Who has to act for the failed operation to succeed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// The user's input or selection is incomplete or invalid.
    User,
    /// A generation request is still running; retry once it settles.
    Conflict,
    /// The local environment refused (file system, clipboard).
    System,
    /// The settings file lacks something, e.g. the API key.
    Configuration,
}

impl ErrorCategory {
    /// Short label for log fields.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::User => "user",
            ErrorCategory::Conflict => "conflict",
            ErrorCategory::System => "system",
            ErrorCategory::Configuration => "configuration",
        }
    }

    /// Whether the failure only needs the user to wait.
    pub fn is_transient(&self) -> bool {
        matches!(self, ErrorCategory::Conflict)
    }

    /// What to do next, appended to the notice. User errors already say it.
    pub fn recovery_hint(&self) -> Option<&'static str> {
        match self {
            ErrorCategory::User | ErrorCategory::Conflict => None,
            ErrorCategory::System => Some("Check file and clipboard permissions."),
            ErrorCategory::Configuration => Some("Run `kakomon --set-api-key` to register one."),
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_conflicts_are_transient() {
        assert!(ErrorCategory::Conflict.is_transient());
        assert!(!ErrorCategory::User.is_transient());
        assert!(!ErrorCategory::System.is_transient());
        assert!(!ErrorCategory::Configuration.is_transient());
    }

    #[test]
    fn test_hints() {
        assert_eq!(ErrorCategory::User.recovery_hint(), None);
        assert!(ErrorCategory::Configuration
            .recovery_hint()
            .is_some_and(|hint| hint.contains("--set-api-key")));
        assert_eq!(ErrorCategory::Configuration.to_string(), "configuration");
    }
}
