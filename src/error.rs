//! Error types for plugin and rule operations.

use std::fmt;

/// Hint attached to every not-found error.
pub const REMEDIATION_HINT: &str = "Check your build configuration";

/// Stable, machine-readable error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// The requested plugin or rule is absent.
    NotFound,
    /// The caller supplied conflicting (or no) rule criteria.
    InvalidUsage,
    /// A rule every well-formed configuration carries is missing.
    InvariantViolation,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::InvalidUsage => "INVALID_USAGE",
            ErrorCode::InvariantViolation => "INVARIANT_VIOLATION",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What kind of entry a lookup was searching for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Plugin,
    Rule,
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Plugin => write!(f, "plugin"),
            Target::Rule => write!(f, "rule"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigUtilsError {
    #[error("Could not find {target} matching {identity}\n{}", REMEDIATION_HINT)]
    NotFound { target: Target, identity: String },

    #[error("Invalid rule selector: {}", selector_conflict(.test, .loader))]
    InvalidUsage {
        test: Option<String>,
        loader: Option<String>,
    },

    #[error(
        "Could not find the default rule using {loader}; the configuration is malformed or unsupported"
    )]
    InvariantViolation { loader: String },
}

impl ConfigUtilsError {
    pub(crate) fn not_found(target: Target, identity: impl Into<String>) -> Self {
        Self::NotFound {
            target,
            identity: identity.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::NotFound { .. } => ErrorCode::NotFound,
            Self::InvalidUsage { .. } => ErrorCode::InvalidUsage,
            Self::InvariantViolation { .. } => ErrorCode::InvariantViolation,
        }
    }

    /// Remediation hint, present on not-found errors.
    pub fn remediation(&self) -> Option<&'static str> {
        match self {
            Self::NotFound { .. } => Some(REMEDIATION_HINT),
            _ => None,
        }
    }
}

fn selector_conflict(test: &Option<String>, loader: &Option<String>) -> String {
    match (test, loader) {
        (Some(test), Some(loader)) => format!(
            "both test ({}) and loader ({}) were given; select a rule by one of them",
            test, loader
        ),
        (Some(test), None) => format!("test ({}) was given", test),
        (None, Some(loader)) => format!("loader ({}) was given", loader),
        (None, None) => "neither test nor loader was given".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, ConfigUtilsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = ConfigUtilsError::not_found(Target::Plugin, "StartServerPlugin");
        assert_eq!(
            err.to_string(),
            "Could not find plugin matching StartServerPlugin\nCheck your build configuration"
        );
        assert_eq!(err.code(), ErrorCode::NotFound);
        assert_eq!(err.remediation(), Some(REMEDIATION_HINT));
    }

    #[test]
    fn test_rule_not_found_names_criterion() {
        let err = ConfigUtilsError::not_found(Target::Rule, r"/\.lolcat/");
        assert!(err.to_string().starts_with(r"Could not find rule matching /\.lolcat/"));
    }

    #[test]
    fn test_codes() {
        assert_eq!(ErrorCode::InvalidUsage.to_string(), "INVALID_USAGE");
        let err = ConfigUtilsError::InvariantViolation {
            loader: "file-loader".to_string(),
        };
        assert_eq!(err.code().as_str(), "INVARIANT_VIOLATION");
        assert!(err.remediation().is_none());
        assert!(err.to_string().contains("file-loader"));
    }

    #[test]
    fn test_invalid_usage_names_both_criteria() {
        let err = ConfigUtilsError::InvalidUsage {
            test: Some(r"/\.css$/".to_string()),
            loader: Some("css-loader".to_string()),
        };
        assert_eq!(err.code(), ErrorCode::InvalidUsage);
        assert_eq!(
            err.to_string(),
            r"Invalid rule selector: both test (/\.css$/) and loader (css-loader) were given; select a rule by one of them"
        );

        let err = ConfigUtilsError::InvalidUsage {
            test: None,
            loader: None,
        };
        assert_eq!(
            err.to_string(),
            "Invalid rule selector: neither test nor loader was given"
        );
    }
}
