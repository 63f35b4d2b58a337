//! Construction-time error types

/// Why a target identity could not be used as a table surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetIssue {
    /// Nothing is registered under the identity.
    NotFound,
    /// Something is registered, but it is not a table.
    NotATable {
        /// Tag of the surface that was found instead.
        tag: String,
    },
}

impl std::fmt::Display for TargetIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(f, "no surface is registered under it"),
            Self::NotATable { tag } => write!(f, "expected a <table>, found <{}>", tag),
        }
    }
}

/// Errors raised while validating configuration, before any network access.
///
/// These abort construction entirely: no partially built instance exists.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The target identity does not resolve to a table surface.
    #[error("Invalid target '{target}': {issue}")]
    InvalidTarget { target: String, issue: TargetIssue },

    /// The binding options do not respect the schema.
    #[error("Invalid options: {0}")]
    InvalidOptions(String),

    /// A required property was not provided.
    #[error("The property `{field}` is required")]
    MissingRequiredField { field: &'static str },
}

impl ConfigError {
    /// Creates an error for an identity with no registered surface.
    pub fn target_not_found(target: impl Into<String>) -> Self {
        Self::InvalidTarget {
            target: target.into(),
            issue: TargetIssue::NotFound,
        }
    }

    /// Creates an error for an identity that resolves to something other than a table.
    pub fn not_a_table(target: impl Into<String>, tag: impl Into<String>) -> Self {
        Self::InvalidTarget {
            target: target.into(),
            issue: TargetIssue::NotATable { tag: tag.into() },
        }
    }

    /// Creates an invalid options error.
    pub fn invalid_options(message: impl Into<String>) -> Self {
        Self::InvalidOptions(message.into())
    }

    /// Creates a missing required field error.
    pub fn missing(field: &'static str) -> Self {
        Self::MissingRequiredField { field }
    }
}
