//! Error handling for selector-forge

use thiserror::Error;

/// Main error type for selector-forge
///
/// An exhausted search is not an error; it is reported as
/// [`crate::types::SearchOutcome::NotFound`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ForgeError {
    #[error("Invalid target '{input}': {reason}")]
    InvalidTarget { input: String, reason: String },

    #[error("Empty configuration: '{role}' yields no candidates")]
    EmptyConfiguration { role: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Parse error: {message}")]
    Parse {
        message: String,
        content: Option<String>,
    },

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
    },

    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error("CLI error: {message}")]
    Cli { message: String },
}

impl ForgeError {
    /// Create an invalid target error
    pub fn invalid_target(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidTarget {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create an empty configuration error for a role
    pub fn empty_configuration(role: impl Into<String>) -> Self {
        Self::EmptyConfiguration { role: role.into() }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a parse error
    pub fn parse(message: impl Into<String>, content: Option<String>) -> Self {
        Self::Parse {
            message: message.into(),
            content,
        }
    }

    /// Create an IO error
    pub fn io(message: impl Into<String>, path: Option<String>) -> Self {
        Self::Io {
            message: message.into(),
            path,
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Create a CLI error
    pub fn cli(message: impl Into<String>) -> Self {
        Self::Cli {
            message: message.into(),
        }
    }

    /// Process exit code for this error.
    ///
    /// `0` and `1` are reserved for "match found" and "search exhausted".
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidTarget { .. } => 2,
            _ => 3,
        }
    }

    /// Get user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidTarget { input, reason } => {
                format!("❌ Invalid target '{}': {}\n💡 A target is 8 hex characters, e.g. 0xa9059cbb", input, reason)
            }
            Self::EmptyConfiguration { role } => {
                format!("❌ '{}' yields no candidates, nothing would be searched\n💡 Add at least one non-empty token (use \"\" only for an optional fragment)", role)
            }
            Self::Config { message } => {
                format!("❌ Configuration problem: {}\n💡 Check your grammar file or .env settings", message)
            }
            Self::Parse { message, .. } => {
                format!("❌ Parse error: {}\n💡 Check the grammar file is valid JSON", message)
            }
            Self::Io { message, path } => {
                let path_info = path.as_ref().map_or(String::new(), |p| format!(" ({})", p));
                format!("❌ File error{}: {}\n💡 Check file permissions and paths", path_info, message)
            }
            Self::Internal { message } => {
                format!("❌ Internal error: {}\n💡 This is a bug, please report it", message)
            }
            Self::Cli { message } => {
                format!("❌ Command error: {}\n💡 Use --help for usage information", message)
            }
        }
    }
}

impl From<serde_json::Error> for ForgeError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(err.to_string(), None)
    }
}

impl From<std::io::Error> for ForgeError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string(), None)
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ForgeError>;

/// Helper macros for common error patterns
#[macro_export]
macro_rules! config_error {
    ($msg:expr) => {
        $crate::error::ForgeError::config($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::ForgeError::config(format!($fmt, $($arg)*))
    };
}
