//! Error types for the roadmap client
//!
//! Fetch failures fall into three categories, each with its own screen:
//! - generic failures, shown with their message
//! - the organization lacks the feature, shown as a locked screen
//! - the backend gave up computing the response (HTTP 504)

use std::fmt::{self, Display, Formatter};
use std::path::PathBuf;

/// Backend message that marks an organization without access
pub const NOT_ENABLED_MESSAGE: &str = "Feature not yet enabled for this organization";

/// Text of the timeout screen
pub const TIMEOUT_MESSAGE: &str = "Timeout reached when calculating response";

/// Fetch error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// Backend or client timed out
    #[error("{}", TIMEOUT_MESSAGE)]
    Timeout,

    /// Feature not enabled for the organization
    #[error("{}", NOT_ENABLED_MESSAGE)]
    NotEnabled,

    /// Non-success status with the backend's message
    #[error("{message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Message from the error body
        message: String,
    },

    /// Request could not be sent or the body not read
    #[error("request failed: {0}")]
    Transport(String),

    /// Body was not the expected JSON
    #[error("invalid response from {endpoint}: {reason}")]
    Decode {
        /// Endpoint path
        endpoint: String,
        /// Decoder message
        reason: String,
    },
}

impl FetchError {
    /// Create transport error
    #[inline]
    pub fn transport(reason: impl Display) -> Self {
        Self::Transport(reason.to_string())
    }

    /// Create decode error
    #[inline]
    pub fn decode(endpoint: impl Into<String>, reason: impl Display) -> Self {
        Self::Decode {
            endpoint: endpoint.into(),
            reason: reason.to_string(),
        }
    }

    /// Create status error
    #[inline]
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }

    /// Which failure screen this error maps to
    #[inline]
    #[must_use]
    pub fn category(&self) -> FailureCategory {
        match self {
            Self::Timeout => FailureCategory::Timeout,
            Self::NotEnabled => FailureCategory::NotEnabled,
            Self::Status { .. } | Self::Transport(_) | Self::Decode { .. } => FailureCategory::Generic,
        }
    }

    /// Check if error is a timeout
    #[inline]
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }
}

/// Failure category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureCategory {
    /// Message shown as-is
    Generic,
    /// Locked screen
    NotEnabled,
    /// Timeout screen
    Timeout,
}

/// What to show instead of the lifecycle view when loading failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureScreen {
    /// Error message
    Generic {
        /// Message shown to the user
        message: String,
    },
    /// Feature locked for the organization
    Locked {
        /// Where the user is sent back to
        dashboard_url: String,
    },
    /// Backend timed out
    Timeout,
}

impl FailureScreen {
    /// Screen for `error`
    #[must_use]
    pub fn from_error(error: &FetchError, dashboard_url: &str) -> Self {
        match error.category() {
            FailureCategory::Timeout => Self::Timeout,
            FailureCategory::NotEnabled => Self::Locked {
                dashboard_url: dashboard_url.to_string(),
            },
            FailureCategory::Generic => Self::Generic {
                message: error.to_string(),
            },
        }
    }

    /// Short heading
    #[inline]
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Self::Generic { .. } => "Something went wrong",
            Self::Locked { .. } => "This feature is not available",
            Self::Timeout => "Request timed out",
        }
    }

    /// Body text
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Generic { message } => message.clone(),
            Self::Locked { dashboard_url } => {
                format!("{NOT_ENABLED_MESSAGE}. Return to the dashboard: {dashboard_url}")
            }
            Self::Timeout => TIMEOUT_MESSAGE.to_string(),
        }
    }
}

impl Display for FailureScreen {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title(), self.message())
    }
}

/// Configuration and snapshot loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File could not be read
    #[error("cannot read {path}: {source}")]
    Io {
        /// File path
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// TOML could not be parsed
    #[error("invalid config {path}: {source}")]
    Toml {
        /// File path
        path: PathBuf,
        /// Underlying error
        source: toml::de::Error,
    },

    /// JSON snapshot could not be parsed
    #[error("invalid snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),

    /// Setting has an unusable value
    #[error("invalid value for {key}: '{value}'")]
    InvalidValue {
        /// Setting name
        key: String,
        /// Rejected value
        value: String,
    },

    /// HTTP client could not be built
    #[error("http client: {0}")]
    HttpClient(String),
}

impl ConfigError {
    /// Create invalid value error
    #[inline]
    pub fn invalid_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            key: key.into(),
            value: value.into(),
        }
    }
}
