//! Defines the application's primary error type `AppError` and a convenience `Result` alias.
//!
//! Uses the `thiserror` crate for ergonomic error definition and provides `From`
//! implementations to convert common external errors into `AppError` variants.
//! Errors that do not implement `Clone` are wrapped in `Arc` to allow `AppError` to be cloneable.
//!
//! Every variant is terminal: `main` prints `Error: <message>` (and the optional hint)
//! to stderr and exits with [`AppError::exit_code`].

use std::sync::Arc;
use thiserror::Error;

/// Where to obtain an IQAir API key.
pub const API_KEY_URL: &str = "https://dashboard.iqair.com/personal/api-keys";

/// The primary error enumeration for all application-specific errors.
#[derive(Error, Debug, Clone)]
pub enum AppError {
    /// `IQAIR_API_KEY` is unset or empty.
    #[error("IQAIR_API_KEY environment variable not set")]
    MissingApiKey,

    /// A configuration value is present but unusable.
    #[error("{0}")]
    Config(String),

    /// The command line could not be interpreted.
    #[error("{message}")]
    Usage {
        message: String,
        hint: Option<String>,
    },

    /// HTTP 401 from the provider.
    #[error("Invalid API key")]
    Unauthorized,

    /// HTTP 404 from the provider.
    #[error("Location not found")]
    NotFound,

    /// HTTP 429 from the provider.
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Any other non-success HTTP status.
    #[error("HTTP {status} - {reason}")]
    Http { status: u16, reason: String },

    /// The provider answered, but with a status other than `success`.
    #[error("{0}")]
    Provider(String),

    /// Error originating from the HTTP client (`reqwest`). Stored without its URL.
    #[error("{0}")]
    Transport(Arc<reqwest::Error>),

    /// Error during JSON parsing (`serde_json`). Wrapped in Arc as serde_json::Error is not Clone.
    #[error("{0}")]
    JsonParse(Arc<serde_json::Error>),
}

impl AppError {
    /// Shorthand for a usage error without a hint line.
    pub fn usage(message: impl Into<String>) -> Self {
        AppError::Usage {
            message: message.into(),
            hint: None,
        }
    }

    /// Optional second line printed under the error message.
    pub fn hint(&self) -> Option<String> {
        match self {
            AppError::MissingApiKey => Some(format!("Get your free key from: {}", API_KEY_URL)),
            AppError::Usage { hint, .. } => hint.clone(),
            _ => None,
        }
    }

    /// Process exit code for this error. All failures share the same code.
    pub fn exit_code(&self) -> u8 {
        1
    }
}

/// A specialized `Result` type using the application's `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

// --- From implementations ---

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        // Drop the request URL so the API key in its query string never reaches output
        AppError::Transport(Arc::new(err.without_url()))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::JsonParse(Arc::new(err))
    }
}
