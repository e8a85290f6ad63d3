//! Error types.
//!
//! `AppError` ends the run with an exit code. `SourceError` is a provider
//! failure the pipeline absorbs into a flat row or the placeholder image.

/// Run-level failure: carries the process exit code and a user-facing message.
#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

/// Failure of a single call to an external data provider.
///
/// These never abort a run: the pipeline logs them and substitutes a neutral
/// default (flat quote, placeholder image).
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("provider returned HTTP {0}")]
    Status(u16),

    #[error("provider error {code}: {description}")]
    Provider { code: String, description: String },

    #[error("malformed payload: {0}")]
    Malformed(String),

    #[error("provider returned no data")]
    Empty,
}
