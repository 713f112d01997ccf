use std::fmt;

/// Application-specific error types.
///
/// The taxonomy is internal only: every failed lookup surfaces to the user
/// as the same generic message, see [`AppError::user_message`].
#[derive(Debug)]
pub enum AppError {
    /// Transport-level failure or non-2xx response from the lookup service.
    NetworkError(String),
    /// The service answered but flagged the code as nonexistent.
    NotFound(String),
    /// The response body could not be parsed as an address.
    MalformedResponse(String),
    /// History repository read/write failure.
    StorageError(String),
}

impl AppError {
    /// The single message shown to the user for any failed lookup.
    ///
    /// Network errors, malformed responses and explicit not-found signals
    /// are deliberately collapsed into one message.
    pub fn user_message(&self) -> &'static str {
        "Não foi possível encontrar o CEP informado, verifique se o formato está certo"
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::MalformedResponse(msg) => write!(f, "Malformed response: {}", msg),
            AppError::StorageError(msg) => write!(f, "Storage error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::NetworkError(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::MalformedResponse(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::StorageError(err.to_string())
    }
}
