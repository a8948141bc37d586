use thiserror::Error;

pub const GENERIC_FAILURE: &str = "Failed to submit. Please try again.";
pub const STORAGE_FALLBACK: &str = "Failed to save data";

#[derive(Error, Debug)]
pub enum FormError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Network error: {0}")]
    Reqwest(Box<reqwest::Error>),

    #[error("{0}")]
    Storage(String),

    #[error("Invalid response from storage: {0}")]
    InvalidResponse(String),

    #[error("Download failed: {0}")]
    Download(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("{0}")]
    Custom(String),
}

impl FormError {
    /// Text for the Error view. Never empty.
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            GENERIC_FAILURE.to_string()
        } else {
            message
        }
    }
}

impl From<std::io::Error> for FormError {
    fn from(error: std::io::Error) -> Self {
        FormError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for FormError {
    fn from(error: reqwest::Error) -> Self {
        FormError::Reqwest(Box::new(error))
    }
}
