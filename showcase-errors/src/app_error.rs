use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
pub enum AppError {
    #[error("{0} is missing. The UI can run without it, but this feature requires it.")]
    MissingCredential(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Failed to fetch website: {0}")]
    ScrapingFailed(String),

    #[error("Completion request failed: {0}")]
    CompletionFailed(String),

    #[error("Local model request failed: {0}")]
    LocalModelFailed(String),

    #[error("Could not decode generated image: {0}")]
    ImageDecodeFailed(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn user_message(&self) -> &str {
        match self {
            Self::MissingCredential(_) => "An API key required by this demo is not configured.",
            Self::InvalidInput(_) => "Some of the form values are not valid. Check them and retry.",
            Self::InvalidUrl(_) => "The URL you entered is not valid. Try again!",
            Self::ScrapingFailed(_) => "Could not fetch the website. Make sure the URL is reachable.",
            Self::CompletionFailed(_) => "The hosted model returned an error. Try again later.",
            Self::LocalModelFailed(_) => "The local model returned an error. Try again later.",
            Self::ImageDecodeFailed(_) => "The generated image could not be read.",
            Self::Timeout => "The request took too long. Try again.",
            Self::Internal(_) => "Something went wrong on the server. Try again later.",
        }
    }
}

#[cfg(feature = "ssr")]
mod ssr_impl {
    use super::AppError;
    use axum::http::StatusCode;

    impl AppError {
        /// Status used when the error is rendered as a page.
        pub fn status_code(&self) -> StatusCode {
            match self {
                AppError::MissingCredential(_) => StatusCode::SERVICE_UNAVAILABLE,
                AppError::InvalidInput(_) | AppError::InvalidUrl(_) => StatusCode::BAD_REQUEST,
                AppError::ScrapingFailed(_)
                | AppError::CompletionFailed(_)
                | AppError::LocalModelFailed(_)
                | AppError::ImageDecodeFailed(_) => StatusCode::BAD_GATEWAY,
                AppError::Timeout => StatusCode::GATEWAY_TIMEOUT,
                AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            }
        }
    }
}
