//! TfL client error types.

/// Errors from the TfL HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum TflError {
    /// The request did not complete within the configured timeout
    #[error("request timed out: {url}")]
    Timeout { url: String },

    /// Could not connect to the API host
    #[error("connection failed: {message}")]
    Connect { message: String },

    /// API returned a non-success status code
    #[error("API error {status}: {message}")]
    Status { status: u16, message: String },

    /// Response body was not the JSON shape we expected
    #[error("JSON parse error: {message}{}", .body.as_deref().map(|b| format!(" (body: {b})")).unwrap_or_default())]
    Json {
        message: String,
        body: Option<String>,
    },

    /// Any other transport failure
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    /// The configured base URL can't be used to build request URLs
    #[error("invalid base URL: {0}")]
    InvalidUrl(String),
}

impl From<reqwest::Error> for TflError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TflError::Timeout {
                url: err
                    .url()
                    .map(|u| u.path().to_string())
                    .unwrap_or_default(),
            }
        } else if err.is_connect() {
            TflError::Connect {
                message: err.to_string(),
            }
        } else {
            TflError::Http(err)
        }
    }
}
