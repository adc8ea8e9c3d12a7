use thiserror::Error;

/// Failure of a single `commentThreads` page request.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API responded with {status}: {message}")]
    Status { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// Whether retrying the same request may succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            FetchError::Transport(e) => e.is_timeout() || e.is_connect() || e.is_request(),
            FetchError::Status { status, .. } => *status == 429 || *status >= 500,
            FetchError::Decode(_) => false,
        }
    }
}

#[derive(Error, Debug)]
pub enum CloudError {
    #[error("Invalid input {input:?}: {reason}")]
    InvalidInput { input: String, reason: String },

    #[error("Fetching comments failed on page {page}: {source}")]
    FetchFailed {
        page: u32,
        #[source]
        source: FetchError,
    },

    #[error("Missing API key: {env_var} environment variable is not set")]
    MissingApiKey { env_var: String },

    #[error("HTTP client setup failed: {0}")]
    ClientSetup(#[from] reqwest::Error),
}

impl CloudError {
    pub fn invalid_input(input: impl Into<String>, reason: impl Into<String>) -> Self {
        CloudError::InvalidInput {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CloudError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_errors_classify_as_transient_only_for_throttling_and_server_faults() {
        let throttled = FetchError::Status {
            status: 429,
            message: "quota".into(),
        };
        let unavailable = FetchError::Status {
            status: 503,
            message: "down".into(),
        };
        let forbidden = FetchError::Status {
            status: 403,
            message: "commentsDisabled".into(),
        };

        assert!(throttled.is_transient());
        assert!(unavailable.is_transient());
        assert!(!forbidden.is_transient());
    }

    #[test]
    fn decode_errors_are_not_transient() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(!FetchError::from(err).is_transient());
    }

    #[test]
    fn fetch_failed_message_includes_page_and_cause() {
        let err = CloudError::FetchFailed {
            page: 3,
            source: FetchError::Status {
                status: 404,
                message: "videoNotFound".into(),
            },
        };
        assert_eq!(
            err.to_string(),
            "Fetching comments failed on page 3: API responded with 404: videoNotFound"
        );
    }
}
