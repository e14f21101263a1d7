use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a single weather request.
///
/// The provider logs each variant with its [`category`](FetchError::category)
/// and converts it to a "no result" value; callers never see these directly.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to reach the weather endpoint: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("request failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("failed to parse response body as JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// Short failure class used as log context.
    pub fn category(&self) -> &'static str {
        match self {
            FetchError::Transport(err) if err.is_timeout() => "timeout",
            FetchError::Transport(err) if err.is_connect() => "connection",
            FetchError::Transport(_) => "transport",
            FetchError::Status { .. } => "http",
            FetchError::Decode(_) => "decode",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_failures_are_http() {
        let err = FetchError::Status { status: StatusCode::NOT_FOUND, body: "city not found".into() };

        assert_eq!(err.category(), "http");
        assert!(err.to_string().contains("404"));
        assert!(err.to_string().contains("city not found"));
    }

    #[test]
    fn invalid_json_is_decode() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = FetchError::from(json_err);

        assert_eq!(err.category(), "decode");
    }
}
