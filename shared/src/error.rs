use std::time::Duration;
use thiserror::Error;

/// Everything that can keep a detection attempt from producing a genuine
/// result.
///
/// `MissingInput`, `Busy` and `Config` stop a request before it is sent.
/// The remaining variants describe an attempt that was sent and failed; the
/// display layer folds them into a fallback [`DetectionResult`].
///
/// [`DetectionResult`]: crate::model::DetectionResult
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DetectError {
    #[error("Please upload both real and fake files.")]
    MissingInput,

    #[error("A detection request is already in progress.")]
    Busy,

    #[error("request timed out after {} ms", .0.as_millis())]
    Timeout(Duration),

    #[error("network error: {0}")]
    Transport(String),

    #[error("server returned status {status}")]
    Status { status: u16, body: String },

    #[error("malformed detection response: {0}")]
    Malformed(String),

    #[error("invalid detection endpoint: {0}")]
    Config(String),
}

impl DetectError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, DetectError::Timeout(_))
    }
}

impl From<serde_json::Error> for DetectError {
    fn from(err: serde_json::Error) -> Self {
        DetectError::Malformed(err.to_string())
    }
}

impl From<url::ParseError> for DetectError {
    fn from(err: url::ParseError) -> Self {
        DetectError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_input_prompts_user() {
        assert_eq!(
            DetectError::MissingInput.to_string(),
            "Please upload both real and fake files."
        );
    }

    #[test]
    fn test_timeout_display_in_millis() {
        let err = DetectError::Timeout(Duration::from_secs(30));
        assert_eq!(err.to_string(), "request timed out after 30000 ms");
        assert!(err.is_timeout());
    }

    #[test]
    fn test_status_display_omits_body() {
        let err = DetectError::Status {
            status: 502,
            body: "<html>bad gateway</html>".into(),
        };
        assert_eq!(err.to_string(), "server returned status 502");
        assert!(!err.is_timeout());
    }

    #[test]
    fn test_from_json_error() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: DetectError = json_error.into();
        assert!(matches!(err, DetectError::Malformed(_)));
    }

    #[test]
    fn test_from_url_error() {
        let url_error = url::Url::parse("not a url").unwrap_err();
        let err: DetectError = url_error.into();
        assert!(matches!(err, DetectError::Config(_)));
    }
}
