use std::path::PathBuf;
use thiserror::Error;

/// Failure to obtain the question sequence.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("request for questions failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("question resource returned status {0}")]
    Status(u16),
    #[error("question data is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("question {id} is invalid: {reason}")]
    InvalidQuestion { id: u32, reason: String },
}

/// Failure of a single hint exchange. Never shown verbatim to the user.
#[derive(Debug, Error)]
pub enum HintRequestError {
    #[error("hint request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("hint endpoint returned status {0}")]
    Status(u16),
    #[error("hint response is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Analytics cannot run in this environment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("analytics unsupported: {reason}")]
pub struct AnalyticsUnsupported {
    pub reason: String,
}

#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error("analytics request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("analytics endpoint returned status {0}")]
    Status(u16),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_error_messages() {
        let err = LoadError::Status(404);
        assert_eq!(err.to_string(), "question resource returned status 404");

        let err = LoadError::InvalidQuestion {
            id: 7,
            reason: "no answers".to_string(),
        };
        assert_eq!(err.to_string(), "question 7 is invalid: no answers");
    }

    #[test]
    fn test_malformed_converts_from_serde() {
        let parse_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: HintRequestError = parse_err.into();
        assert!(matches!(err, HintRequestError::Malformed(_)));
    }
}
