#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {0}")]
    Api(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed line {line}: {content}")]
    MalformedLine { line: usize, content: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl TrackerError {
    /// Whether a run should log this error and move on to the next line.
    ///
    /// Everything else aborts the run before any file is written.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            TrackerError::Http(_) | TrackerError::Api(_) | TrackerError::MalformedLine { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_line_errors_are_recoverable() {
        assert!(TrackerError::Api("503".into()).is_recoverable());
        assert!(TrackerError::MalformedLine {
            line: 3,
            content: "oops".into()
        }
        .is_recoverable());
    }

    #[test]
    fn decode_and_io_errors_are_fatal() {
        let json = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(!TrackerError::from(json).is_recoverable());
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert!(!TrackerError::from(io).is_recoverable());
        assert!(!TrackerError::InvalidArgument("x".into()).is_recoverable());
    }
}
