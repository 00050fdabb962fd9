//! # Pipeline Error Types
//!
//! Structured errors for the dataset-generation and line-tagging pipeline.
//! Failures are local and non-fatal where possible: vocabulary loading
//! degrades to empty results, and only tagger unavailability or explicit
//! I/O and serialization problems surface as errors.

/// Errors raised by corpus persistence and line tagging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    /// A source file or destination path could not be accessed.
    ResourceUnavailable(String),
    /// Persisted corpus text could not be decoded.
    DecodeFailure(String),
    /// The sequence tagger has no usable model behind it.
    TaggerUnavailable(String),
    /// Encoding the corpus failed.
    Serialization(String),
}

impl std::fmt::Display for PipelineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PipelineError::ResourceUnavailable(msg) => write!(f, "Resource unavailable: {msg}"),
            PipelineError::DecodeFailure(msg) => write!(f, "Decode failure: {msg}"),
            PipelineError::TaggerUnavailable(msg) => write!(f, "Tagger unavailable: {msg}"),
            PipelineError::Serialization(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for PipelineError {}

impl From<std::io::Error> for PipelineError {
    fn from(err: std::io::Error) -> Self {
        PipelineError::ResourceUnavailable(err.to_string())
    }
}

impl From<serde_json::Error> for PipelineError {
    fn from(err: serde_json::Error) -> Self {
        PipelineError::DecodeFailure(err.to_string())
    }
}

impl From<anyhow::Error> for PipelineError {
    fn from(err: anyhow::Error) -> Self {
        PipelineError::TaggerUnavailable(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_formats() {
        let err = PipelineError::DecodeFailure("bad json".to_string());
        assert_eq!(err.to_string(), "Decode failure: bad json");

        let err = PipelineError::TaggerUnavailable("model missing".to_string());
        assert_eq!(err.to_string(), "Tagger unavailable: model missing");
    }

    #[test]
    fn test_io_error_maps_to_resource_unavailable() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: PipelineError = io.into();
        assert!(matches!(err, PipelineError::ResourceUnavailable(_)));
    }

    #[test]
    fn test_json_error_maps_to_decode_failure() {
        let json = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: PipelineError = json.into();
        assert!(matches!(err, PipelineError::DecodeFailure(_)));
    }
}
