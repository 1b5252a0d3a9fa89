// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Error types for the pipeline library.

use std::fmt;

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Main error type for the pipeline library.
#[derive(Debug)]
pub enum PipelineError {
    /// Error raised by the image processor collaborator.
    ProcessorError(String),
    /// Error raised by the model runner collaborator.
    RunnerError(String),
    /// Error raised by the visualizer collaborator.
    VisualizerError(String),
    /// Error loading or converting images.
    ImageError(String),
    /// Invalid configuration provided.
    ConfigError(String),
    /// Wrapped `std::io::Error`
    Io(std::io::Error),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ProcessorError(msg) => write!(f, "Processor error: {msg}"),
            Self::RunnerError(msg) => write!(f, "Runner error: {msg}"),
            Self::VisualizerError(msg) => write!(f, "Visualizer error: {msg}"),
            Self::ImageError(msg) => write!(f, "Image error: {msg}"),
            Self::ConfigError(msg) => write!(f, "Config error: {msg}"),
            Self::Io(err) => write!(f, "IO error: {err}"),
        }
    }
}

impl std::error::Error for PipelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PipelineError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<image::ImageError> for PipelineError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PipelineError::ProcessorError("test".to_string());
        assert_eq!(err.to_string(), "Processor error: test");

        let err = PipelineError::RunnerError("test".to_string());
        assert_eq!(err.to_string(), "Runner error: test");
    }

    #[test]
    fn test_io_error_source() {
        use std::error::Error;
        let err = PipelineError::from(std::io::Error::other("gone"));
        assert!(err.source().is_some());
    }
}
