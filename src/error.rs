//! Error types for the steganalysis engine

use std::fmt;

/// Errors that can occur during media analysis
///
/// Detector and extractor failures are converted into error-tagged result
/// records at the orchestration boundary; only decode-provider failures are
/// fatal for a file and propagate to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// Decode provider could not produce samples (unreadable file, corrupt stream)
    DecodeError(String),

    /// Degenerate or malformed input (empty stream, undersized image)
    InvalidInput(String),

    /// Media layout the engine cannot analyze (e.g. two-channel pixel data)
    UnsupportedFormat(String),

    /// Processing error during analysis
    ProcessingError(String),

    /// Numerical error (zero mean, non-finite statistic)
    NumericalError(String),
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::DecodeError(msg) => write!(f, "Decode error: {}", msg),
            AnalysisError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            AnalysisError::UnsupportedFormat(msg) => write!(f, "Unsupported format: {}", msg),
            AnalysisError::ProcessingError(msg) => write!(f, "Processing error: {}", msg),
            AnalysisError::NumericalError(msg) => write!(f, "Numerical error: {}", msg),
        }
    }
}

impl std::error::Error for AnalysisError {}
