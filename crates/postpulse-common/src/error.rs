//! Error types and utilities for postpulse

use thiserror::Error;

/// Result type alias for postpulse operations
pub type Result<T> = std::result::Result<T, PulseError>;

/// Main error type for postpulse operations
#[derive(Error, Debug)]
pub enum PulseError {
    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reading/writing errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Input data errors (missing columns, malformed rows)
    #[error("Input error: {message}")]
    Input {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Timestamp parsing errors; any single bad value aborts the run
    #[error("Timestamp error: could not parse {value:?}")]
    Timestamp { value: String },

    /// Chart rendering errors
    #[error("Chart error: {message}")]
    Chart {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Logging bootstrap errors
    #[error("Logging error: {message}")]
    Logging { message: String },

    /// Generic error with custom message
    #[error("{message}")]
    Generic {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl PulseError {
    /// Create a new generic error with a custom message
    pub fn new(msg: impl Into<String>) -> Self {
        Self::Generic {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new generic error with a custom message and source
    pub fn with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Generic {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new input data error
    pub fn input(msg: impl Into<String>) -> Self {
        Self::Input {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new input data error with source
    pub fn input_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Input {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new timestamp parsing error for the offending value
    pub fn timestamp(value: impl Into<String>) -> Self {
        Self::Timestamp {
            value: value.into(),
        }
    }

    /// Create a new chart error
    pub fn chart(msg: impl Into<String>) -> Self {
        Self::Chart {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new chart error with source
    pub fn chart_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Chart {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new logging bootstrap error
    pub fn logging(msg: impl Into<String>) -> Self {
        Self::Logging {
            message: msg.into(),
        }
    }
}

#[cfg(feature = "plotters")]
/// Convert from plotters drawing errors to PulseError
impl<T> From<plotters::drawing::DrawingAreaErrorKind<T>> for PulseError
where
    T: std::error::Error + Send + Sync + 'static,
{
    fn from(err: plotters::drawing::DrawingAreaErrorKind<T>) -> Self {
        Self::chart_with_source("chart rendering failed", err)
    }
}
