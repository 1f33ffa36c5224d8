// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum ReadabilityError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<ReadabilityError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    #[error("Presentation error: {0}")]
    Presentation(#[from] PresentationError),
}

pub type Result<T> = std::result::Result<T, ReadabilityError>;

/// Domain-layer specific errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// A formula would divide by a zero word or sentence count.
    #[error("Text is too short to score: no {missing} found")]
    InsufficientText { missing: &'static str },

    #[error("Unknown score selector '{input}' (expected ARI, FK, SMOG, CL or all)")]
    UnknownScoreSelector { input: String },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Application-layer errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Failed to compute {kind} score: {source}")]
    ScoringFailed {
        kind: String,
        #[source]
        source: DomainError,
    },
}

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read score selection: {source}")]
    PromptIo {
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize {format} output: {details}")]
    SerializationError { format: String, details: String },

    #[error("Output error: {message}")]
    OutputError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Presentation-layer errors.
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("Invalid CLI value: {flag} = {value} - {reason}")]
    InvalidValue {
        flag: String,
        value: String,
        reason: String,
    },
}

impl From<std::io::Error> for InfrastructureError {
    fn from(err: std::io::Error) -> Self {
        Self::OutputError { message: err.to_string(), source: Some(Box::new(err)) }
    }
}

impl From<std::io::Error> for ReadabilityError {
    fn from(err: std::io::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

impl From<serde_json::Error> for InfrastructureError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            format: "JSON".to_string(),
            details: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ReadabilityError {
    fn from(err: serde_json::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

impl ReadabilityError {
    /// Innermost domain error, looking through any context layers.
    pub fn as_domain(&self) -> Option<&DomainError> {
        match self {
            Self::Context { source, .. } => source.as_domain(),
            Self::Domain(err) => Some(err),
            Self::Application(ApplicationError::ScoringFailed { source, .. }) => Some(source),
            _ => None,
        }
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<ReadabilityError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| ReadabilityError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| ReadabilityError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
