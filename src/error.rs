//! Unified error types for sbom-doc.
//!
//! Two-level hierarchy: a top-level [`SbomDocError`] carrying context, with
//! specific kinds for the parsing and rendering stages. Missing optional SBOM
//! attributes are never errors — they are substituted with placeholders by the
//! report generator. Rendering is all-or-nothing: any failure aborts the
//! invocation with no partial output.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for sbom-doc operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SbomDocError {
    /// Errors while reading the input SBOM
    #[error("Failed to parse SBOM: {context}")]
    Parse {
        context: String,
        #[source]
        source: ParseErrorKind,
    },

    /// Errors while generating or publishing a document
    #[error("Document rendering failed: {context}")]
    Render {
        context: String,
        #[source]
        source: RenderErrorKind,
    },

    /// IO errors with path context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Specific parse error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ParseErrorKind {
    #[error("Unknown SBOM format - expected CycloneDX or SPDX JSON markers")]
    UnknownFormat,

    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),

    #[error("Missing required field: {field} in {context}")]
    MissingField { field: String, context: String },
}

/// Specific render error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum RenderErrorKind {
    #[error("Cannot write destination: {0}")]
    DestinationWrite(String),

    #[error("Output destination required: {0}")]
    MissingDestination(String),

    #[error("No usable font found: {0}")]
    FontDiscovery(String),

    #[error("PDF generation failed: {0}")]
    Pdf(String),

    #[error("JSON serialization failed: {0}")]
    Serialization(String),
}

/// Convenient Result type for sbom-doc operations
pub type Result<T> = std::result::Result<T, SbomDocError>;

impl SbomDocError {
    /// Create a parse error with context
    pub fn parse(context: impl Into<String>, source: ParseErrorKind) -> Self {
        Self::Parse {
            context: context.into(),
            source,
        }
    }

    /// Create a parse error for unknown format
    pub fn unknown_format(path: impl Into<String>) -> Self {
        Self::parse(format!("at {}", path.into()), ParseErrorKind::UnknownFormat)
    }

    /// Create a parse error for a missing required document field
    pub fn missing_field(field: impl Into<String>, context: impl Into<String>) -> Self {
        Self::parse(
            "missing required field",
            ParseErrorKind::MissingField {
                field: field.into(),
                context: context.into(),
            },
        )
    }

    /// Create a render error with context
    pub fn render(context: impl Into<String>, source: RenderErrorKind) -> Self {
        Self::Render {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

impl From<std::io::Error> for SbomDocError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for SbomDocError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(
            "JSON deserialization",
            ParseErrorKind::InvalidJson(err.to_string()),
        )
    }
}

/// Extension trait for adding context to errors.
///
/// The context string is prepended to the error's existing context, creating a
/// chain that shows the path through the code.
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure (only evaluated on error).
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<SbomDocError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: SbomDocError, new_ctx: &str) -> SbomDocError {
    match err {
        SbomDocError::Parse {
            context: existing,
            source,
        } => SbomDocError::Parse {
            context: chain_context(new_ctx, &existing),
            source,
        },
        SbomDocError::Render {
            context: existing,
            source,
        } => SbomDocError::Render {
            context: chain_context(new_ctx, &existing),
            source,
        },
        SbomDocError::Io {
            path,
            message,
            source,
        } => SbomDocError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        SbomDocError::Config(msg) => SbomDocError::Config(chain_context(new_ctx, &msg)),
    }
}

/// Chain two context strings together.
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SbomDocError::unknown_format("input.json");
        let display = err.to_string();
        assert!(
            display.contains("parse") || display.contains("SBOM"),
            "Error message should mention parsing or SBOM: {}",
            display
        );

        let err = SbomDocError::missing_field("name", "document");
        assert!(err.to_string().contains("field"));
    }

    #[test]
    fn test_io_error_keeps_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = SbomDocError::io("/tmp/report.md", io_err);

        assert!(err.to_string().contains("/tmp/report.md"));
    }

    #[test]
    fn test_context_chaining() {
        let initial: Result<()> = Err(SbomDocError::parse(
            "initial context",
            ParseErrorKind::UnknownFormat,
        ));

        match initial.context("outer context") {
            Err(SbomDocError::Parse { context, .. }) => {
                assert!(context.contains("outer context"), "got: {}", context);
                assert!(context.contains("initial context"), "got: {}", context);
            }
            _ => panic!("Expected Parse error"),
        }
    }

    #[test]
    fn test_with_context_lazy_evaluation() {
        let mut called = false;

        let ok_result: Result<i32> = Ok(42);
        let _ = ok_result.with_context(|| {
            called = true;
            "should not be called"
        });
        assert!(!called, "Closure should not be called for Ok result");
    }

    #[test]
    fn test_chain_context_helper() {
        assert_eq!(chain_context("new", ""), "new");
        assert_eq!(chain_context("new", "existing"), "new: existing");
    }
}
