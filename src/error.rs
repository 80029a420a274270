//! Error handling types for the converter
//!
//! The conversion core itself never fails: malformed lines are skipped and the
//! tree builder is total. Errors only surface at the edges, when reading or
//! writing files, when command-line arguments are wrong, or when a configured
//! resource limit is crossed.

use std::{error::Error, fmt, io};

/// Main error type for conversion operations
#[derive(Debug)]
pub struct GedcomError {
    /// The specific kind of error
    kind: ErrorKind,
    /// Source error that caused this error
    source: Option<Box<dyn Error + Send + Sync>>,
    /// Additional context for the error
    context: Option<String>,
}

/// Top-level error categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    Argument(ArgumentError),
    IO(IOError),
    Security(SecurityError),
}

/// Command-line argument errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    /// Wrong number of positional arguments
    WrongCount { found: usize },
    /// Argument present but unusable
    Invalid(String),
}

/// IO operation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IOError {
    /// File not found
    FileNotFound(String),
    /// Permission denied
    PermissionDenied(String),
    /// Error reading from a file
    ReadError(String),
    /// Error writing to a file
    WriteError(String),
}

/// Configured limit violations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecurityError {
    /// Exceeded maximum node depth
    MaxDepthExceeded,
    /// Exceeded maximum input size
    MaxSizeExceeded,
    /// A single line exceeded the maximum length
    MaxLineLengthExceeded,
}

impl GedcomError {
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            source: None,
            context: None,
        }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    /// Builds a read error for `path`, classifying the underlying io error
    pub fn read(path: &str, err: io::Error) -> Self {
        let kind = match err.kind() {
            io::ErrorKind::NotFound => IOError::FileNotFound(path.to_string()),
            io::ErrorKind::PermissionDenied => IOError::PermissionDenied(path.to_string()),
            _ => IOError::ReadError(format!("Cannot read file: {}", path)),
        };
        Self::new(ErrorKind::IO(kind)).with_source(err)
    }

    /// Builds a write error for `path`
    pub fn write(path: &str, err: io::Error) -> Self {
        let kind = match err.kind() {
            io::ErrorKind::PermissionDenied => IOError::PermissionDenied(path.to_string()),
            _ => IOError::WriteError(format!("Cannot write to file: {}", path)),
        };
        Self::new(ErrorKind::IO(kind)).with_source(err)
    }

    /// Process exit status for this error; each category gets its own code
    pub fn exit_code(&self) -> i32 {
        match self.kind {
            ErrorKind::Argument(_) => 1,
            ErrorKind::IO(_) => 2,
            ErrorKind::Security(_) => 3,
        }
    }
}

impl fmt::Display for GedcomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let base_error = match &self.kind {
            ErrorKind::Argument(err) => err.to_string(),
            ErrorKind::IO(err) => err.to_string(),
            ErrorKind::Security(err) => err.to_string(),
        };

        write!(f, "Error: {}", base_error)?;

        if let Some(ctx) = &self.context {
            write!(f, "\nContext: {}", ctx)?;
        }

        if let Some(source) = &self.source {
            write!(f, "\nCaused by: {}", source)?;
        }

        Ok(())
    }
}

impl fmt::Display for ArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongCount { found } => {
                write!(f, "Expected 2 arguments, found {}", found)
            }
            Self::Invalid(msg) => write!(f, "Invalid argument: {}", msg),
        }
    }
}

impl fmt::Display for IOError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileNotFound(path) => write!(f, "File not found: {}", path),
            Self::PermissionDenied(msg) => write!(f, "Permission denied: {}", msg),
            Self::ReadError(msg) => write!(f, "Read error: {}", msg),
            Self::WriteError(msg) => write!(f, "Write error: {}", msg),
        }
    }
}

impl fmt::Display for SecurityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MaxDepthExceeded => write!(f, "Maximum nesting depth exceeded"),
            Self::MaxSizeExceeded => write!(f, "Maximum input size exceeded"),
            Self::MaxLineLengthExceeded => write!(f, "Maximum line length exceeded"),
        }
    }
}

impl Error for GedcomError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.source {
            Some(source) => Some(source.as_ref()),
            None => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, GedcomError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct_per_kind() {
        let arg = GedcomError::new(ErrorKind::Argument(ArgumentError::WrongCount { found: 1 }));
        let io = GedcomError::new(ErrorKind::IO(IOError::ReadError("x".into())));
        let sec = GedcomError::new(ErrorKind::Security(SecurityError::MaxDepthExceeded));
        assert_eq!(arg.exit_code(), 1);
        assert_eq!(io.exit_code(), 2);
        assert_eq!(sec.exit_code(), 3);
    }

    #[test]
    fn not_found_is_classified() {
        let err = GedcomError::read("missing.ged", io::Error::from(io::ErrorKind::NotFound));
        assert_eq!(
            err.kind(),
            &ErrorKind::IO(IOError::FileNotFound("missing.ged".to_string()))
        );
        assert!(err.to_string().contains("File not found: missing.ged"));
        assert!(err.to_string().contains("Caused by:"));
    }

    #[test]
    fn context_is_rendered() {
        let err = GedcomError::new(ErrorKind::Security(SecurityError::MaxSizeExceeded))
            .with_context("input is 10 bytes, limit 5");
        assert_eq!(err.context(), Some("input is 10 bytes, limit 5"));
        assert_eq!(
            err.to_string(),
            "Error: Maximum input size exceeded\nContext: input is 10 bytes, limit 5"
        );
    }
}
