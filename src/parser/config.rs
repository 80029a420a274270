use std::fmt;

use crate::error::{ErrorKind, GedcomError, Result, SecurityError};

/// Maximum node depth (256), far beyond any real GEDCOM nesting
pub const DEFAULT_MAX_DEPTH: usize = 256;
/// Maximum input size (64MB)
pub const DEFAULT_MAX_SIZE: usize = 64 * 1024 * 1024;
/// Maximum length of a single line (1MB)
pub const DEFAULT_MAX_LINE_LENGTH: usize = 1024 * 1024;

/// Configuration for parser limits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Maximum depth of any attached node; the synthetic root is depth 0
    pub max_depth: usize,
    /// Maximum total input size in bytes, line terminators excluded
    pub max_size: usize,
    /// Maximum length of one line in bytes
    pub max_line_length: usize,
}

/// Tracks input size while lines are consumed
#[derive(Debug)]
pub struct ParsingContext {
    current_size: usize,
    lines: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_size: DEFAULT_MAX_SIZE,
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
        }
    }
}

impl fmt::Display for ParserConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ParserConfig {{ max_depth: {}, max_size: {}, max_line_length: {} }}",
            self.max_depth, self.max_size, self.max_line_length
        )
    }
}

impl ParserConfig {
    /// A configuration that never rejects input
    pub fn unbounded() -> Self {
        Self {
            max_depth: usize::MAX,
            max_size: usize::MAX,
            max_line_length: usize::MAX,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_max_size(mut self, max_size: usize) -> Self {
        self.max_size = max_size;
        self
    }

    pub fn with_max_line_length(mut self, max_line_length: usize) -> Self {
        self.max_line_length = max_line_length;
        self
    }

    pub fn validate_depth(&self, depth: usize) -> Result<()> {
        if depth > self.max_depth {
            return Err(
                GedcomError::new(ErrorKind::Security(SecurityError::MaxDepthExceeded)).with_context(
                    format!("Node depth {} exceeds maximum allowed ({})", depth, self.max_depth),
                ),
            );
        }
        Ok(())
    }

    pub fn validate_line(&self, line: &str) -> Result<()> {
        if line.len() > self.max_line_length {
            return Err(GedcomError::new(ErrorKind::Security(
                SecurityError::MaxLineLengthExceeded,
            ))
            .with_context(format!(
                "Line of {} bytes exceeds maximum allowed ({})",
                line.len(),
                self.max_line_length
            )));
        }
        Ok(())
    }
}

impl Default for ParsingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl ParsingContext {
    pub fn new() -> Self {
        Self {
            current_size: 0,
            lines: 0,
        }
    }

    /// Number of lines consumed so far
    pub fn lines(&self) -> usize {
        self.lines
    }

    pub fn current_size(&self) -> usize {
        self.current_size
    }

    /// Accounts for one more raw line, data line or not
    pub fn add_line(&mut self, line: &str, config: &ParserConfig) -> Result<()> {
        self.lines += 1;
        config.validate_line(line)?;
        self.current_size = self.current_size.saturating_add(line.len());
        if self.current_size > config.max_size {
            return Err(
                GedcomError::new(ErrorKind::Security(SecurityError::MaxSizeExceeded)).with_context(
                    format!("Input exceeds maximum allowed size ({} bytes)", config.max_size),
                ),
            );
        }
        Ok(())
    }
}
