//! Single-line GEDCOM recognizer
//!
//! A data line is a level number, whitespace, a token, then optional free
//! text. Anything else is not an error, it is simply not a data line.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

// Separators are ASCII whitespace only; a no-break space belongs to the token
#[allow(clippy::unwrap_used)]
static LINE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?-u:\s)*([0-9]+)(?-u:\s)+([^\t\n\x0B\x0C\r ]+)(?-u:\s)*(.*)$").unwrap()
});

#[allow(clippy::unwrap_used)]
static IDENTIFIER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^@.*@$").unwrap());

/// One structured GEDCOM line, borrowing from the raw text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record<'a> {
    /// Level as declared in the line
    pub level: usize,
    /// Tag name or `@id@` cross-reference
    pub token: &'a str,
    /// Remainder of the line, possibly empty
    pub data: &'a str,
}

/// A record resolved into what it contributes to the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry<'a> {
    /// `0 @I1@ INDI`: the data names the element, the token is its id
    Identifier { id: &'a str, name: &'a str },
    /// `1 NAME John`: the token names the element, the data is its value
    Tag { name: &'a str, value: &'a str },
}

impl<'a> Record<'a> {
    pub fn new(level: usize, token: &'a str, data: &'a str) -> Self {
        Self { level, token, data }
    }

    /// Resolves the tag/identifier role inversion for this record
    pub fn classify(&self) -> Entry<'a> {
        if is_identifier(self.token) {
            Entry::Identifier {
                id: self.token,
                name: self.data,
            }
        } else {
            Entry::Tag {
                name: self.token,
                value: self.data,
            }
        }
    }
}

/// True if `token` is wrapped in at-signs, e.g. `@I1@`
pub fn is_identifier(token: &str) -> bool {
    IDENTIFIER_REGEX.is_match(token)
}

/// Parses one raw line, returning `None` for anything that is not a data line
pub fn parse_line(line: &str) -> Option<Record<'_>> {
    let Some(caps) = LINE_REGEX.captures(line) else {
        debug!("Skipping non-data line: {:?}", line);
        return None;
    };

    let (Some(level), Some(token), Some(data)) = (caps.get(1), caps.get(2), caps.get(3)) else {
        return None;
    };

    let level = match level.as_str().parse::<usize>() {
        Ok(level) => level,
        Err(e) => {
            warn!("Skipping line with unusable level {:?}: {}", level.as_str(), e);
            return None;
        }
    };

    Some(Record::new(level, token.as_str(), data.as_str()))
}
