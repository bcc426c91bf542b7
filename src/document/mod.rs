//! Configuration Documents
//!
//! Owned template text plus read-only views over its placeholders and
//! marker comments.

pub mod lexer;
pub mod markers;

pub use lexer::{tokenize, Segment};
pub use markers::{scan_markers, Marker, MarkerKind};

use std::fmt;
use std::ops::Range;

/// An angle-bracket placeholder found in a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderToken {
    pub name: String,
    /// Byte span of `<name>`, delimiters included
    pub span: Range<usize>,
}

/// Source text of a configuration file
///
/// Never edited in place; filling produces a new document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ConfigDocument {
    text: String,
}

impl ConfigDocument {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    /// All well-formed placeholders, in document order
    pub fn placeholders(&self) -> Vec<PlaceholderToken> {
        tokenize(&self.text)
            .into_iter()
            .filter_map(|segment| match segment {
                Segment::Placeholder { name, span } => Some(PlaceholderToken {
                    name: name.to_string(),
                    span,
                }),
                Segment::Text(_) => None,
            })
            .collect()
    }

    /// All `//forge-insert:` markers, in document order
    pub fn markers(&self) -> Vec<Marker> {
        scan_markers(&self.text)
    }

    /// 1-based line containing byte `offset`
    pub fn line_of(&self, offset: usize) -> usize {
        let end = offset.min(self.text.len());
        self.text.as_bytes()[..end]
            .iter()
            .filter(|&&b| b == b'\n')
            .count()
            + 1
    }
}

impl fmt::Display for ConfigDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<String> for ConfigDocument {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<&str> for ConfigDocument {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl AsRef<str> for ConfigDocument {
    fn as_ref(&self) -> &str {
        &self.text
    }
}
