//! Placeholder Lexer
//!
//! Splits document text into literal runs and `<name>` placeholders.
//! Works on bytes: both delimiters are ASCII, so every split lands on a
//! UTF-8 boundary.

use std::ops::Range;

/// A piece of document text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Literal text, copied through untouched
    Text(&'a str),
    /// A well-formed `<name>` token
    Placeholder {
        name: &'a str,
        /// Byte span of the whole token, delimiters included
        span: Range<usize>,
    },
}

impl<'a> Segment<'a> {
    /// The slice of `source` this segment covers
    pub fn text(&self, source: &'a str) -> &'a str {
        match self {
            Segment::Text(t) => t,
            Segment::Placeholder { span, .. } => &source[span.clone()],
        }
    }
}

/// Tokenize document text into segments
///
/// A placeholder is `<` followed by one or more characters other than `<`
/// and `>`, closed by `>`. Anything else is literal: an unterminated `<`,
/// an empty `<>`, or a `<` that meets another `<` before its `>`.
pub fn tokenize(text: &str) -> Vec<Segment<'_>> {
    let bytes = text.as_bytes();
    let mut segments = Vec::new();
    let mut literal_start = 0;
    let mut pos = 0;

    while let Some(offset) = text[pos..].find('<') {
        let open = pos + offset;
        let name_start = open + 1;

        let Some(rel) = text[name_start..].find(['<', '>']) else {
            // Unterminated: the rest of the document is literal
            break;
        };
        let delim = name_start + rel;

        if bytes[delim] == b'<' {
            // Restart at the inner '<'; this one stays literal
            pos = delim;
            continue;
        }

        if rel == 0 {
            // Empty "<>"
            pos = delim + 1;
            continue;
        }

        if literal_start < open {
            segments.push(Segment::Text(&text[literal_start..open]));
        }
        segments.push(Segment::Placeholder {
            name: &text[name_start..delim],
            span: open..delim + 1,
        });
        pos = delim + 1;
        literal_start = pos;
    }

    if literal_start < text.len() {
        segments.push(Segment::Text(&text[literal_start..]));
    }

    segments
}
