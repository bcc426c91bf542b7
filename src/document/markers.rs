//! Insertion Markers
//!
//! Detects `//forge-insert:<kind>` comments that annotate insertion points
//! in a template.

use std::fmt;
use std::ops::Range;

use regex::Regex;

const MARKER_PATTERN: &str = r"//\s*forge-insert:([A-Za-z][A-Za-z0-9_-]*)";

/// What a marker annotates
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MarkerKind {
    Fonts,
    /// Both `colors` and `colours` spellings
    Colors,
    Other(String),
}

impl MarkerKind {
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "fonts" => MarkerKind::Fonts,
            "colors" | "colours" => MarkerKind::Colors,
            _ => MarkerKind::Other(name.to_string()),
        }
    }
}

impl fmt::Display for MarkerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkerKind::Fonts => f.write_str("fonts"),
            MarkerKind::Colors => f.write_str("colors"),
            MarkerKind::Other(name) => f.write_str(name),
        }
    }
}

/// A marker comment found in a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    pub kind: MarkerKind,
    /// 1-based line number
    pub line: usize,
    /// Byte span of the marker text within the document
    pub span: Range<usize>,
}

/// Find every marker in `text`, in document order
pub fn scan_markers(text: &str) -> Vec<Marker> {
    let Ok(marker_re) = Regex::new(MARKER_PATTERN) else {
        return Vec::new();
    };

    let mut markers = Vec::new();
    let mut line_start = 0;

    for (idx, line) in text.split_inclusive('\n').enumerate() {
        for captures in marker_re.captures_iter(line) {
            let (Some(whole), Some(name)) = (captures.get(0), captures.get(1)) else {
                continue;
            };
            markers.push(Marker {
                kind: MarkerKind::from_name(name.as_str()),
                line: idx + 1,
                span: line_start + whole.start()..line_start + whole.end(),
            });
        }
        line_start += line.len();
    }

    markers
}
