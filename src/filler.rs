//! Template Filler
//!
//! Replaces `<name>` placeholders in a [`ConfigDocument`] with values from a
//! [`SubstitutionMap`]. The pass is pure and single: replacement text is
//! never re-scanned, and names missing from the map leave their token
//! exactly as written.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::ops::Range;

use crate::document::{tokenize, ConfigDocument, Segment};
use crate::error::FillError;
use crate::substitution::{render_value, SubstitutionMap};

/// Outcome of a fill pass
#[derive(Debug, Clone, PartialEq)]
pub struct FillReport {
    pub document: ConfigDocument,
    /// Replacement count per token name
    pub replaced: BTreeMap<String, usize>,
    /// Token names with no value, in order of first appearance
    pub unresolved: Vec<String>,
}

impl FillReport {
    /// True when every placeholder found a value
    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }

    pub fn replacement_count(&self) -> usize {
        self.replaced.values().sum()
    }
}

/// Rendered replacement for one map entry
struct Replacement<'m> {
    text: Cow<'m, str>,
    /// Structured literals swallow quotes wrapped directly around the token
    consumes_quotes: bool,
}

/// Fill `document` using `substitutions`
pub fn fill(
    document: &ConfigDocument,
    substitutions: &SubstitutionMap,
) -> Result<ConfigDocument, FillError> {
    fill_with_report(document, substitutions).map(|report| report.document)
}

/// Fill `document` and report which names were replaced or left unresolved
///
/// Every value is rendered before any output is assembled, so a malformed
/// value fails the whole pass.
pub fn fill_with_report(
    document: &ConfigDocument,
    substitutions: &SubstitutionMap,
) -> Result<FillReport, FillError> {
    let replacements = render_all(substitutions)?;

    let text = document.as_str();
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    let mut replaced = BTreeMap::new();
    let mut unresolved: Vec<String> = Vec::new();

    for segment in tokenize(text) {
        let Segment::Placeholder { name, span } = segment else {
            continue;
        };

        let Some(replacement) = replacements.get(name) else {
            if !unresolved.iter().any(|n| n == name) {
                unresolved.push(name.to_string());
            }
            continue;
        };

        let span = if replacement.consumes_quotes {
            quoted_span(text, &span, cursor).unwrap_or(span)
        } else {
            span
        };

        out.push_str(&text[cursor..span.start]);
        out.push_str(&replacement.text);
        cursor = span.end;
        *replaced.entry(name.to_string()).or_insert(0) += 1;
    }
    out.push_str(&text[cursor..]);

    for name in &unresolved {
        log::debug!("placeholder <{}> has no substitution; left as is", name);
    }

    Ok(FillReport {
        document: ConfigDocument::new(out),
        replaced,
        unresolved,
    })
}

fn render_all(
    substitutions: &SubstitutionMap,
) -> Result<BTreeMap<&str, Replacement<'_>>, FillError> {
    substitutions
        .iter()
        .map(|(name, value)| {
            render_value(value)
                .map(|text| {
                    (
                        name.as_str(),
                        Replacement {
                            text,
                            consumes_quotes: value.is_structured(),
                        },
                    )
                })
                .map_err(|e| FillError::malformed(name.clone(), e.to_string()))
        })
        .collect()
}

/// Widen `span` over a matching quote pair directly around it, if the
/// opening quote has not already been emitted
fn quoted_span(text: &str, span: &Range<usize>, cursor: usize) -> Option<Range<usize>> {
    if span.start == 0 || span.start - 1 < cursor {
        return None;
    }
    let bytes = text.as_bytes();
    let open = bytes[span.start - 1];
    let close = *bytes.get(span.end)?;
    if (open == b'"' || open == b'\'') && open == close {
        Some(span.start - 1..span.end + 1)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::substitution::SubstitutionValue;
    use serde_json::json;

    fn doc(text: &str) -> ConfigDocument {
        ConfigDocument::new(text)
    }

    #[test]
    fn test_fill_font_scenario() {
        let map: SubstitutionMap = [("font", "Roboto")].into_iter().collect();
        let result = fill(&doc(r#"sans: ["<font>", ...x]"#), &map).unwrap();
        assert_eq!(result.as_str(), r#"sans: ["Roboto", ...x]"#);
    }

    #[test]
    fn test_fill_colors_literal_scenario() {
        let mut map = SubstitutionMap::new();
        map.insert(
            "colors",
            SubstitutionValue::literal(r##"{ primary: { DEFAULT: "#123456" } }"##),
        );
        let result = fill(&doc(r#"colors: "<colors>","#), &map).unwrap();
        assert_eq!(
            result.as_str(),
            r##"colors: { primary: { DEFAULT: "#123456" } },"##
        );
    }

    #[test]
    fn test_unknown_token_is_verbatim() {
        let source = doc("a <unknown> b");
        let report = fill_with_report(&source, &SubstitutionMap::new()).unwrap();
        assert_eq!(report.document, source);
        assert_eq!(report.unresolved, vec!["unknown"]);
        assert!(!report.is_complete());
    }

    #[test]
    fn test_replacement_is_not_rescanned() {
        let map: SubstitutionMap = [("a", "<b>"), ("b", "B")].into_iter().collect();
        let result = fill(&doc("<a> <b>"), &map).unwrap();
        assert_eq!(result.as_str(), "<b> B");
    }

    #[test]
    fn test_self_referencing_value_terminates() {
        let map: SubstitutionMap = [("x", "<x><x>")].into_iter().collect();
        let result = fill(&doc("<x>"), &map).unwrap();
        assert_eq!(result.as_str(), "<x><x>");
    }

    #[test]
    fn test_text_value_keeps_quotes() {
        let map: SubstitutionMap = [("colors", "red")].into_iter().collect();
        let result = fill(&doc(r#"c: "<colors>""#), &map).unwrap();
        assert_eq!(result.as_str(), r#"c: "red""#);
    }

    #[test]
    fn test_structured_value_renders_and_drops_quotes() {
        let mut map = SubstitutionMap::new();
        map.insert("colors", json!({ "muted": "#6b7280" }));
        let result = fill(&doc("colors: '<colors>',"), &map).unwrap();
        assert_eq!(result.as_str(), "colors: {\n  muted: \"#6b7280\",\n},");
    }

    #[test]
    fn test_mismatched_quotes_are_kept() {
        let map: SubstitutionMap = [("c", SubstitutionValue::literal("{}"))]
            .into_iter()
            .collect();
        let result = fill(&doc(r#"x: "<c>'"#), &map).unwrap();
        assert_eq!(result.as_str(), r#"x: "{}'"#);
    }

    #[test]
    fn test_shared_quote_is_consumed_once() {
        let map: SubstitutionMap = [
            ("a", SubstitutionValue::literal("A")),
            ("b", SubstitutionValue::literal("B")),
        ]
        .into_iter()
        .collect();
        let result = fill(&doc(r#""<a>"<b>""#), &map).unwrap();
        assert_eq!(result.as_str(), r#"AB""#);
    }

    #[test]
    fn test_malformed_value_fails_whole_pass() {
        let mut map = SubstitutionMap::new();
        map.insert("font", "Inter");
        map.insert("colors", json!({ "primary": null }));

        let err = fill(&doc("<font> <colors>"), &map).unwrap_err();
        assert!(matches!(
            err,
            FillError::MalformedSubstitutionValue { ref name, .. } if name == "colors"
        ));
    }

    #[test]
    fn test_malformed_unused_value_still_fails() {
        let mut map = SubstitutionMap::new();
        map.insert("unused", json!(null));
        assert!(fill(&doc("no tokens"), &map).is_err());
    }

    #[test]
    fn test_report_counts() {
        let map: SubstitutionMap = [("font", "Inter")].into_iter().collect();
        let report = fill_with_report(&doc("<font> <font> <x> <x> <y>"), &map).unwrap();
        assert_eq!(report.replaced.get("font"), Some(&2));
        assert_eq!(report.replacement_count(), 2);
        assert_eq!(report.unresolved, vec!["x", "y"]);
    }
}
