//! Object Literal Rendering
//!
//! Turns structured values into JavaScript object-literal text in the shape
//! theme configs use:
//!
//! ```text
//! {
//!   primary: {
//!     DEFAULT: "#4f46e5",
//!     light: "#6366f1",
//!   },
//! }
//! ```

use std::borrow::Cow;
use std::fmt::Write;

use serde_json::Value;
use thiserror::Error;

use super::value::SubstitutionValue;

/// Spaces per nesting level
pub const INDENT: usize = 2;

/// Deepest nesting the renderer accepts
pub const MAX_DEPTH: usize = 64;

/// Why a value has no text form
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("null has no literal form (at {path})")]
    Null { path: String },
    #[error("nesting exceeds {limit} levels (at {path})")]
    TooDeep { limit: usize, path: String },
}

/// Text a substitution value expands to
pub fn render_value(value: &SubstitutionValue) -> Result<Cow<'_, str>, RenderError> {
    match value {
        SubstitutionValue::Text(text) | SubstitutionValue::Literal(text) => {
            Ok(Cow::Borrowed(text.as_str()))
        }
        SubstitutionValue::Structured(Value::String(text)) => Ok(Cow::Borrowed(text.as_str())),
        SubstitutionValue::Structured(data) => to_object_literal(data).map(Cow::Owned),
    }
}

/// Render `value` as a JavaScript literal
pub fn to_object_literal(value: &Value) -> Result<String, RenderError> {
    let mut out = String::new();
    let mut path = Vec::new();
    write_value(&mut out, value, 0, &mut path)?;
    Ok(out)
}

fn write_value(
    out: &mut String,
    value: &Value,
    level: usize,
    path: &mut Vec<String>,
) -> Result<(), RenderError> {
    match value {
        Value::Null => {
            return Err(RenderError::Null {
                path: display_path(path),
            });
        }
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => {
            let _ = write!(out, "{n}");
        }
        Value::String(s) => write_string(out, s),
        Value::Array(items) => {
            check_depth(level, path)?;
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                path.push(i.to_string());
                write_value(out, item, level + 1, path)?;
                path.pop();
            }
            out.push(']');
        }
        Value::Object(entries) => {
            check_depth(level, path)?;
            let pad = " ".repeat(level * INDENT);
            out.push('{');
            for (key, item) in entries {
                out.push('\n');
                out.push_str(&pad);
                out.push_str(&" ".repeat(INDENT));
                write_key(out, key);
                out.push_str(": ");
                path.push(key.clone());
                write_value(out, item, level + 1, path)?;
                path.pop();
                out.push(',');
            }
            out.push('\n');
            out.push_str(&pad);
            out.push('}');
        }
    }
    Ok(())
}

fn check_depth(level: usize, path: &[String]) -> Result<(), RenderError> {
    if level >= MAX_DEPTH {
        return Err(RenderError::TooDeep {
            limit: MAX_DEPTH,
            path: display_path(path),
        });
    }
    Ok(())
}

fn display_path(path: &[String]) -> String {
    if path.is_empty() {
        "top level".to_string()
    } else {
        path.join(".")
    }
}

fn write_key(out: &mut String, key: &str) {
    if is_identifier(key) {
        out.push_str(key);
    } else {
        write_string(out, key);
    }
}

/// Bare-key check: `[A-Za-z_$][A-Za-z0-9_$]*`
fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

fn write_string(out: &mut String, s: &str) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_palette_layout() {
        let palette = json!({
            "primary": { "DEFAULT": "#4f46e5", "light": "#6366f1", "dark": "#4338ca" },
            "secondary": { "DEFAULT": "#ec4899", "light": "#f472b6", "dark": "#db2777" },
        });

        let expected = "{\n  primary: {\n    DEFAULT: \"#4f46e5\",\n    light: \"#6366f1\",\n    dark: \"#4338ca\",\n  },\n  secondary: {\n    DEFAULT: \"#ec4899\",\n    light: \"#f472b6\",\n    dark: \"#db2777\",\n  },\n}";
        assert_eq!(to_object_literal(&palette).unwrap(), expected);
    }

    #[test]
    fn test_empty_object() {
        assert_eq!(to_object_literal(&json!({})).unwrap(), "{\n}");
    }

    #[test]
    fn test_scalars_and_arrays() {
        let value = json!({ "muted": "#6b7280", "weight": 600, "dark": true, "stack": ["Inter", "sans-serif"] });
        let rendered = to_object_literal(&value).unwrap();
        assert!(rendered.contains("  muted: \"#6b7280\",\n"));
        assert!(rendered.contains("  weight: 600,\n"));
        assert!(rendered.contains("  dark: true,\n"));
        assert!(rendered.contains("  stack: [\"Inter\", \"sans-serif\"],\n"));
    }

    #[test]
    fn test_non_identifier_keys_are_quoted() {
        let rendered = to_object_literal(&json!({ "brand-blue": "#00f", "500": "#111" })).unwrap();
        assert!(rendered.contains("\"brand-blue\": \"#00f\""));
        assert!(rendered.contains("\"500\": \"#111\""));
    }

    #[test]
    fn test_strings_are_escaped() {
        let rendered = to_object_literal(&json!(["say \"hi\"\n\\"])).unwrap();
        assert_eq!(rendered, r#"["say \"hi\"\n\\"]"#);
    }

    #[test]
    fn test_null_is_rejected_with_path() {
        let err = to_object_literal(&json!({ "primary": { "light": null } })).unwrap_err();
        assert_eq!(
            err,
            RenderError::Null {
                path: "primary.light".to_string()
            }
        );
    }

    #[test]
    fn test_depth_limit() {
        let mut value = json!("leaf");
        for _ in 0..(MAX_DEPTH + 1) {
            value = json!({ "k": value });
        }
        assert!(matches!(
            to_object_literal(&value),
            Err(RenderError::TooDeep { limit: MAX_DEPTH, .. })
        ));
    }

    #[test]
    fn test_depth_at_limit_is_accepted() {
        let mut value = json!("leaf");
        for _ in 0..MAX_DEPTH {
            value = json!({ "k": value });
        }
        assert!(to_object_literal(&value).is_ok());
    }

    #[test]
    fn test_render_value_variants() {
        assert_eq!(render_value(&SubstitutionValue::text("Inter")).unwrap(), "Inter");
        assert_eq!(render_value(&SubstitutionValue::literal("{ a: 1 }")).unwrap(), "{ a: 1 }");
        assert_eq!(
            render_value(&SubstitutionValue::Structured(json!("Inter"))).unwrap(),
            "Inter"
        );
        assert_eq!(
            render_value(&SubstitutionValue::Structured(json!({ "a": 1 }))).unwrap(),
            "{\n  a: 1,\n}"
        );
        assert!(render_value(&SubstitutionValue::Structured(json!(null))).is_err());
    }
}
