//! Substitution values from files and command-line pairs.
//!
//! Values files are JSON or TOML tables. String entries become plain text,
//! `{ "$literal": "..." }` entries become pre-serialized literals, and every
//! other entry is kept structured and rendered at fill time.
//!
//! A project `forge.config.json` written by `forge configure` uses its own
//! layout (`fonts`, `colours`, `env`) and is mapped onto the `<font>` and
//! `<colors>` placeholders.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::substitution::{SubstitutionMap, SubstitutionValue};

/// Values file looked up in the working directory
pub const PROJECT_VALUES_FILE: &str = "forge.config.json";

/// Values file looked up in the user config directory
pub const USER_VALUES_FILE: &str = "values.toml";

/// Key marking an entry as a pre-serialized literal
pub const LITERAL_KEY: &str = "$literal";

/// Project config written by `forge configure`
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ForgeConfigFile {
    pub fonts: FontSettings,
    pub colours: Option<Value>,
    pub env: Option<Value>,
}

/// Font choice in a project config
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FontSettings {
    pub font: String,
    #[serde(default)]
    pub use_google_fonts: bool,
}

impl ForgeConfigFile {
    /// Whether a parsed table has the project config layout
    pub fn matches_layout(entries: &Map<String, Value>) -> bool {
        entries
            .get("fonts")
            .and_then(Value::as_object)
            .is_some_and(|fonts| fonts.get("font").is_some_and(Value::is_string))
    }

    /// Map onto placeholder names: `fonts.font` to `font`, `colours` to `colors`
    pub fn into_substitutions(self) -> SubstitutionMap {
        let mut values = SubstitutionMap::new();
        values.insert("font", SubstitutionValue::Text(self.fonts.font));
        if let Some(colours) = self.colours {
            values.insert("colors", SubstitutionValue::Structured(colours));
        }
        values
    }
}

/// Supported values file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValuesFormat {
    Json,
    Toml,
}

impl ValuesFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(ValuesFormat::Json),
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(ValuesFormat::Toml),
            _ => bail!(
                "Unsupported values file '{}': expected a .json or .toml extension",
                path.display()
            ),
        }
    }
}

/// Read a values file into a substitution map
pub fn load_values_file(path: &Path) -> Result<SubstitutionMap> {
    let format = ValuesFormat::from_path(path)?;
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read values file: {}", path.display()))?;

    let values = parse_values(&content, format)
        .with_context(|| format!("Invalid values file: {}", path.display()))?;

    log::debug!(
        "Loaded {} substitution value(s) from {}",
        values.len(),
        path.display()
    );
    Ok(values)
}

/// Parse values file content
pub fn parse_values(content: &str, format: ValuesFormat) -> Result<SubstitutionMap> {
    let data: Value = match format {
        ValuesFormat::Json => serde_json::from_str(content)?,
        ValuesFormat::Toml => toml::from_str(content)?,
    };

    let Value::Object(entries) = data else {
        bail!("Top level of a values file must be a table");
    };

    if ForgeConfigFile::matches_layout(&entries) {
        let config: ForgeConfigFile = serde_json::from_value(Value::Object(entries))
            .context("Invalid forge project config")?;
        log::debug!("Reading values from forge project config layout");
        return Ok(config.into_substitutions());
    }

    entries
        .into_iter()
        .map(|(name, value)| entry_value(&name, value).map(|value| (name, value)))
        .collect()
}

fn entry_value(name: &str, value: Value) -> Result<SubstitutionValue> {
    match value {
        Value::String(text) => Ok(SubstitutionValue::Text(text)),
        Value::Object(mut fields) if fields.contains_key(LITERAL_KEY) => {
            if fields.len() != 1 {
                bail!("Entry '{}': '{}' must be the only key", name, LITERAL_KEY);
            }
            match fields.remove(LITERAL_KEY) {
                Some(Value::String(text)) => Ok(SubstitutionValue::Literal(text)),
                _ => bail!("Entry '{}': '{}' must be a string", name, LITERAL_KEY),
            }
        }
        other => Ok(SubstitutionValue::Structured(other)),
    }
}

/// Split a `KEY=VALUE` pair; the value may itself contain `=`
pub fn parse_assignment(pair: &str) -> Result<(String, String)> {
    let (name, value) = pair
        .split_once('=')
        .ok_or_else(|| anyhow!("Expected KEY=VALUE, got '{}'", pair))?;
    let name = name.trim();
    if name.is_empty() {
        bail!("Missing key in '{}'", pair);
    }
    Ok((name.to_string(), value.to_string()))
}

/// Candidate default values files, most specific first
///
/// `user_config_dir` is normally `dirs::config_dir()`.
pub fn default_values_candidates(
    working_dir: &Path,
    user_config_dir: Option<&Path>,
) -> Vec<PathBuf> {
    let mut candidates = vec![working_dir.join(PROJECT_VALUES_FILE)];

    // User global file: ~/.config/forge/values.toml
    if let Some(config_dir) = user_config_dir {
        candidates.push(config_dir.join("forge").join(USER_VALUES_FILE));
    }

    candidates
}

/// First existing default values file, if any
pub fn find_default_values(working_dir: &Path, user_config_dir: Option<&Path>) -> Option<PathBuf> {
    default_values_candidates(working_dir, user_config_dir)
        .into_iter()
        .find(|path| path.is_file())
}
