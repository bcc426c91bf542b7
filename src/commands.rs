//! CLI commands
//!
//! File reading and writing around the filler, plus the inspect listing.

use std::io::Write;
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::config::{Action, Config, Destination, FillConfig};
use crate::document::ConfigDocument;
use crate::filler::{fill_with_report, FillReport};
use crate::substitution::SubstitutionMap;
use crate::values::load_values_file;

/// Run the configured action, writing any listing to stdout
pub fn run(config: &Config) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match &config.action {
        Action::Fill(fill_config) => run_fill(fill_config, &mut out).map(|_| ()),
        Action::Inspect { template } => run_inspect(template, &mut out),
    }
}

/// Read a template from disk
pub fn read_document(path: &Path) -> Result<ConfigDocument> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read template: {}", path.display()))?;
    Ok(ConfigDocument::new(text))
}

/// Build the substitution map: values file first, then command-line overrides
pub fn build_substitutions(config: &FillConfig) -> Result<SubstitutionMap> {
    let mut substitutions = match &config.values_path {
        Some(path) => load_values_file(path)?,
        None => SubstitutionMap::new(),
    };

    for (name, value) in &config.overrides {
        if substitutions.insert(name.clone(), value.clone()).is_some() {
            log::debug!("Command-line value overrides '{}'", name);
        }
    }

    Ok(substitutions)
}

/// Fill the configured template; stdout output goes to `out`
pub fn run_fill(config: &FillConfig, out: &mut dyn Write) -> Result<FillReport> {
    let document = read_document(&config.template)?;
    let substitutions = build_substitutions(config)?;

    let report = fill_with_report(&document, &substitutions)
        .with_context(|| format!("Failed to fill template: {}", config.template.display()))?;

    for name in &report.unresolved {
        log::warn!(
            "Unresolved placeholder <{}> in {}",
            name,
            config.template.display()
        );
    }

    if config.strict && !report.is_complete() {
        bail!(
            "{} placeholder(s) left unresolved in {}: {}",
            report.unresolved.len(),
            config.template.display(),
            report.unresolved.join(", ")
        );
    }

    match &config.destination {
        Destination::Stdout => {
            out.write_all(report.document.as_str().as_bytes())?;
            out.flush()?;
        }
        Destination::File(path) => {
            std::fs::write(path, report.document.as_str())
                .with_context(|| format!("Failed to write output: {}", path.display()))?;
            log::info!(
                "Wrote {} ({} replacement(s))",
                path.display(),
                report.replacement_count()
            );
        }
    }

    Ok(report)
}

/// List markers and placeholders of a template
pub fn run_inspect(template: &Path, out: &mut dyn Write) -> Result<()> {
    let document = read_document(template)?;

    let markers = document.markers();
    writeln!(out, "markers: {}", markers.len())?;
    for marker in &markers {
        writeln!(out, "  line {}: {}", marker.line, marker.kind)?;
    }

    let placeholders = document.placeholders();
    writeln!(out, "placeholders: {}", placeholders.len())?;
    for token in &placeholders {
        writeln!(
            out,
            "  line {} [{}..{}]: <{}>",
            document.line_of(token.span.start),
            token.span.start,
            token.span.end,
            token.name
        )?;
    }

    Ok(())
}
