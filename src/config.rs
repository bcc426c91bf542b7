//! Configuration management for the forge CLI.
//!
//! Handles:
//! - Command-line argument parsing
//! - Values file discovery
//! - Output destination selection

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::substitution::SubstitutionValue;
use crate::values::{find_default_values, parse_assignment};

/// Command-line arguments for forge
#[derive(Debug, Parser)]
#[command(name = "forge")]
#[command(about = "Fill placeholder tokens in configuration templates")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Log level for the CLI
    #[arg(
        long,
        global = true,
        default_value = "info",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fill a template and write the result
    Fill(FillArgs),
    /// List the markers and placeholders of a template
    Inspect(InspectArgs),
}

#[derive(Debug, clap::Args)]
pub struct FillArgs {
    /// Template to fill
    pub template: PathBuf,

    #[arg(long, help = "Values file (.json or .toml)")]
    pub values: Option<PathBuf>,

    #[arg(
        long = "set",
        value_name = "KEY=VALUE",
        help = "Text value for a placeholder; keeps surrounding quotes (use --literal for object literals)"
    )]
    pub set: Vec<String>,

    #[arg(
        long = "literal",
        value_name = "KEY=VALUE",
        help = "Pre-serialized literal for a placeholder; swallows surrounding quotes"
    )]
    pub literal: Vec<String>,

    #[arg(short, long, conflicts_with = "in_place", help = "Write the result to this file")]
    pub output: Option<PathBuf>,

    #[arg(long, help = "Overwrite the template with the result")]
    pub in_place: bool,

    #[arg(long, help = "Fail when any placeholder is left unresolved")]
    pub strict: bool,
}

#[derive(Debug, clap::Args)]
pub struct InspectArgs {
    /// Template to inspect
    pub template: PathBuf,
}

/// Where filled output goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    File(PathBuf),
}

/// Settings for a fill run
#[derive(Debug, Clone, PartialEq)]
pub struct FillConfig {
    pub template: PathBuf,
    /// Explicit or discovered values file
    pub values_path: Option<PathBuf>,
    /// Command-line values, applied over the values file in order
    pub overrides: Vec<(String, SubstitutionValue)>,
    pub destination: Destination,
    pub strict: bool,
}

/// What the CLI was asked to do
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Fill(FillConfig),
    Inspect { template: PathBuf },
}

/// Combined configuration from all sources
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub action: Action,
    /// Log level
    pub log_level: String,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        let working_dir = std::env::current_dir()?;
        let user_config_dir = dirs::config_dir();
        Self::from_args(Args::parse(), &working_dir, user_config_dir.as_deref())
    }

    /// Create configuration from explicit arguments (useful for testing)
    ///
    /// `user_config_dir` is searched for `forge/values.toml` when no values
    /// file is given.
    pub fn from_args(
        args: Args,
        working_dir: &Path,
        user_config_dir: Option<&Path>,
    ) -> Result<Self> {
        let action = match args.command {
            Command::Fill(fill) => Action::Fill(FillConfig::from_args(
                fill,
                working_dir,
                user_config_dir,
            )?),
            Command::Inspect(inspect) => Action::Inspect {
                template: inspect.template,
            },
        };

        Ok(Config {
            action,
            log_level: args.log_level,
        })
    }
}

impl FillConfig {
    fn from_args(
        args: FillArgs,
        working_dir: &Path,
        user_config_dir: Option<&Path>,
    ) -> Result<Self> {
        let mut overrides = Vec::new();
        for pair in &args.set {
            let (name, value) = parse_assignment(pair)?;
            overrides.push((name, SubstitutionValue::Text(value)));
        }
        for pair in &args.literal {
            let (name, value) = parse_assignment(pair)?;
            overrides.push((name, SubstitutionValue::Literal(value)));
        }

        let values_path = args
            .values
            .or_else(|| find_default_values(working_dir, user_config_dir));

        let destination = if args.in_place {
            Destination::File(args.template.clone())
        } else if let Some(output) = args.output {
            Destination::File(output)
        } else {
            Destination::Stdout
        };

        Ok(FillConfig {
            template: args.template,
            values_path,
            overrides,
            destination,
            strict: args.strict,
        })
    }
}
