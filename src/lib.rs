//! Forge Config
//!
//! Fills placeholder tokens in configuration templates such as a
//! `tailwind.config.js` theme file.
//!
//! This library provides:
//! - Placeholder and marker scanning
//! - Substitution values and object-literal rendering
//! - The single-pass template filler
//! - Values file loading and CLI configuration

pub mod commands;
pub mod config;
pub mod document;
pub mod error;
pub mod filler;
pub mod substitution;
pub mod values;

pub use config::Config;
pub use document::{ConfigDocument, Marker, MarkerKind, PlaceholderToken};
pub use error::FillError;
pub use filler::{fill, fill_with_report, FillReport};
pub use substitution::{SubstitutionMap, SubstitutionValue};
