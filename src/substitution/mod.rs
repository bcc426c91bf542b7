//! Substitutions
//!
//! Replacement values and their rendering to text.

pub mod render;
pub mod value;

pub use render::{render_value, to_object_literal, RenderError};
pub use value::{SubstitutionMap, SubstitutionValue};
