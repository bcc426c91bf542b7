//! Errors raised by the template filler.

use thiserror::Error;

/// Failure of a fill pass.
///
/// Unresolved placeholders are not errors; they are reported through
/// [`crate::filler::FillReport`] instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FillError {
    /// A substitution value could not be rendered to text.
    #[error("substitution value for '{name}' cannot be rendered: {reason}")]
    MalformedSubstitutionValue { name: String, reason: String },
}

impl FillError {
    pub(crate) fn malformed(name: impl Into<String>, reason: impl Into<String>) -> Self {
        FillError::MalformedSubstitutionValue {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
