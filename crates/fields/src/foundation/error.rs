//! Error types for field validation
//!
//! [`ValidationError::Rejected`] is the expected, payload-free outcome of a
//! rule violation. Every other variant is "unexpected" as far as the
//! combinators are concerned: it propagates unless a rejection has already
//! been recorded in the same evaluation.

/// Errors raised while validating, writing or reading a field.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ValidationError {
    /// The value violated a rule.
    #[error("value rejected")]
    Rejected,

    /// The field was read before any successful write.
    #[error("field `{field}` has not been assigned")]
    NotAssigned {
        /// Name of the field that was read.
        field: String,
    },

    /// The schema declares no field with this name.
    #[error("`{schema}` has no field named `{field}`")]
    UnknownField {
        /// Name of the schema that was asked.
        schema: String,
        /// The unknown field name.
        field: String,
    },

    /// A container validator was asked to iterate a scalar value.
    #[error("value of kind `{kind}` is not iterable")]
    NotIterable {
        /// JSON kind of the offending value (`number`, `bool`, `null`).
        kind: &'static str,
    },

    /// Any other failure raised by a leaf.
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl ValidationError {
    /// Wraps an arbitrary error as an unexpected leaf failure.
    pub fn unexpected<E>(error: E) -> Self
    where
        E: Into<anyhow::Error>,
    {
        Self::Unexpected(error.into())
    }

    /// Creates a `NotAssigned` error for `field`.
    pub fn not_assigned(field: impl Into<String>) -> Self {
        Self::NotAssigned {
            field: field.into(),
        }
    }

    /// Creates an `UnknownField` error.
    pub fn unknown_field(schema: impl Into<String>, field: impl Into<String>) -> Self {
        Self::UnknownField {
            schema: schema.into(),
            field: field.into(),
        }
    }

    /// Returns true for the expected validation-failure signal.
    #[must_use]
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected)
    }

    /// Returns true if a read hit a field that was never written.
    #[must_use]
    pub fn is_not_assigned(&self) -> bool {
        matches!(self, Self::NotAssigned { .. })
    }

    /// Returns true for anything other than [`ValidationError::Rejected`].
    #[must_use]
    pub fn is_unexpected(&self) -> bool {
        !self.is_rejected()
    }
}

/// Result alias used throughout the crate.
pub type ValidationResult<T> = Result<T, ValidationError>;
