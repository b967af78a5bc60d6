//! OR combinator - logical disjunction of validators
//!
//! This module provides the [`Or`] combinator: the first child that passes
//! wins and the remaining children are never evaluated.
//!
//! # Examples
//!
//! ```rust,ignore
//! use nebula_fields::prelude::*;
//!
//! // An integer or a list of integers
//! let rule = int().or_with(list_of(int()));
//! assert!(rule.is_or());
//! ```

use serde_json::Value;

use crate::foundation::{ValidationError, ValidationResult, Validator};
use crate::model::Record;

/// Combines an ordered list of validators with logical OR.
///
/// Built by [`or_with`](crate::foundation::ValidateExt::or_with); chained
/// `or_with` calls append to the same node.
#[derive(Debug, Clone, Default)]
pub struct Or {
    validators: Vec<Validator>,
}

impl Or {
    /// Creates an OR node over `validators`, tried in order.
    #[must_use]
    pub fn new(validators: Vec<Validator>) -> Self {
        Self { validators }
    }

    /// Appends an alternative.
    pub fn push(&mut self, validator: impl Into<Validator>) {
        self.validators.push(validator.into());
    }

    /// Alternatives in evaluation order.
    #[must_use]
    pub fn validators(&self) -> &[Validator] {
        &self.validators
    }

    /// Number of alternatives.
    #[must_use]
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    /// Returns true if the node has no alternatives.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    /// Tries each alternative in order.
    ///
    /// - `Ok(true)` returns immediately.
    /// - `Ok(false)` moves on without recording a failure.
    /// - `Rejected` records a failure and moves on.
    /// - Any other error propagates unchanged unless a `Rejected` was already
    ///   recorded, in which case the loop ends and the error is discarded.
    ///
    /// # Errors
    ///
    /// `Rejected` whenever no alternative passed (including an empty node),
    /// or the first unexpected error raised before any `Rejected`.
    pub fn validate(&self, record: &Record, value: &Value, field: &str) -> ValidationResult<bool> {
        let mut failed = false;

        for validator in &self.validators {
            match validator.validate(record, value, field) {
                Ok(true) => return Ok(true),
                Ok(false) => {}
                Err(ValidationError::Rejected) => failed = true,
                Err(error) if failed => {
                    tracing::debug!(
                        field,
                        %error,
                        "OR discarding unexpected error after a rejection"
                    );
                    break;
                }
                Err(error) => return Err(error),
            }
        }

        Err(ValidationError::Rejected)
    }
}

/// Creates an OR node from a list of alternatives.
#[must_use]
pub fn or_any(validators: Vec<Validator>) -> Or {
    Or::new(validators)
}
