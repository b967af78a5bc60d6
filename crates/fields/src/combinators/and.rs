//! AND combinator - logical conjunction of validators
//!
//! This module provides the [`And`] combinator: every child must pass.
//!
//! Evaluation does not stop at the first rejection. Later children still run,
//! which is what lets an unexpected error raised *after* a rejection be
//! discarded instead of masking it.
//!
//! # Examples
//!
//! ```rust,ignore
//! use nebula_fields::prelude::*;
//!
//! let rule = int().min_value(0).and_with(int().max_value(10));
//! assert!(rule.is_and());
//! ```

use serde_json::Value;

use crate::foundation::{ValidationError, ValidationResult, Validator};
use crate::model::Record;

/// Combines an ordered list of validators with logical AND.
///
/// Built by [`and_with`](crate::foundation::ValidateExt::and_with); chained
/// `and_with` calls append to the same node.
#[derive(Debug, Clone, Default)]
pub struct And {
    validators: Vec<Validator>,
}

impl And {
    /// Creates an AND node over `validators`, evaluated in order.
    #[must_use]
    pub fn new(validators: Vec<Validator>) -> Self {
        Self { validators }
    }

    /// Appends a child.
    pub fn push(&mut self, validator: impl Into<Validator>) {
        self.validators.push(validator.into());
    }

    /// Children in evaluation order.
    #[must_use]
    pub fn validators(&self) -> &[Validator] {
        &self.validators
    }

    /// Number of children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    /// Returns true if the node has no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    /// Evaluates every child in order.
    ///
    /// - `Ok(false)` or `Rejected` from a child records a failure and moves on.
    /// - Any other error propagates unchanged while nothing has failed yet;
    ///   once a failure is recorded it ends the loop and is discarded.
    ///
    /// An empty node passes.
    ///
    /// # Errors
    ///
    /// `Rejected` if any child rejected, or the first unexpected error raised
    /// before any rejection.
    pub fn validate(&self, record: &Record, value: &Value, field: &str) -> ValidationResult<bool> {
        let mut failed = false;

        for validator in &self.validators {
            match validator.validate(record, value, field) {
                Ok(true) => {}
                Ok(false) | Err(ValidationError::Rejected) => failed = true,
                Err(error) if failed => {
                    tracing::debug!(
                        field,
                        %error,
                        "AND discarding unexpected error after a rejection"
                    );
                    break;
                }
                Err(error) => return Err(error),
            }
        }

        if failed {
            Err(ValidationError::Rejected)
        } else {
            Ok(true)
        }
    }
}

/// Creates an AND node from a list of validators.
#[must_use]
pub fn and_all(validators: Vec<Validator>) -> And {
    And::new(validators)
}
