//! Core traits for the validation system
//!
//! This module defines the leaf contract every validator implements and the
//! extension trait that makes leaves composable.

use std::fmt;

use serde_json::Value;

use crate::combinators::Transform;
use crate::foundation::{ValidationResult, Validator};
use crate::model::Record;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The contract every leaf validator implements.
///
/// `validate` answers whether `value` may be stored in `field` of `record`.
/// Returning `Ok(false)` and returning `Err(ValidationError::Rejected)` both
/// reject the value; any other error is treated as unexpected by the
/// combinators (see [`And`](crate::combinators::And)).
///
/// Implementors must be stateless with respect to records: one validator is
/// shared by every record of a schema.
///
/// # Examples
///
/// ```rust,ignore
/// use nebula_fields::prelude::*;
///
/// #[derive(Debug)]
/// struct Even;
///
/// impl Validate for Even {
///     fn validate(&self, _: &Record, value: &Value, _: &str) -> ValidationResult<bool> {
///         Ok(value.as_i64().is_some_and(|n| n % 2 == 0))
///     }
/// }
///
/// let rule = Even.and_with(int().min_value(0));
/// ```
pub trait Validate: fmt::Debug + Send + Sync {
    /// Validates `value` for `field` on `record`.
    ///
    /// # Errors
    ///
    /// [`ValidationError::Rejected`](crate::foundation::ValidationError::Rejected)
    /// for rule violations, any other variant for unexpected failures.
    fn validate(&self, record: &Record, value: &Value, field: &str) -> ValidationResult<bool>;

    /// Transforms a stored value on read.
    ///
    /// `Ok(None)` means "no transform": the raw stored value is returned.
    ///
    /// # Errors
    ///
    /// Whatever the transform raises; it reaches the reader unchanged.
    fn mutate(&self, record: &Record, value: &Value) -> ValidationResult<Option<Value>> {
        let _ = (record, value);
        Ok(None)
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing composition methods.
///
/// Implemented for everything that converts into a [`Validator`] node: every
/// [`Validate`] leaf, the [`And`](crate::combinators::And) and
/// [`Or`](crate::combinators::Or) combinators and `Validator` itself.
///
/// # Examples
///
/// ```rust,ignore
/// use nebula_fields::prelude::*;
///
/// // (small AND even) OR list
/// let rule = int().max_value(10).and_with(even()).or_with(list());
/// ```
pub trait ValidateExt: Into<Validator> + Sized {
    /// Combines with `other` under logical AND.
    ///
    /// Appends to `self` when it already is an AND node, otherwise wraps both
    /// operands into a new AND node.
    fn and_with(self, other: impl Into<Validator>) -> Validator {
        self.into().and_with(other)
    }

    /// Combines with `other` under logical OR.
    ///
    /// Appends to `self` when it already is an OR node, otherwise wraps both
    /// operands into a new OR node.
    fn or_with(self, other: impl Into<Validator>) -> Validator {
        self.into().or_with(other)
    }

    /// Keeps validation as is and transforms values on read.
    ///
    /// `transform` returns `None` to leave a value untouched.
    fn transform<F>(self, transform: F) -> Transform
    where
        F: Fn(&Record, &Value) -> Option<Value> + Send + Sync + 'static,
    {
        Transform::new(self, transform)
    }
}

impl<T: Into<Validator>> ValidateExt for T {}
