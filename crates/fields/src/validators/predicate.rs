//! Closure-backed leaf validator

use std::fmt;

use serde_json::Value;

use crate::foundation::{Validate, ValidationResult};
use crate::model::Record;

/// A leaf that accepts a value when the wrapped closure returns `true`.
///
/// # Examples
///
/// ```rust,ignore
/// use nebula_fields::prelude::*;
///
/// let tags = list_of(predicate(Value::is_string));
/// ```
#[derive(Clone)]
pub struct Predicate<F> {
    check: F,
}

impl<F> Predicate<F>
where
    F: Fn(&Value) -> bool,
{
    /// Wraps `check` as a leaf.
    pub const fn new(check: F) -> Self {
        Self { check }
    }
}

impl<F> fmt::Debug for Predicate<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate")
            .field("check", &"<function>")
            .finish()
    }
}

impl<F> Validate for Predicate<F>
where
    F: Fn(&Value) -> bool + Send + Sync,
{
    fn validate(&self, _record: &Record, value: &Value, _field: &str) -> ValidationResult<bool> {
        Ok((self.check)(value))
    }
}

/// Creates a leaf from a closure.
pub const fn predicate<F>(check: F) -> Predicate<F>
where
    F: Fn(&Value) -> bool + Send + Sync,
{
    Predicate::new(check)
}
