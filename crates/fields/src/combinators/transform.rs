//! TRANSFORM combinator - read-time value transforms

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::foundation::{Validate, ValidationResult, Validator};
use crate::model::Record;

type TransformFn = dyn Fn(&Record, &Value) -> Option<Value> + Send + Sync;

/// Wraps a validator with a transform applied when the field is read.
///
/// Validation is delegated to the inner node unchanged. On read, the inner
/// node's own transform runs first (if it has one), then `transform` sees its
/// result. Returning `None` leaves the value as it is.
///
/// # Examples
///
/// ```rust,ignore
/// use nebula_fields::prelude::*;
///
/// // Stored as given, read back doubled.
/// let rule = int().transform(|_, v| v.as_i64().map(|n| json!(n * 2)));
/// ```
#[derive(Clone)]
pub struct Transform {
    inner: Validator,
    transform: Arc<TransformFn>,
}

impl Transform {
    /// Creates a transform over `inner`.
    pub fn new<F>(inner: impl Into<Validator>, transform: F) -> Self
    where
        F: Fn(&Record, &Value) -> Option<Value> + Send + Sync + 'static,
    {
        Self {
            inner: inner.into(),
            transform: Arc::new(transform),
        }
    }

    /// Returns the wrapped validator.
    #[must_use]
    pub fn inner(&self) -> &Validator {
        &self.inner
    }
}

impl fmt::Debug for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transform")
            .field("inner", &self.inner)
            .field("transform", &"<function>")
            .finish()
    }
}

impl Validate for Transform {
    fn validate(&self, record: &Record, value: &Value, field: &str) -> ValidationResult<bool> {
        self.inner.validate(record, value, field)
    }

    fn mutate(&self, record: &Record, value: &Value) -> ValidationResult<Option<Value>> {
        Ok(match self.inner.mutate(record, value)? {
            Some(inner) => (self.transform)(record, &inner).or(Some(inner)),
            None => (self.transform)(record, value),
        })
    }
}
