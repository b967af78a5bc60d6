//! Bounded integer validator

use serde_json::Value;

use crate::foundation::{Validate, ValidationResult};
use crate::model::Record;
use crate::validators::Bounds;

/// Accepts integral JSON numbers within optional inclusive bounds.
///
/// Floats (even `3.0`) and booleans are not integers. Every configured check
/// must hold: a value never passes on the upper bound alone.
///
/// # Examples
///
/// ```rust,ignore
/// use nebula_fields::prelude::*;
///
/// let percent = int().min_value(0).max_value(100);
/// assert!(percent.validate(&record, &json!(42), "p")?);
/// assert!(!percent.validate(&record, &json!(101), "p")?);
/// assert!(!percent.validate(&record, &json!("42"), "p")?);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Int {
    bounds: Bounds<i64>,
}

impl Int {
    /// Creates an unbounded integer validator.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_bounds(Bounds::unbounded())
    }

    /// Creates an integer validator from configured bounds.
    #[must_use]
    pub const fn with_bounds(bounds: Bounds<i64>) -> Self {
        Self { bounds }
    }

    /// Sets the inclusive lower bound.
    #[must_use = "builder methods must be chained or built"]
    pub const fn min_value(mut self, min: i64) -> Self {
        self.bounds.min = Some(min);
        self
    }

    /// Sets the inclusive upper bound.
    #[must_use = "builder methods must be chained or built"]
    pub const fn max_value(mut self, max: i64) -> Self {
        self.bounds.max = Some(max);
        self
    }

    /// Returns the configured bounds.
    #[must_use]
    pub const fn bounds(&self) -> &Bounds<i64> {
        &self.bounds
    }
}

impl Validate for Int {
    fn validate(&self, _record: &Record, value: &Value, _field: &str) -> ValidationResult<bool> {
        let Some(number) = integer(value) else {
            return Ok(false);
        };
        Ok(self.bounds.map(i128::from).contains(&number))
    }
}

/// Widens any integral JSON number (signed or unsigned) to `i128`.
fn integer(value: &Value) -> Option<i128> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .map(i128::from)
            .or_else(|| n.as_u64().map(i128::from)),
        _ => None,
    }
}

/// Creates an unbounded integer validator.
#[must_use]
pub const fn int() -> Int {
    Int::new()
}

/// Creates an integer validator for `min..=max`.
#[must_use]
pub const fn int_range(min: i64, max: i64) -> Int {
    Int::with_bounds(Bounds::between(min, max))
}
