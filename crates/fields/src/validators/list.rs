//! Bounded, optionally typed list validator

use serde_json::Value;

use crate::combinators::Each;
use crate::foundation::{Validate, ValidationResult, Validator};
use crate::model::Record;
use crate::validators::Bounds;

/// Accepts JSON arrays within optional inclusive size bounds whose elements
/// all satisfy an optional element validator.
///
/// The type and size checks answer `Ok(false)` and run before any element
/// is looked at. The element check then follows [`Each`]: the first failing
/// element rejects the value.
///
/// # Examples
///
/// ```rust,ignore
/// use nebula_fields::prelude::*;
///
/// let pair = list_of(int()).min_size(2).max_size(2);
/// assert!(pair.validate(&record, &json!([1, 2]), "pair")?);
/// assert!(!pair.validate(&record, &json!([1]), "pair")?);
/// ```
#[derive(Debug, Clone, Default)]
pub struct List {
    elements: Each,
    size: Bounds<usize>,
}

impl List {
    /// Creates a list validator accepting any array.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a list validator whose elements must satisfy `predicate`.
    pub fn of(predicate: impl Into<Validator>) -> Self {
        Self {
            elements: Each::new(predicate),
            size: Bounds::unbounded(),
        }
    }

    /// Replaces the size bounds.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_size(mut self, size: Bounds<usize>) -> Self {
        self.size = size;
        self
    }

    /// Sets the inclusive minimum number of elements.
    #[must_use = "builder methods must be chained or built"]
    pub fn min_size(mut self, min: usize) -> Self {
        self.size.min = Some(min);
        self
    }

    /// Sets the inclusive maximum number of elements.
    #[must_use = "builder methods must be chained or built"]
    pub fn max_size(mut self, max: usize) -> Self {
        self.size.max = Some(max);
        self
    }

    /// Returns the size bounds.
    #[must_use]
    pub fn size(&self) -> &Bounds<usize> {
        &self.size
    }

    /// Returns the element validator, if any.
    #[must_use]
    pub fn predicate(&self) -> Option<&Validator> {
        self.elements.inner()
    }
}

impl Validate for List {
    fn validate(&self, record: &Record, value: &Value, field: &str) -> ValidationResult<bool> {
        let Some(items) = value.as_array() else {
            return Ok(false);
        };
        if !self.size.contains(&items.len()) {
            return Ok(false);
        }
        self.elements.validate(record, value, field)
    }
}

/// Creates a list validator accepting any array.
#[must_use]
pub fn list() -> List {
    List::new()
}

/// Creates a list validator whose elements must satisfy `predicate`.
pub fn list_of(predicate: impl Into<Validator>) -> List {
    List::of(predicate)
}
