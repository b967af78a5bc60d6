//! EACH combinator - validates each element of a container value

use std::borrow::Cow;

use serde_json::Value;

use crate::foundation::{Validate, ValidationError, ValidationResult, Validator};
use crate::model::Record;

// ============================================================================
// EACH COMBINATOR
// ============================================================================

/// Validates each element of a container value with an optional child.
///
/// Without a child every value is accepted. With a child, elements are
/// visited in order and the first one the child answers `false` for rejects
/// the whole value; later elements are not evaluated.
///
/// Iterable values are arrays (items), objects (keys, as strings) and strings
/// (characters, as one-character strings).
///
/// # Examples
///
/// ```rust,ignore
/// use nebula_fields::prelude::*;
///
/// let rule = each(int().min_value(0));
/// assert!(rule.validate(&record, &json!([1, 2, 3]), "ids")?);
/// assert!(rule.validate(&record, &json!([1, -2]), "ids").unwrap_err().is_rejected());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Each {
    inner: Option<Validator>,
}

impl Each {
    /// Creates an EACH combinator applying `inner` to every element.
    pub fn new(inner: impl Into<Validator>) -> Self {
        Self {
            inner: Some(inner.into()),
        }
    }

    /// Creates an EACH combinator without an element validator.
    #[must_use]
    pub fn any() -> Self {
        Self { inner: None }
    }

    /// Returns the element validator, if any.
    #[must_use]
    pub fn inner(&self) -> Option<&Validator> {
        self.inner.as_ref()
    }
}

impl Validate for Each {
    fn validate(&self, record: &Record, value: &Value, field: &str) -> ValidationResult<bool> {
        let Some(inner) = &self.inner else {
            return Ok(true);
        };

        for (index, element) in elements(value)?.enumerate() {
            if !inner.validate(record, &element, field)? {
                tracing::trace!(field, index, "element rejected");
                return Err(ValidationError::Rejected);
            }
        }
        Ok(true)
    }
}

/// Creates an EACH combinator.
pub fn each(validator: impl Into<Validator>) -> Each {
    Each::new(validator)
}

type Elements<'a> = Box<dyn Iterator<Item = Cow<'a, Value>> + 'a>;

fn elements(value: &Value) -> ValidationResult<Elements<'_>> {
    match value {
        Value::Array(items) => Ok(Box::new(items.iter().map(Cow::Borrowed))),
        Value::Object(map) => Ok(Box::new(
            map.keys().map(|key| Cow::Owned(Value::String(key.clone()))),
        )),
        Value::String(text) => Ok(Box::new(
            text.chars().map(|c| Cow::Owned(Value::String(c.to_string()))),
        )),
        Value::Number(_) => Err(ValidationError::NotIterable { kind: "number" }),
        Value::Bool(_) => Err(ValidationError::NotIterable { kind: "bool" }),
        Value::Null => Err(ValidationError::NotIterable { kind: "null" }),
    }
}

// ============================================================================
// TESTS
// ============================================================================
