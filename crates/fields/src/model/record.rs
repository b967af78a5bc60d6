//! Records - per-instance field storage

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

use crate::foundation::{ValidationError, ValidationResult};
use crate::model::{FieldBinding, Schema};

/// One instance of a [`Schema`].
///
/// Holds the raw, pre-transform value of every successfully written field.
/// Storage is allocated on the first successful write. Every write goes
/// through the field's binding, so a stored value always passed validation
/// when it was stored.
///
/// Records are not synchronized; `set` takes `&mut self`.
///
/// # Examples
///
/// ```rust,ignore
/// use nebula_fields::prelude::*;
/// use std::sync::Arc;
///
/// let schema = Arc::new(Schema::builder("User").field("age", int().min_value(0)).build());
/// let mut user = Record::new(&schema);
///
/// user.set("age", 30)?;
/// assert!(user.set("age", -1).unwrap_err().is_rejected());
/// assert_eq!(*user.get("age")?, json!(30));
/// ```
#[derive(Debug, Clone)]
pub struct Record {
    schema: Arc<Schema>,
    values: Option<HashMap<String, Value>>,
}

impl Record {
    /// Creates an empty record of `schema`.
    #[must_use]
    pub fn new(schema: &Arc<Schema>) -> Self {
        Self {
            schema: Arc::clone(schema),
            values: None,
        }
    }

    /// The record's schema.
    #[must_use]
    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    /// Validates `value` against `field`'s rule tree and stores it.
    ///
    /// # Errors
    ///
    /// `UnknownField` for undeclared fields, `Rejected` for invalid values,
    /// or an unexpected error raised by the rule tree. The previously stored
    /// value survives every failure.
    pub fn set(&mut self, field: &str, value: impl Into<Value>) -> ValidationResult<()> {
        let schema = Arc::clone(&self.schema);
        let Some(binding) = schema.binding(field) else {
            return Err(self.unknown(field));
        };
        binding.write(self, value.into())
    }

    /// Reads `field`, applying its read-time transform.
    ///
    /// # Errors
    ///
    /// `UnknownField` for undeclared fields, `NotAssigned` if the field was
    /// never written, or whatever the transform raises.
    pub fn get(&self, field: &str) -> ValidationResult<Cow<'_, Value>> {
        self.binding(field)?.read(self)
    }

    /// The raw stored value of `field`, bypassing any transform.
    #[must_use]
    pub fn raw(&self, field: &str) -> Option<&Value> {
        self.values.as_ref()?.get(field)
    }

    /// Returns true if `field` holds a value.
    #[must_use]
    pub fn is_assigned(&self, field: &str) -> bool {
        self.raw(field).is_some()
    }

    /// Iterates assigned fields and their raw values in schema order.
    pub fn assigned(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.schema
            .field_names()
            .filter_map(move |name| self.raw(name).map(|value| (name, value)))
    }

    pub(crate) fn store(&mut self, field: &str, value: Value) {
        tracing::trace!(schema = self.schema.name(), field, "value stored");
        self.values
            .get_or_insert_with(HashMap::new)
            .insert(field.to_owned(), value);
    }

    fn binding(&self, field: &str) -> ValidationResult<&FieldBinding> {
        self.schema
            .binding(field)
            .ok_or_else(|| self.unknown(field))
    }

    fn unknown(&self, field: &str) -> ValidationError {
        ValidationError::unknown_field(self.schema.name(), field)
    }
}
