//! Field bindings - the write/read protocol for one declared field

use std::borrow::Cow;
use std::ptr;

use serde_json::Value;

use crate::foundation::{ValidationError, ValidationResult, Validator};
use crate::model::Record;

/// Binds one field name to its rule tree.
///
/// Created when a field is declared and named once by
/// [`SchemaBuilder`](crate::model::SchemaBuilder) through [`bind`](Self::bind).
/// A binding without a validator accepts every value and never transforms.
///
/// `write` and `read` only operate on records of the schema that owns the
/// binding; any other binding is treated as an unknown field.
#[derive(Debug, Clone)]
pub struct FieldBinding {
    name: String,
    validator: Option<Validator>,
}

impl FieldBinding {
    /// Creates an unnamed binding guarded by `validator`.
    pub fn new(validator: impl Into<Validator>) -> Self {
        Self {
            name: String::new(),
            validator: Some(validator.into()),
        }
    }

    /// Creates an unnamed binding that accepts any value.
    #[must_use]
    pub fn plain() -> Self {
        Self {
            name: String::new(),
            validator: None,
        }
    }

    /// Records the canonical field name. Called once per field while the
    /// owning schema is built.
    pub(crate) fn bind(&mut self, owner: &str, name: impl Into<String>) {
        self.name = name.into();
        tracing::trace!(schema = owner, field = %self.name, "field bound");
    }

    /// The canonical field name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The root of the field's rule tree, if any.
    #[must_use]
    pub fn validator(&self) -> Option<&Validator> {
        self.validator.as_ref()
    }

    /// Validates `value` and stores it verbatim on success.
    ///
    /// # Errors
    ///
    /// `UnknownField` if the binding does not belong to `record`'s schema.
    /// `Rejected` when the rule tree answers `false` or rejects; unexpected
    /// errors pass through unchanged. The record is untouched in every case.
    pub fn write(&self, record: &mut Record, value: Value) -> ValidationResult<()> {
        self.check_owner(record)?;
        if let Some(validator) = &self.validator {
            let accepted = match validator.validate(record, &value, &self.name) {
                Ok(accepted) => accepted,
                Err(error) => {
                    tracing::debug!(
                        schema = record.schema().name(),
                        field = %self.name,
                        %error,
                        "write failed"
                    );
                    return Err(error);
                }
            };
            if !accepted {
                tracing::debug!(
                    schema = record.schema().name(),
                    field = %self.name,
                    "write rejected"
                );
                return Err(ValidationError::Rejected);
            }
        }

        record.store(&self.name, value);
        Ok(())
    }

    /// Reads the stored value through the rule tree's transform.
    ///
    /// The stored value is returned borrowed when the tree declines to
    /// transform it. Values are never re-validated on read.
    ///
    /// # Errors
    ///
    /// `UnknownField` if the binding does not belong to `record`'s schema,
    /// `NotAssigned` if nothing was ever stored, otherwise whatever the
    /// transform raises.
    pub fn read<'r>(&self, record: &'r Record) -> ValidationResult<Cow<'r, Value>> {
        self.check_owner(record)?;
        let raw = record
            .raw(&self.name)
            .ok_or_else(|| ValidationError::not_assigned(&self.name))?;

        let Some(validator) = &self.validator else {
            return Ok(Cow::Borrowed(raw));
        };
        Ok(match validator.mutate(record, raw)? {
            Some(transformed) => Cow::Owned(transformed),
            None => Cow::Borrowed(raw),
        })
    }

    /// Only the schema's own binding instance may touch its field.
    fn check_owner(&self, record: &Record) -> ValidationResult<()> {
        let schema = record.schema();
        match schema.binding(&self.name) {
            Some(owned) if ptr::eq(owned, self) => Ok(()),
            _ => Err(ValidationError::unknown_field(schema.name(), &self.name)),
        }
    }
}
