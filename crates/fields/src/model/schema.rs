//! Schemas - declared types and their field tables

use indexmap::IndexMap;
use indexmap::map::Entry;

use crate::foundation::Validator;
use crate::model::FieldBinding;

/// A declared type: a name plus an ordered table of field bindings.
///
/// Schemas are immutable once built and are shared between records through
/// an `Arc`.
///
/// # Examples
///
/// ```rust,ignore
/// use nebula_fields::prelude::*;
///
/// let schema = Schema::builder("Point")
///     .field("x", int())
///     .field("y", int())
///     .plain("label")
///     .build();
///
/// assert_eq!(schema.field_names().collect::<Vec<_>>(), ["x", "y", "label"]);
/// ```
#[derive(Debug, Clone)]
pub struct Schema {
    name: String,
    fields: IndexMap<String, FieldBinding>,
}

impl Schema {
    /// Starts declaring a schema called `name`.
    pub fn builder(name: impl Into<String>) -> SchemaBuilder {
        SchemaBuilder {
            name: name.into(),
            fields: IndexMap::new(),
        }
    }

    /// The schema name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The binding declared for `field`.
    #[must_use]
    pub fn binding(&self, field: &str) -> Option<&FieldBinding> {
        self.fields.get(field)
    }

    /// The rule tree bound to `field`.
    ///
    /// `None` for unknown fields and for fields declared without a validator.
    #[must_use]
    pub fn validator(&self, field: &str) -> Option<&Validator> {
        self.binding(field).and_then(FieldBinding::validator)
    }

    /// Returns true if `field` is declared.
    #[must_use]
    pub fn has_field(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Field names in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Bindings in declaration order.
    pub fn bindings(&self) -> impl Iterator<Item = &FieldBinding> {
        self.fields.values()
    }

    /// Number of declared fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the schema declares no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Builder for [`Schema`].
///
/// Each declared field is bound (named) as it is added. Declaring the same
/// name twice keeps the position of the first declaration and the binding of
/// the last one.
#[derive(Debug)]
#[must_use = "builder methods must be chained or built"]
pub struct SchemaBuilder {
    name: String,
    fields: IndexMap<String, FieldBinding>,
}

impl SchemaBuilder {
    /// Declares `name` guarded by `validator`.
    pub fn field(self, name: impl Into<String>, validator: impl Into<Validator>) -> Self {
        self.declare(name.into(), FieldBinding::new(validator))
    }

    /// Declares `name` without a validator.
    pub fn plain(self, name: impl Into<String>) -> Self {
        self.declare(name.into(), FieldBinding::plain())
    }

    /// Finishes the declaration.
    pub fn build(self) -> Schema {
        tracing::trace!(schema = %self.name, fields = self.fields.len(), "schema built");
        Schema {
            name: self.name,
            fields: self.fields,
        }
    }

    fn declare(mut self, name: String, mut binding: FieldBinding) -> Self {
        binding.bind(&self.name, name.clone());
        match self.fields.entry(name) {
            Entry::Occupied(mut slot) => {
                tracing::warn!(
                    schema = %self.name,
                    field = %slot.key(),
                    "field declared twice, keeping the last declaration"
                );
                slot.insert(binding);
            }
            Entry::Vacant(slot) => {
                slot.insert(binding);
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::{int, list};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_fields_keep_declaration_order() {
        let schema = Schema::builder("T")
            .field("b", int())
            .plain("a")
            .field("c", list())
            .build();

        assert_eq!(schema.field_names().collect::<Vec<_>>(), vec!["b", "a", "c"]);
        assert_eq!(schema.len(), 3);
    }

    #[test]
    fn test_bindings_are_named() {
        let schema = Schema::builder("T").field("age", int()).build();
        assert_eq!(schema.binding("age").unwrap().name(), "age");
    }

    #[test]
    fn test_bindings_follow_field_order() {
        let schema = Schema::builder("T").plain("b").field("a", int()).build();

        let names: Vec<_> = schema.bindings().map(FieldBinding::name).collect();
        assert_eq!(names, vec!["b", "a"]);
        assert!(schema.bindings().next().is_some_and(|b| b.validator().is_none()));
    }

    #[test]
    fn test_validator_lookup() {
        let schema = Schema::builder("T").field("age", int()).plain("note").build();

        assert!(schema.validator("age").is_some_and(Validator::is_leaf));
        assert!(schema.validator("note").is_none());
        assert!(schema.validator("missing").is_none());
        assert!(schema.has_field("note"));
    }

    #[test]
    fn test_redeclaration_keeps_last_binding() {
        let schema = Schema::builder("T")
            .field("x", int())
            .plain("y")
            .plain("x")
            .build();

        assert_eq!(schema.field_names().collect::<Vec<_>>(), vec!["x", "y"]);
        assert!(schema.validator("x").is_none());
    }
}
