//! Prelude module for convenient imports.
//!
//! Provides a single `use nebula_fields::prelude::*;` import that brings
//! in all commonly needed traits, types, validators, and combinators.
//!
//! # Examples
//!
//! ```rust,ignore
//! use nebula_fields::prelude::*;
//!
//! let quantity = int().min_value(1).and_with(int().max_value(100));
//! let tags = list_of(predicate(Value::is_string)).max_size(10);
//! ```

// ============================================================================
// FOUNDATION: Core traits, nodes, errors
// ============================================================================

pub use crate::foundation::{Validate, ValidateExt, ValidationError, ValidationResult, Validator};

// ============================================================================
// MODEL: Schemas, bindings, records
// ============================================================================

pub use crate::model::{FieldBinding, Record, Schema, SchemaBuilder};

// ============================================================================
// VALIDATORS: All built-in validators
// ============================================================================

pub use crate::validators::{
    Bounds, Int, List, Predicate, int, int_range, list, list_of, predicate,
};

// ============================================================================
// COMBINATORS: Composition functions and types
// ============================================================================

pub use crate::combinators::{And, Each, Or, Transform, and_all, each, or_any};

// ============================================================================
// VALUES
// ============================================================================

pub use serde_json::{Value, json};
