//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the validation system:
//!
//! - **Traits**: [`Validate`] (the leaf contract), [`ValidateExt`] (composition)
//! - **Nodes**: [`Validator`], the rule-tree node
//! - **Errors**: [`ValidationError`], [`ValidationResult`]
//!
//! # Architecture
//!
//! ## 1. Dynamic values
//!
//! Field values are [`serde_json::Value`]s. A leaf's type check is a check on
//! the value's variant:
//!
//! ```rust,ignore
//! use nebula_fields::prelude::*;
//!
//! let rule = int();
//! assert!(rule.validate(&record, &json!(5), "age")?);
//! assert!(!rule.validate(&record, &json!("5"), "age")?);
//! ```
//!
//! ## 2. Composition
//!
//! ```rust,ignore
//! let rule = int().min_value(0)
//!     .and_with(int().max_value(10))
//!     .or_with(list());
//! ```
//!
//! ## 3. Expected vs unexpected failures
//!
//! A leaf rejects a value by returning `Ok(false)` or
//! `Err(ValidationError::Rejected)`. Anything else it raises is unexpected
//! and only absorbed by a combinator that has already recorded a rejection.

// Module declarations
pub mod error;
pub mod node;
pub mod traits;

// Re-export everything at the foundation level for convenience
pub use error::{ValidationError, ValidationResult};
pub use node::Validator;
pub use traits::{Validate, ValidateExt};
