//! # nebula-fields
//!
//! Declarative field validation for dynamically typed records.
//!
//! A [`Schema`](model::Schema) declares named fields and binds each one to a
//! rule tree. Writes on a [`Record`](model::Record) are routed through the
//! tree's `validate`, reads through its `mutate` hook.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use nebula_fields::prelude::*;
//! use std::sync::Arc;
//!
//! let schema = Arc::new(
//!     Schema::builder("Order")
//!         .field("quantity", int().min_value(1).max_value(100))
//!         .field("tags", list_of(predicate(Value::is_string)).max_size(5))
//!         .build(),
//! );
//!
//! let mut order = Record::new(&schema);
//! order.set("quantity", 3)?;
//! assert!(order.set("quantity", 0).unwrap_err().is_rejected());
//! assert_eq!(*order.get("quantity")?, json!(3));
//! ```
//!
//! ## Composing rules
//!
//! Every leaf and combinator supports [`and_with`](foundation::ValidateExt::and_with)
//! and [`or_with`](foundation::ValidateExt::or_with). Chained ANDs flatten into
//! one node, chained ORs flatten into one node, and mixing the two wraps, so
//! `a.and_with(b).or_with(c)` groups as `(a AND b) OR c`.
//!
//! ## Built-in Validators
//!
//! - **Numeric**: [`Int`](validators::Int)
//! - **Collection**: [`List`](validators::List), [`Each`](combinators::Each)
//! - **Ad hoc**: [`Predicate`](validators::Predicate), the [`validator!`] macro

pub mod combinators;
pub mod foundation;
mod macros;
pub mod model;
pub mod prelude;
pub mod validators;

pub use serde_json::Value;
