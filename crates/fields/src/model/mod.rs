//! Declared types, field bindings and instance storage
//!
//! - [`Schema`] / [`SchemaBuilder`]: a declared type and its field table
//! - [`FieldBinding`]: routes writes through `validate` and reads through
//!   `mutate` for one field
//! - [`Record`]: one instance's stored values
//!
//! Typed accessors are written by hand on top of a record:
//!
//! ```rust,ignore
//! struct Order(Record);
//!
//! impl Order {
//!     fn quantity(&self) -> ValidationResult<i64> {
//!         Ok(self.0.get("quantity")?.as_i64().unwrap_or_default())
//!     }
//!
//!     fn set_quantity(&mut self, quantity: i64) -> ValidationResult<()> {
//!         self.0.set("quantity", quantity)
//!     }
//! }
//! ```

mod binding;
mod record;
mod schema;

pub use binding::FieldBinding;
pub use record::Record;
pub use schema::{Schema, SchemaBuilder};
