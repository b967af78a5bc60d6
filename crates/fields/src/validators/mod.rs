//! Built-in validators
//!
//! - [`Int`]: integral numbers within optional bounds
//! - [`List`]: arrays within optional size bounds, with an optional element rule
//! - [`Predicate`]: any `Fn(&Value) -> bool`
//! - [`Bounds`]: the shared, serde-friendly bound configuration

pub mod bounds;
pub mod int;
pub mod list;
pub mod predicate;

pub use bounds::Bounds;
pub use int::{Int, int, int_range};
pub use list::{List, list, list_of};
pub use predicate::{Predicate, predicate};
