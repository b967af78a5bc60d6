//! Validator combinators
//!
//! - [`And`] / [`Or`]: ordered child lists with the short-circuit and
//!   error-absorption rules of the rule-tree engine
//! - [`Each`]: element-wise validation of container values
//! - [`Transform`]: read-time transform on top of any validator

pub mod and;
pub mod each;
pub mod or;
pub mod transform;

pub use and::{And, and_all};
pub use each::{Each, each};
pub use or::{Or, or_any};
pub use transform::Transform;
