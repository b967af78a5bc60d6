//! Rule-tree nodes
//!
//! A [`Validator`] is either a leaf (any [`Validate`] implementor) or one of
//! the two combinators. Composition follows two rules:
//!
//! - an AND node absorbs further `and_with` operands, an OR node absorbs
//!   further `or_with` operands (chains flatten left to right);
//! - any other pairing wraps both operands into a fresh two-child node, so
//!   AND binds tighter than OR.
//!
//! The right-hand operand is never flattened into the left one.

use std::sync::Arc;

use serde_json::Value;

use crate::combinators::{And, Or};
use crate::foundation::{Validate, ValidationResult};
use crate::model::Record;

/// A node of a validation rule tree.
#[derive(Debug, Clone)]
pub enum Validator {
    /// A concrete rule.
    Leaf(Arc<dyn Validate>),
    /// All children must pass.
    And(And),
    /// At least one child must pass.
    Or(Or),
}

impl Validator {
    /// Lifts a leaf into a node.
    pub fn leaf<V: Validate + 'static>(validator: V) -> Self {
        Self::Leaf(Arc::new(validator))
    }

    /// Combines with `other` under logical AND.
    #[must_use]
    pub fn and_with(self, other: impl Into<Validator>) -> Self {
        match self {
            Self::And(mut and) => {
                and.push(other);
                Self::And(and)
            }
            this => Self::And(And::new(vec![this, other.into()])),
        }
    }

    /// Combines with `other` under logical OR.
    #[must_use]
    pub fn or_with(self, other: impl Into<Validator>) -> Self {
        match self {
            Self::Or(mut or) => {
                or.push(other);
                Self::Or(or)
            }
            this => Self::Or(Or::new(vec![this, other.into()])),
        }
    }

    /// Evaluates the node against `value`.
    ///
    /// # Errors
    ///
    /// See [`And::validate`] and [`Or::validate`] for the combinator rules;
    /// leaves report whatever they raise.
    pub fn validate(&self, record: &Record, value: &Value, field: &str) -> ValidationResult<bool> {
        match self {
            Self::Leaf(leaf) => leaf.validate(record, value, field),
            Self::And(and) => and.validate(record, value, field),
            Self::Or(or) => or.validate(record, value, field),
        }
    }

    /// Applies the node's read-time transform.
    ///
    /// Combinators never transform.
    ///
    /// # Errors
    ///
    /// Whatever the leaf's transform raises.
    pub fn mutate(&self, record: &Record, value: &Value) -> ValidationResult<Option<Value>> {
        match self {
            Self::Leaf(leaf) => leaf.mutate(record, value),
            Self::And(_) | Self::Or(_) => Ok(None),
        }
    }

    /// Children of a combinator node, in evaluation order. Empty for leaves.
    #[must_use]
    pub fn children(&self) -> &[Validator] {
        match self {
            Self::Leaf(_) => &[],
            Self::And(and) => and.validators(),
            Self::Or(or) => or.validators(),
        }
    }

    /// Returns true for AND nodes.
    #[must_use]
    pub fn is_and(&self) -> bool {
        matches!(self, Self::And(_))
    }

    /// Returns true for OR nodes.
    #[must_use]
    pub fn is_or(&self) -> bool {
        matches!(self, Self::Or(_))
    }

    /// Returns true for leaves.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    /// Structural identity: leaves compare by instance, combinators by kind
    /// and children.
    #[must_use]
    pub fn same_shape(&self, other: &Validator) -> bool {
        match (self, other) {
            (Self::Leaf(a), Self::Leaf(b)) => Arc::ptr_eq(a, b),
            (Self::And(_), Self::And(_)) | (Self::Or(_), Self::Or(_)) => {
                self.children().len() == other.children().len()
                    && self
                        .children()
                        .iter()
                        .zip(other.children())
                        .all(|(a, b)| a.same_shape(b))
            }
            _ => false,
        }
    }
}

impl<V: Validate + 'static> From<V> for Validator {
    fn from(validator: V) -> Self {
        Self::leaf(validator)
    }
}

impl From<And> for Validator {
    fn from(and: And) -> Self {
        Self::And(and)
    }
}

impl From<Or> for Validator {
    fn from(or: Or) -> Self {
        Self::Or(or)
    }
}
