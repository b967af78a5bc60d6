//! Inclusive bounds shared by the numeric and size validators
//!
//! `Bounds` is plain data so hosts can keep limits in their own
//! configuration and deserialize them with serde.

use serde::{Deserialize, Serialize};

/// Optional inclusive lower and upper bounds.
///
/// An unset side is unbounded. A bound of zero is a real bound.
///
/// # Examples
///
/// ```
/// use nebula_fields::validators::Bounds;
///
/// let bounds = Bounds::between(0, 10);
/// assert!(bounds.contains(&0));
/// assert!(!bounds.contains(&11));
///
/// let config: Bounds<i64> = serde_json::from_str(r#"{ "max": 0 }"#).unwrap();
/// assert!(!config.contains(&1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Bounds<T> {
    /// Inclusive lower bound.
    #[serde(default)]
    pub min: Option<T>,
    /// Inclusive upper bound.
    #[serde(default)]
    pub max: Option<T>,
}

impl<T> Bounds<T> {
    /// Creates bounds from optional sides.
    pub const fn new(min: Option<T>, max: Option<T>) -> Self {
        Self { min, max }
    }

    /// No bounds at all.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self::new(None, None)
    }

    /// Lower bound only.
    pub const fn at_least(min: T) -> Self {
        Self::new(Some(min), None)
    }

    /// Upper bound only.
    pub const fn at_most(max: T) -> Self {
        Self::new(None, Some(max))
    }

    /// Both bounds.
    pub const fn between(min: T, max: T) -> Self {
        Self::new(Some(min), Some(max))
    }

    /// Converts both sides with `f`.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Bounds<U> {
        Bounds {
            min: self.min.map(&mut f),
            max: self.max.map(f),
        }
    }

    /// Returns true if neither side is set.
    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

impl<T: PartialOrd> Bounds<T> {
    /// Returns true if `value` lies within every configured side.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.min.as_ref().is_none_or(|min| value >= min)
            && self.max.as_ref().is_none_or(|max| value <= max)
    }
}

impl<T> Default for Bounds<T> {
    fn default() -> Self {
        Self::unbounded()
    }
}
