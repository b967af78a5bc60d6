//! Macros for creating validators with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`validator!`] — Create a leaf validator (struct + `Validate` impl + factory fn)
//! - [`compose!`] — AND-chain multiple validators
//! - [`any_of!`] — OR-chain multiple validators
//!
//! # Examples
//!
//! ```rust,ignore
//! use nebula_fields::validator;
//!
//! // Unit validator (no fields)
//! validator! {
//!     pub NonEmpty;
//!     rule(value) { value.as_str().is_some_and(|s| !s.is_empty()) }
//!     fn non_empty();
//! }
//!
//! // Struct with fields
//! validator! {
//!     #[derive(Copy, PartialEq, Eq, Hash)]
//!     pub MultipleOf { divisor: i64 };
//!     rule(self, value) { value.as_i64().is_some_and(|n| n % self.divisor == 0) }
//!     fn multiple_of(divisor: i64);
//! }
//! ```

// ============================================================================
// VALIDATOR MACRO
// ============================================================================

/// Creates a leaf validator: struct definition, `Validate` implementation,
/// constructor, and factory function.
///
/// The `rule` block receives the candidate as `&serde_json::Value` and
/// evaluates to `bool`; `false` rejects the value.
///
/// `#[derive(Debug, Clone)]` is always applied. Add extra derives via `#[derive(...)]`.
///
/// # Variants
///
/// **Unit validator** (zero-sized, no fields):
/// ```rust,ignore
/// validator! {
///     pub NonEmpty;
///     rule(value) { value.as_str().is_some_and(|s| !s.is_empty()) }
///     fn non_empty();
/// }
/// ```
///
/// **Struct with fields** (auto `new` from all fields):
/// ```rust,ignore
/// validator! {
///     #[derive(Copy, PartialEq, Eq, Hash)]
///     pub MultipleOf { divisor: i64 };
///     rule(self, value) { value.as_i64().is_some_and(|n| n % self.divisor == 0) }
///     fn multiple_of(divisor: i64);
/// }
/// ```
#[macro_export]
macro_rules! validator {
    // ── Variant 1a: Unit validator (no fields) + factory fn ──────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident;
        rule($inp:ident) $rule:block
        fn $factory:ident();
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name;
            rule($inp) $rule
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Variant 1b: Unit validator (no fields), no factory ───────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident;
        rule($inp:ident) $rule:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::foundation::Validate for $name {
            #[allow(unused_variables)]
            fn validate(
                &self,
                _record: &$crate::model::Record,
                $inp: &$crate::Value,
                _field: &str,
            ) -> $crate::foundation::ValidationResult<bool> {
                Ok($rule)
            }
        }
    };

    // ── Variant 2a: Struct with fields + auto new + factory fn ───────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        rule($self_:ident, $inp:ident) $rule:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ };
            rule($self_, $inp) $rule
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Variant 2b: Struct with fields + auto new, no factory ────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        rule($self_:ident, $inp:ident) $rule:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl $crate::foundation::Validate for $name {
            #[allow(unused_variables)]
            fn validate(
                &$self_,
                _record: &$crate::model::Record,
                $inp: &$crate::Value,
                _field: &str,
            ) -> $crate::foundation::ValidationResult<bool> {
                Ok($rule)
            }
        }
    };
}

// ============================================================================
// COMPOSE MACRO
// ============================================================================

/// Composes multiple validators using AND logic into one flat AND node.
///
/// ```rust,ignore
/// let validator = compose![int(), even(), int().max_value(100)];
/// ```
#[macro_export]
macro_rules! compose {
    ($first:expr $(,)?) => {
        $crate::foundation::Validator::from($first)
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $crate::foundation::Validator::from($first)$(.and_with($rest))+
    };
}

// ============================================================================
// ANY_OF MACRO
// ============================================================================

/// Composes multiple validators using OR logic into one flat OR node.
///
/// ```rust,ignore
/// let validator = any_of![int(), list_of(int())];
/// ```
#[macro_export]
macro_rules! any_of {
    ($first:expr $(,)?) => {
        $crate::foundation::Validator::from($first)
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $crate::foundation::Validator::from($first)$(.or_with($rest))+
    };
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use crate::foundation::Validate;
    use crate::model::{Record, Schema};
    use crate::validators::int;
    use serde_json::json;
    use std::sync::Arc;

    fn record() -> Record {
        Record::new(&Arc::new(Schema::builder("Test").build()))
    }

    // Test 1: Unit validator (no fields)
    validator! {
        /// A test unit validator.
        TestNonEmpty;
        rule(value) { value.as_str().is_some_and(|s| !s.is_empty()) }
        fn test_non_empty();
    }

    #[test]
    fn test_unit_validator() {
        let v = TestNonEmpty;
        assert!(v.validate(&record(), &json!("hello"), "f").unwrap());
        assert!(!v.validate(&record(), &json!(""), "f").unwrap());
    }

    #[test]
    fn test_unit_factory() {
        let v = test_non_empty();
        assert!(v.validate(&record(), &json!("x"), "f").unwrap());
    }

    // Test 2: Struct with fields + auto new
    validator! {
        #[derive(Copy, PartialEq, Eq, Hash)]
        TestMultipleOf { divisor: i64 };
        rule(self, value) { value.as_i64().is_some_and(|n| n % self.divisor == 0) }
        fn test_multiple_of(divisor: i64);
    }

    #[test]
    fn test_struct_validator() {
        let v = TestMultipleOf { divisor: 3 };
        assert!(v.validate(&record(), &json!(9), "f").unwrap());
        assert!(!v.validate(&record(), &json!(10), "f").unwrap());
    }

    #[test]
    fn test_struct_new_and_factory() {
        assert_eq!(TestMultipleOf::new(5), test_multiple_of(5));
    }

    #[test]
    fn test_compose_flattens() {
        let v = compose![int(), test_multiple_of(2), int().max_value(10)];
        assert!(v.is_and());
        assert_eq!(v.children().len(), 3);
        assert!(v.validate(&record(), &json!(4), "f").unwrap());
        assert!(v.validate(&record(), &json!(5), "f").unwrap_err().is_rejected());
    }

    #[test]
    fn test_any_of_flattens() {
        let v = any_of![test_multiple_of(2), test_multiple_of(3), test_non_empty()];
        assert!(v.is_or());
        assert_eq!(v.children().len(), 3);
        assert!(v.validate(&record(), &json!(9), "f").unwrap());
        assert!(v.validate(&record(), &json!(7), "f").is_err());
    }

    #[test]
    fn test_single_operand_is_the_node_itself() {
        let v = compose![int()];
        assert!(v.is_leaf());
    }
}
