//! Write/read protocol of bound fields.

mod common;

use std::sync::Arc;
use std::thread;

use common::{Boom, Outcome, Probe, is_boom};
use nebula_fields::prelude::*;
use pretty_assertions::assert_eq;

fn order_schema() -> Arc<Schema> {
    Arc::new(
        Schema::builder("Order")
            .field("quantity", int().min_value(1).max_value(100))
            .field("lines", list_of(int().min_value(0)).min_size(1))
            .field(
                "sku",
                predicate(Value::is_string)
                    .transform(|_, v| v.as_str().map(|s| json!(s.to_uppercase()))),
            )
            .plain("note")
            .build(),
    )
}

/// Hand-written typed accessors over a record.
struct Order(Record);

impl Order {
    fn new(schema: &Arc<Schema>) -> Self {
        Self(Record::new(schema))
    }

    fn quantity(&self) -> ValidationResult<i64> {
        let value = self.0.get("quantity")?;
        value
            .as_i64()
            .ok_or_else(|| ValidationError::unexpected(anyhow::anyhow!("quantity is not an i64")))
    }

    fn set_quantity(&mut self, quantity: i64) -> ValidationResult<()> {
        self.0.set("quantity", quantity)
    }

    fn sku(&self) -> ValidationResult<String> {
        Ok(self.0.get("sku")?.as_str().unwrap_or_default().to_owned())
    }

    fn set_sku(&mut self, sku: &str) -> ValidationResult<()> {
        self.0.set("sku", sku)
    }
}

#[test]
fn test_valid_write_reads_back() {
    let schema = order_schema();
    let mut order = Record::new(&schema);

    order.set("quantity", 10).unwrap();
    order.set("lines", json!([0, 4])).unwrap();

    assert_eq!(*order.get("quantity").unwrap(), json!(10));
    assert_eq!(*order.get("lines").unwrap(), json!([0, 4]));
}

#[test]
fn test_read_applies_transform_but_storage_keeps_raw_value() {
    let schema = order_schema();
    let mut order = Record::new(&schema);

    order.set("sku", "ab-12").unwrap();

    assert_eq!(*order.get("sku").unwrap(), json!("AB-12"));
    assert_eq!(order.raw("sku"), Some(&json!("ab-12")));
}

#[test]
fn test_rejected_write_keeps_previous_value() {
    let schema = order_schema();
    let mut order = Record::new(&schema);
    order.set("quantity", 7).unwrap();

    for bad in [json!(0), json!(101), json!("7"), json!(7.5), json!(null)] {
        let err = order.set("quantity", bad).unwrap_err();
        assert!(err.is_rejected());
        assert_eq!(*order.get("quantity").unwrap(), json!(7));
    }
}

#[test]
fn test_rejected_first_write_leaves_field_unassigned() {
    let schema = order_schema();
    let mut order = Record::new(&schema);

    assert!(order.set("lines", json!([])).unwrap_err().is_rejected());
    assert!(order.set("lines", json!([1, -1])).unwrap_err().is_rejected());
    assert!(order.get("lines").unwrap_err().is_not_assigned());
    assert!(!order.is_assigned("lines"));
}

#[test]
fn test_read_before_write_is_not_a_default() {
    let schema = order_schema();
    let order = Record::new(&schema);

    let err = order.get("quantity").unwrap_err();
    assert!(matches!(err, ValidationError::NotAssigned { ref field } if field == "quantity"));
}

#[test]
fn test_plain_field_stores_anything() {
    let schema = order_schema();
    let mut order = Record::new(&schema);

    order.set("note", json!({"gift": true})).unwrap();
    assert_eq!(*order.get("note").unwrap(), json!({"gift": true}));
}

#[test]
fn test_unknown_field_is_reported_with_schema_name() {
    let schema = order_schema();
    let mut order = Record::new(&schema);

    let err = order.set("price", 3).unwrap_err();
    assert_eq!(err.to_string(), "`Order` has no field named `price`");
}

#[test]
fn test_unexpected_error_reaches_the_writer_unchanged() {
    let schema = Arc::new(
        Schema::builder("Probe")
            .field("x", Probe::new(Outcome::Pass).and_with(Probe::new(Outcome::Boom)))
            .build(),
    );
    let mut record = Record::new(&schema);

    let err = record.set("x", 1).unwrap_err();
    assert!(is_boom(&err));
    assert!(!record.is_assigned("x"));
}

#[test]
fn test_bindings_from_another_schema_bypass_nothing() {
    let schema = order_schema();
    let lookalike = Arc::new(Schema::builder("Order").plain("quantity").build());
    let mut order = Record::new(&schema);

    assert!(order.set("quantity", -5).unwrap_err().is_rejected());

    let foreign = lookalike.binding("quantity").unwrap();
    let err = foreign.write(&mut order, json!(-5)).unwrap_err();
    assert_eq!(err.to_string(), "`Order` has no field named `quantity`");

    assert!(FieldBinding::plain().write(&mut order, json!(7)).is_err());
    assert!(order.get("quantity").unwrap_err().is_not_assigned());
    assert_eq!(order.raw(""), None);
}

#[test]
fn test_schema_exposes_rule_tree() {
    let schema = Arc::new(
        Schema::builder("T")
            .field("n", int().and_with(int().min_value(0)).or_with(list()))
            .build(),
    );

    let rule = schema.validator("n").unwrap();
    assert!(rule.is_or());
    assert!(rule.children()[0].is_and());
}

#[test]
fn test_typed_accessors_over_record() {
    let schema = order_schema();
    let mut order = Order::new(&schema);

    assert!(order.quantity().unwrap_err().is_not_assigned());
    order.set_quantity(3).unwrap();
    assert!(order.set_quantity(-3).unwrap_err().is_rejected());
    assert_eq!(order.quantity().unwrap(), 3);

    order.set_sku("x1").unwrap();
    assert_eq!(order.sku().unwrap(), "X1");
}

#[test]
fn test_mutate_error_surfaces_on_read() {
    #[derive(Debug)]
    struct Exploding;

    impl Validate for Exploding {
        fn validate(&self, _: &Record, _: &Value, _: &str) -> ValidationResult<bool> {
            Ok(true)
        }

        fn mutate(&self, _: &Record, _: &Value) -> ValidationResult<Option<Value>> {
            Err(ValidationError::unexpected(Boom))
        }
    }

    let schema = Arc::new(Schema::builder("T").field("x", Exploding).build());
    let mut record = Record::new(&schema);
    record.set("x", 1).unwrap();

    assert!(is_boom(&record.get("x").unwrap_err()));
    assert_eq!(record.raw("x"), Some(&json!(1)));
}

#[test]
fn test_leaves_can_inspect_the_record() {
    #[derive(Debug)]
    struct OnlyOnce;

    impl Validate for OnlyOnce {
        fn validate(&self, record: &Record, _: &Value, field: &str) -> ValidationResult<bool> {
            Ok(!record.is_assigned(field))
        }
    }

    let schema = Arc::new(Schema::builder("T").field("id", OnlyOnce).build());
    let mut record = Record::new(&schema);

    record.set("id", 1).unwrap();
    assert!(record.set("id", 2).unwrap_err().is_rejected());
    assert_eq!(*record.get("id").unwrap(), json!(1));
}

#[test]
fn test_schema_is_shared_across_threads() {
    let schema = order_schema();

    let handles: Vec<_> = (1..=4)
        .map(|n| {
            let schema = Arc::clone(&schema);
            thread::spawn(move || {
                let mut record = Record::new(&schema);
                record.set("quantity", n).unwrap();
                assert!(record.set("quantity", 0).is_err());
                record.get("quantity").unwrap().as_i64()
            })
        })
        .collect();

    let mut seen: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    seen.sort_unstable();
    assert_eq!(seen, vec![Some(1), Some(2), Some(3), Some(4)]);
}
