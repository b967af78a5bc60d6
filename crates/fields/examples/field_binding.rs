//! Declares a schema, wraps a record in typed accessors and shows rejected
//! writes in the log.
//!
//! Run with `RUST_LOG=nebula_fields=debug` to see rejections.

use std::sync::Arc;

use nebula_fields::prelude::*;
use nebula_fields::validator;
use tracing_subscriber::EnvFilter;

validator! {
    /// Accepts strings that look like a SKU (`AB-123`).
    pub Sku;
    rule(value) {
        value.as_str().is_some_and(|s| {
            s.split_once('-').is_some_and(|(prefix, digits)| {
                !prefix.is_empty()
                    && prefix.chars().all(|c| c.is_ascii_alphabetic())
                    && !digits.is_empty()
                    && digits.chars().all(|c| c.is_ascii_digit())
            })
        })
    }
    fn sku();
}

struct Order(Record);

impl Order {
    fn schema() -> Arc<Schema> {
        Arc::new(
            Schema::builder("Order")
                .field(
                    "sku",
                    sku().transform(|_, v| v.as_str().map(|s| json!(s.to_uppercase()))),
                )
                .field("quantity", int_range(1, 100))
                // A single integer, or a list of up to four of them.
                .field(
                    "discounts",
                    int_range(0, 50).or_with(list_of(int_range(0, 50)).max_size(4)),
                )
                .build(),
        )
    }

    fn sku(&self) -> ValidationResult<String> {
        Ok(self.0.get("sku")?.as_str().unwrap_or_default().to_owned())
    }

    fn set_sku(&mut self, sku: &str) -> ValidationResult<()> {
        self.0.set("sku", sku)
    }

    fn set_quantity(&mut self, quantity: i64) -> ValidationResult<()> {
        self.0.set("quantity", quantity)
    }

    fn set_discounts(&mut self, discounts: Value) -> ValidationResult<()> {
        self.0.set("discounts", discounts)
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let schema = Order::schema();
    let mut order = Order(Record::new(&schema));

    order.set_sku("ab-42")?;
    order.set_quantity(3)?;
    order.set_discounts(json!([5, 10]))?;

    if let Err(error) = order.set_quantity(500) {
        println!("quantity 500: {error}");
    }
    if let Err(error) = order.set_discounts(json!(75)) {
        println!("discount 75: {error}");
    }

    println!("sku (read):    {}", order.sku()?);
    for (field, value) in order.0.assigned() {
        println!("{field:<10} {value}");
    }
    Ok(())
}
