use chrono::{SecondsFormat, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A purchasable product. The catalog below is embedded configuration and is
/// never mutated at runtime; its exact values appear verbatim in emitted
/// orders, so they are part of the contract with the downstream consumer.
pub(crate) struct Product {
    pub id: &'static str,
    #[allow(dead_code)]
    pub name: &'static str,
    pub price: f64,
}

pub(crate) const PRODUCT_CATALOG: [Product; 5] = [
    Product {
        id: "PROD-001",
        name: "Laptop",
        price: 1299.99,
    },
    Product {
        id: "PROD-002",
        name: "Mouse",
        price: 29.99,
    },
    Product {
        id: "PROD-003",
        name: "Keyboard",
        price: 89.99,
    },
    Product {
        id: "PROD-004",
        name: "Monitor",
        price: 399.99,
    },
    Product {
        id: "PROD-005",
        name: "Headphones",
        price: 149.99,
    },
];

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub(crate) struct OrderItem {
    pub product_id: String,
    pub quantity: u32,
    // Copied from the product at generation time, so later catalog changes
    // never affect an already-built order.
    pub price: f64,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub(crate) struct Order {
    pub order_id: String,
    pub customer_id: String,
    pub items: Vec<OrderItem>,
    pub total_amount: f64,
    pub status: String,
    pub created_at: String,
}

/// Builds one synthetic order with 1-3 line items drawn from the catalog.
///
/// All randomness (item count, product choice, quantity, id suffixes) comes
/// from the caller's generator, so a seeded generator reproduces the same
/// order apart from the creation timestamp.
pub(crate) fn generate_order<R: Rng>(rng: &mut R) -> Order {
    let num_items = rng.gen_range(1..=3);
    let mut items = Vec::with_capacity(num_items);
    let mut total_amount = 0.0;

    for _ in 0..num_items {
        let product = &PRODUCT_CATALOG[rng.gen_range(0..PRODUCT_CATALOG.len())];
        let quantity = rng.gen_range(1..=5u32);
        total_amount += product.price * f64::from(quantity);

        items.push(OrderItem {
            product_id: product.id.to_string(),
            quantity,
            price: product.price,
        });
    }

    Order {
        order_id: format!("ORD-{:08X}", rng.gen::<u32>()),
        customer_id: format!("CUST-{}", rng.gen_range(1000..=9999)),
        items,
        total_amount: round_to_cents(total_amount),
        status: "pending".to_string(),
        created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
    }
}

fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
