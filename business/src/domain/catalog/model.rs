use crate::domain::shared::value_objects::ProductId;

use super::value_objects::{PlanType, ProductCategory};

/// A purchasable telecom product. Seeded once at catalog construction and
/// never mutated; carts copy the pricing fields they need at add-time.
#[derive(Debug, Clone)]
pub struct Product {
    pub product_id: ProductId,
    pub name: String,
    pub description: String,
    pub category: ProductCategory,
    pub plan_type: PlanType,
    pub price: f64,
}

impl Product {
    pub fn new(
        product_id: ProductId,
        name: impl Into<String>,
        description: impl Into<String>,
        category: ProductCategory,
        plan_type: PlanType,
        price: f64,
    ) -> Self {
        Self {
            product_id,
            name: name.into(),
            description: description.into(),
            category,
            plan_type,
            price,
        }
    }
}
