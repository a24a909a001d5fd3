use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::cart::model::{Cart, CartItem};

use crate::api::catalog::dto::PlanTypeDto;

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CreateCartRequest {
    /// Identifier of the customer the cart belongs to (cannot be blank)
    pub customer_id: String,
}

fn default_quantity() -> i64 {
    1
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct AddItemRequest {
    /// Catalog product id
    pub product_id: String,
    /// Number of units to add (defaults to 1)
    #[oai(default = "default_quantity")]
    pub quantity: i64,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct UpdateQuantityRequest {
    /// New absolute quantity (must be a positive integer)
    pub quantity: i64,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CartItemResponse {
    /// Line-item identifier, unique within the cart
    pub item_id: String,
    /// Catalog product id
    pub product_id: String,
    /// Product name at add-time
    pub product_name: String,
    /// Units of the product
    pub quantity: i64,
    /// Billing classification copied from the product
    pub plan_type: PlanTypeDto,
    /// Unit price at add-time
    pub unit_price: f64,
    /// unit_price × quantity
    pub total_price: f64,
}

impl From<CartItem> for CartItemResponse {
    fn from(item: CartItem) -> Self {
        Self {
            item_id: item.item_id.as_str().to_string(),
            product_id: item.product_id.as_str().to_string(),
            product_name: item.product_name,
            quantity: item.quantity,
            plan_type: item.plan_type.into(),
            unit_price: item.unit_price,
            total_price: item.total_price,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CartResponse {
    /// Cart identifier (`cart_<n>`)
    pub cart_id: String,
    /// Owning customer
    pub customer_id: String,
    /// Line items in insertion order
    pub items: Vec<CartItemResponse>,
    /// Sum of all line totals
    pub total: f64,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        Self {
            cart_id: cart.cart_id.as_str().to_string(),
            customer_id: cart.customer_id.as_str().to_string(),
            items: cart.items.into_iter().map(|i| i.into()).collect(),
            total: cart.total,
            created_at: cart.created_at,
        }
    }
}
