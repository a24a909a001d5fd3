use chrono::{DateTime, Utc};

use crate::domain::catalog::model::Product;
use crate::domain::catalog::value_objects::PlanType;
use crate::domain::shared::value_objects::{CartId, CustomerId, ItemId, ProductId};

use super::errors::CartError;

/// One product entry in a cart. Pricing fields are copied from the product at
/// add-time, so later catalog changes cannot move an existing cart's total.
#[derive(Debug, Clone)]
pub struct CartItem {
    pub item_id: ItemId,
    pub product_id: ProductId,
    pub product_name: String,
    pub quantity: i64,
    pub plan_type: PlanType,
    pub unit_price: f64,
    pub total_price: f64,
}

/// A customer's in-progress collection of line items with a running total.
///
/// Invariants, re-established after every mutation:
/// - `total` equals the sum of all items' `total_price`
/// - each item's `total_price` equals `unit_price * quantity`
/// - all items of a non-empty cart share one plan type
#[derive(Debug, Clone)]
pub struct Cart {
    pub cart_id: CartId,
    pub customer_id: CustomerId,
    pub items: Vec<CartItem>,
    pub total: f64,
    pub created_at: DateTime<Utc>,
}

impl Cart {
    pub fn new(cart_id: CartId, customer_id: CustomerId) -> Self {
        Self {
            cart_id,
            customer_id,
            items: Vec::new(),
            total: 0.0,
            created_at: Utc::now(),
        }
    }

    /// Plan type shared by the current items, `None` while the cart is empty.
    pub fn plan_type(&self) -> Option<&PlanType> {
        self.items.first().map(|item| &item.plan_type)
    }

    /// Adds a product to the cart, merging into an existing line when the
    /// product is already present. `item_id` is only consumed when a new line
    /// is appended. Quantity is taken as-is; the add path deliberately does
    /// not validate its sign (see `update_quantity` for the strict side).
    pub fn add_product(
        &mut self,
        item_id: ItemId,
        product: &Product,
        quantity: i64,
    ) -> Result<(), CartError> {
        if let Some(existing) = self.plan_type() {
            if *existing != product.plan_type {
                return Err(CartError::PlanTypeMismatch {
                    existing: existing.clone(),
                    requested: product.plan_type.clone(),
                });
            }
        }

        match self
            .items
            .iter_mut()
            .find(|item| item.product_id == product.product_id)
        {
            Some(item) => {
                item.quantity += quantity;
                item.total_price = item.unit_price * item.quantity as f64;
            }
            None => {
                self.items.push(CartItem {
                    item_id,
                    product_id: product.product_id.clone(),
                    product_name: product.name.clone(),
                    quantity,
                    plan_type: product.plan_type.clone(),
                    unit_price: product.price,
                    total_price: product.price * quantity as f64,
                });
            }
        }

        self.recompute_total();
        Ok(())
    }

    /// Absolute quantity set on one line. Callers are expected to have
    /// validated the quantity already; this only fails on an unknown item.
    pub fn update_item_quantity(
        &mut self,
        item_id: &ItemId,
        quantity: i64,
    ) -> Result<(), CartError> {
        let item = self
            .items
            .iter_mut()
            .find(|item| &item.item_id == item_id)
            .ok_or(CartError::ItemNotFound)?;

        item.quantity = quantity;
        item.total_price = item.unit_price * quantity as f64;

        self.recompute_total();
        Ok(())
    }

    /// Removes one line; the remaining items keep their relative order.
    pub fn remove_item(&mut self, item_id: &ItemId) -> Result<(), CartError> {
        let index = self
            .items
            .iter()
            .position(|item| &item.item_id == item_id)
            .ok_or(CartError::ItemNotFound)?;

        self.items.remove(index);
        self.recompute_total();
        Ok(())
    }

    /// Empties the cart. Identity fields (`cart_id`, `customer_id`,
    /// `created_at`) are untouched; the cart entity itself is never deleted.
    pub fn clear(&mut self) {
        self.items.clear();
        self.total = 0.0;
    }

    fn recompute_total(&mut self) {
        self.total = self.items.iter().map(|item| item.total_price).sum();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::value_objects::ProductCategory;

    fn product(id: &str, plan_type: PlanType, price: f64) -> Product {
        Product::new(
            ProductId::new(id),
            format!("{id} name"),
            format!("{id} description"),
            ProductCategory::Plan,
            plan_type,
            price,
        )
    }

    fn cart() -> Cart {
        Cart::new(CartId::new("cart_1"), CustomerId::new("test-customer"))
    }

    #[test]
    fn should_start_empty_with_zero_total() {
        let cart = cart();

        assert!(cart.items.is_empty());
        assert_eq!(cart.total, 0.0);
        assert!(cart.plan_type().is_none());
    }

    #[test]
    fn should_add_item_and_compute_totals() {
        let mut cart = cart();
        let basic = product("plan-basic", PlanType::Prepaid, 30.0);

        cart.add_product(ItemId::new("item_1"), &basic, 2).unwrap();

        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].quantity, 2);
        assert_eq!(cart.items[0].total_price, 60.0);
        assert_eq!(cart.total, 60.0);
    }

    #[test]
    fn should_merge_quantities_when_product_already_in_cart() {
        let mut cart = cart();
        let basic = product("plan-basic", PlanType::Prepaid, 30.0);

        cart.add_product(ItemId::new("item_1"), &basic, 1).unwrap();
        cart.add_product(ItemId::new("item_2"), &basic, 2).unwrap();

        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].quantity, 3);
        assert_eq!(cart.items[0].item_id, ItemId::new("item_1"));
        assert_eq!(cart.total, 90.0);
    }

    #[test]
    fn should_reject_mixed_plan_types_and_leave_cart_unchanged() {
        let mut cart = cart();
        let basic = product("plan-basic", PlanType::Prepaid, 30.0);
        let phone = product("device-phone", PlanType::Postpaid, 500.0);

        cart.add_product(ItemId::new("item_1"), &basic, 1).unwrap();
        let result = cart.add_product(ItemId::new("item_2"), &phone, 1);

        assert!(matches!(
            result.unwrap_err(),
            CartError::PlanTypeMismatch {
                existing: PlanType::Prepaid,
                requested: PlanType::Postpaid,
            }
        ));
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.total, 30.0);
    }

    #[test]
    fn should_accept_same_plan_type_across_products() {
        let mut cart = cart();
        let unlimited = product("plan-unlimited", PlanType::Postpaid, 80.0);
        let phone = product("device-phone", PlanType::Postpaid, 500.0);

        cart.add_product(ItemId::new("item_1"), &unlimited, 1).unwrap();
        cart.add_product(ItemId::new("item_2"), &phone, 1).unwrap();

        assert_eq!(cart.items.len(), 2);
        assert_eq!(cart.total, 580.0);
    }

    #[test]
    fn should_pass_through_non_positive_quantity_on_add() {
        // The add path takes quantity as-is; only update_quantity validates.
        let mut cart = cart();
        let basic = product("plan-basic", PlanType::Prepaid, 30.0);

        cart.add_product(ItemId::new("item_1"), &basic, 0).unwrap();

        assert_eq!(cart.items[0].quantity, 0);
        assert_eq!(cart.items[0].total_price, 0.0);
        assert_eq!(cart.total, 0.0);
    }

    #[test]
    fn should_set_absolute_quantity_and_recompute() {
        let mut cart = cart();
        let basic = product("plan-basic", PlanType::Prepaid, 30.0);
        cart.add_product(ItemId::new("item_1"), &basic, 5).unwrap();

        cart.update_item_quantity(&ItemId::new("item_1"), 2).unwrap();

        assert_eq!(cart.items[0].quantity, 2);
        assert_eq!(cart.items[0].total_price, 60.0);
        assert_eq!(cart.total, 60.0);
    }

    #[test]
    fn should_fail_update_for_unknown_item() {
        let mut cart = cart();

        let result = cart.update_item_quantity(&ItemId::new("item_9"), 2);

        assert!(matches!(result.unwrap_err(), CartError::ItemNotFound));
    }

    #[test]
    fn should_remove_item_preserving_order_of_rest() {
        let mut cart = cart();
        let unlimited = product("plan-unlimited", PlanType::Postpaid, 80.0);
        let phone = product("device-phone", PlanType::Postpaid, 500.0);
        let addon = product("addon-data", PlanType::Postpaid, 10.0);
        cart.add_product(ItemId::new("item_1"), &unlimited, 1).unwrap();
        cart.add_product(ItemId::new("item_2"), &phone, 1).unwrap();
        cart.add_product(ItemId::new("item_3"), &addon, 1).unwrap();

        cart.remove_item(&ItemId::new("item_2")).unwrap();

        let remaining: Vec<&str> = cart.items.iter().map(|i| i.item_id.as_str()).collect();
        assert_eq!(remaining, vec!["item_1", "item_3"]);
        assert_eq!(cart.total, 90.0);
    }

    #[test]
    fn should_fail_remove_for_unknown_item() {
        let mut cart = cart();

        let result = cart.remove_item(&ItemId::new("item_9"));

        assert!(matches!(result.unwrap_err(), CartError::ItemNotFound));
    }

    #[test]
    fn should_lift_plan_type_constraint_after_removing_last_item() {
        let mut cart = cart();
        let basic = product("plan-basic", PlanType::Prepaid, 30.0);
        let phone = product("device-phone", PlanType::Postpaid, 500.0);
        cart.add_product(ItemId::new("item_1"), &basic, 1).unwrap();

        cart.remove_item(&ItemId::new("item_1")).unwrap();
        cart.add_product(ItemId::new("item_2"), &phone, 1).unwrap();

        assert_eq!(cart.plan_type(), Some(&PlanType::Postpaid));
        assert_eq!(cart.total, 500.0);
    }

    #[test]
    fn should_clear_items_but_keep_identity() {
        let mut cart = cart();
        let created_at = cart.created_at;
        let basic = product("plan-basic", PlanType::Prepaid, 30.0);
        cart.add_product(ItemId::new("item_1"), &basic, 3).unwrap();

        cart.clear();

        assert!(cart.items.is_empty());
        assert_eq!(cart.total, 0.0);
        assert_eq!(cart.cart_id, CartId::new("cart_1"));
        assert_eq!(cart.customer_id, CustomerId::new("test-customer"));
        assert_eq!(cart.created_at, created_at);
    }

    #[test]
    fn should_keep_total_equal_to_sum_of_line_totals_across_mutations() {
        let mut cart = cart();
        let unlimited = product("plan-unlimited", PlanType::Postpaid, 80.0);
        let phone = product("device-phone", PlanType::Postpaid, 500.0);

        cart.add_product(ItemId::new("item_1"), &unlimited, 2).unwrap();
        cart.add_product(ItemId::new("item_2"), &phone, 1).unwrap();
        cart.update_item_quantity(&ItemId::new("item_2"), 3).unwrap();
        cart.remove_item(&ItemId::new("item_1")).unwrap();

        let expected: f64 = cart.items.iter().map(|i| i.total_price).sum();
        assert_eq!(cart.total, expected);
        for item in &cart.items {
            assert_eq!(item.total_price, item.unit_price * item.quantity as f64);
        }
    }
}
