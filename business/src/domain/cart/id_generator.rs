use crate::domain::shared::value_objects::{CartId, ItemId};

/// Id allocation port. Implementations must never hand out the same id twice
/// for the lifetime of the process; tests supply deterministic sequences.
pub trait IdGenerator: Send + Sync {
    /// Next cart id, formatted `cart_<n>` with n counting up from 1.
    fn next_cart_id(&self) -> CartId;
    /// Next line-item id, unique across all carts.
    fn next_item_id(&self) -> ItemId;
}
