use std::sync::atomic::{AtomicU64, Ordering};

use business::domain::cart::id_generator::IdGenerator;
use business::domain::shared::value_objects::{CartId, ItemId};

/// Counter-backed id allocation: `cart_<n>` and `item_<n>`, both counting up
/// from 1 for the lifetime of the process. There is no reset, so an id is
/// never handed out twice.
pub struct SequentialIdGenerator {
    cart_counter: AtomicU64,
    item_counter: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self {
            cart_counter: AtomicU64::new(1),
            item_counter: AtomicU64::new(1),
        }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_cart_id(&self) -> CartId {
        let n = self.cart_counter.fetch_add(1, Ordering::Relaxed);
        CartId::new(format!("cart_{n}"))
    }

    fn next_item_id(&self) -> ItemId {
        let n = self.item_counter.fetch_add(1, Ordering::Relaxed);
        ItemId::new(format!("item_{n}"))
    }
}
