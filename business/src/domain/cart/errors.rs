use crate::domain::catalog::value_objects::PlanType;
use crate::domain::errors::RepositoryError;

/// Failure conditions of the cart operations.
///
/// `Display` carries the human-readable message returned to API clients;
/// [`CartError::code`] carries the stable machine-readable condition code the
/// boundary layer maps to HTTP statuses. Both are part of the wire contract,
/// so the wording must not drift.
#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("Customer ID is required")]
    InvalidCustomerId,
    #[error("Cart ID is required")]
    InvalidCartId,
    #[error("Item ID is required")]
    InvalidItemId,
    #[error("Quantity must be a positive integer")]
    InvalidQuantity,
    #[error("Cart not found")]
    CartNotFound,
    #[error("Product not found")]
    ProductNotFound,
    #[error("Item not found in cart")]
    ItemNotFound,
    #[error("Cannot mix {existing} and {requested} products")]
    PlanTypeMismatch {
        existing: PlanType,
        requested: PlanType,
    },
    #[error("Internal error")]
    Repository(#[from] RepositoryError),
}

impl CartError {
    pub fn code(&self) -> &'static str {
        match self {
            CartError::InvalidCustomerId => "INVALID_CUSTOMER_ID",
            CartError::InvalidCartId => "INVALID_CART_ID",
            CartError::InvalidItemId => "INVALID_ITEM_ID",
            CartError::InvalidQuantity => "INVALID_QUANTITY",
            CartError::CartNotFound => "CART_NOT_FOUND",
            CartError::ProductNotFound => "PRODUCT_NOT_FOUND",
            CartError::ItemNotFound => "ITEM_NOT_FOUND",
            CartError::PlanTypeMismatch { .. } => "PLAN_TYPE_MISMATCH",
            CartError::Repository(_) => "CART_ERROR",
        }
    }
}
