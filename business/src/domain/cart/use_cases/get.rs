use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;

pub struct GetCartParams {
    pub cart_id: String,
}

/// Absence is a result, not an error: the boundary layer decides how to
/// surface a missing cart.
#[async_trait]
pub trait GetCartUseCase: Send + Sync {
    async fn execute(&self, params: GetCartParams) -> Result<Option<Cart>, CartError>;
}
