use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::cart::use_cases::add_item::{AddItemParams, AddItemUseCase};
use business::domain::cart::use_cases::clear::{ClearCartParams, ClearCartUseCase};
use business::domain::cart::use_cases::create::{CreateCartParams, CreateCartUseCase};
use business::domain::cart::use_cases::get::{GetCartParams, GetCartUseCase};
use business::domain::cart::use_cases::remove_item::{RemoveItemParams, RemoveItemUseCase};
use business::domain::cart::use_cases::update_quantity::{
    UpdateQuantityParams, UpdateQuantityUseCase,
};

use crate::api::cart::dto::{
    AddItemRequest, CartResponse, CreateCartRequest, UpdateQuantityRequest,
};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CartApi {
    create_use_case: Arc<dyn CreateCartUseCase>,
    get_use_case: Arc<dyn GetCartUseCase>,
    add_item_use_case: Arc<dyn AddItemUseCase>,
    update_quantity_use_case: Arc<dyn UpdateQuantityUseCase>,
    remove_item_use_case: Arc<dyn RemoveItemUseCase>,
    clear_use_case: Arc<dyn ClearCartUseCase>,
}

impl CartApi {
    pub fn new(
        create_use_case: Arc<dyn CreateCartUseCase>,
        get_use_case: Arc<dyn GetCartUseCase>,
        add_item_use_case: Arc<dyn AddItemUseCase>,
        update_quantity_use_case: Arc<dyn UpdateQuantityUseCase>,
        remove_item_use_case: Arc<dyn RemoveItemUseCase>,
        clear_use_case: Arc<dyn ClearCartUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_use_case,
            add_item_use_case,
            update_quantity_use_case,
            remove_item_use_case,
            clear_use_case,
        }
    }
}

/// Shopping cart API
///
/// Endpoints for creating carts and managing their line items. A cart may
/// not mix prepaid and postpaid products.
#[OpenApi]
impl CartApi {
    /// Create a new cart
    #[oai(path = "/api/carts", method = "post", tag = "ApiTags::Carts")]
    async fn create_cart(&self, body: Json<CreateCartRequest>) -> CreateCartResponse {
        let params = CreateCartParams {
            customer_id: body.0.customer_id,
        };

        match self.create_use_case.execute(params).await {
            Ok(cart) => CreateCartResponse::Created(Json(cart.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateCartResponse::BadRequest(json),
                    _ => CreateCartResponse::InternalError(json),
                }
            }
        }
    }

    /// Get a cart by id
    ///
    /// Returns 404 when no cart exists under the id.
    #[oai(path = "/api/cart/:cart_id", method = "get", tag = "ApiTags::Carts")]
    async fn get_cart(&self, cart_id: Path<String>) -> GetCartResponse {
        match self
            .get_use_case
            .execute(GetCartParams { cart_id: cart_id.0 })
            .await
        {
            Ok(Some(cart)) => GetCartResponse::Ok(Json(cart.into())),
            Ok(None) => GetCartResponse::NotFound(Json(ErrorResponse {
                error: "Cart not found".to_string(),
                code: "CART_NOT_FOUND".to_string(),
            })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => GetCartResponse::BadRequest(json),
                    _ => GetCartResponse::InternalError(json),
                }
            }
        }
    }

    /// Add a product to a cart
    ///
    /// Merges into the existing line when the product is already in the
    /// cart. Fails with PLAN_TYPE_MISMATCH when the product's plan type
    /// differs from the cart's.
    #[oai(path = "/api/cart/:cart_id/items", method = "post", tag = "ApiTags::Carts")]
    async fn add_item(&self, cart_id: Path<String>, body: Json<AddItemRequest>) -> MutateCartResponse {
        let params = AddItemParams {
            cart_id: cart_id.0,
            product_id: body.0.product_id,
            quantity: body.0.quantity,
        };

        match self.add_item_use_case.execute(params).await {
            Ok(cart) => MutateCartResponse::Ok(Json(cart.into())),
            Err(err) => MutateCartResponse::from_error(err),
        }
    }

    /// Set the quantity of a line item
    #[oai(
        path = "/api/cart/:cart_id/items/:item_id",
        method = "put",
        tag = "ApiTags::Carts"
    )]
    async fn update_quantity(
        &self,
        cart_id: Path<String>,
        item_id: Path<String>,
        body: Json<UpdateQuantityRequest>,
    ) -> MutateCartResponse {
        let params = UpdateQuantityParams {
            cart_id: cart_id.0,
            item_id: item_id.0,
            quantity: body.0.quantity,
        };

        match self.update_quantity_use_case.execute(params).await {
            Ok(cart) => MutateCartResponse::Ok(Json(cart.into())),
            Err(err) => MutateCartResponse::from_error(err),
        }
    }

    /// Remove a line item from a cart
    #[oai(
        path = "/api/cart/:cart_id/items/:item_id",
        method = "delete",
        tag = "ApiTags::Carts"
    )]
    async fn remove_item(&self, cart_id: Path<String>, item_id: Path<String>) -> MutateCartResponse {
        let params = RemoveItemParams {
            cart_id: cart_id.0,
            item_id: item_id.0,
        };

        match self.remove_item_use_case.execute(params).await {
            Ok(cart) => MutateCartResponse::Ok(Json(cart.into())),
            Err(err) => MutateCartResponse::from_error(err),
        }
    }

    /// Clear a cart
    ///
    /// Empties the items and resets the total; the cart itself persists.
    #[oai(path = "/api/cart/:cart_id", method = "delete", tag = "ApiTags::Carts")]
    async fn clear_cart(&self, cart_id: Path<String>) -> MutateCartResponse {
        match self
            .clear_use_case
            .execute(ClearCartParams { cart_id: cart_id.0 })
            .await
        {
            Ok(cart) => MutateCartResponse::Ok(Json(cart.into())),
            Err(err) => MutateCartResponse::from_error(err),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateCartResponse {
    #[oai(status = 201)]
    Created(Json<CartResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCartResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

/// Shared response shape of the four mutation endpoints, which all return
/// the updated cart and map every domain failure to 400.
#[derive(poem_openapi::ApiResponse)]
pub enum MutateCartResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl MutateCartResponse {
    fn from_error(err: business::domain::cart::errors::CartError) -> Self {
        let (status, json) = err.into_error_response();
        match status.as_u16() {
            400 => MutateCartResponse::BadRequest(json),
            _ => MutateCartResponse::InternalError(json),
        }
    }
}
