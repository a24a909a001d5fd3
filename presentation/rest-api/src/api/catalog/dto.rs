use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::catalog::model::Product;
use business::domain::catalog::value_objects::{PlanType, ProductCategory};

#[derive(Debug, Clone, Serialize, Deserialize, Enum)]
pub enum PlanTypeDto {
    #[oai(rename = "prepaid")]
    Prepaid,
    #[oai(rename = "postpaid")]
    Postpaid,
}

impl From<PlanType> for PlanTypeDto {
    fn from(plan_type: PlanType) -> Self {
        match plan_type {
            PlanType::Prepaid => PlanTypeDto::Prepaid,
            PlanType::Postpaid => PlanTypeDto::Postpaid,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Enum)]
pub enum ProductCategoryDto {
    #[oai(rename = "plan")]
    Plan,
    #[oai(rename = "device")]
    Device,
    #[oai(rename = "addon")]
    Addon,
}

impl From<ProductCategory> for ProductCategoryDto {
    fn from(category: ProductCategory) -> Self {
        match category {
            ProductCategory::Plan => ProductCategoryDto::Plan,
            ProductCategory::Device => ProductCategoryDto::Device,
            ProductCategory::Addon => ProductCategoryDto::Addon,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductResponse {
    /// Product unique identifier
    pub product_id: String,
    /// Product name
    pub name: String,
    /// Product description
    pub description: String,
    /// Product category
    pub category: ProductCategoryDto,
    /// Billing classification
    pub plan_type: PlanTypeDto,
    /// Unit price
    pub price: f64,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            product_id: product.product_id.as_str().to_string(),
            name: product.name,
            description: product.description,
            category: product.category.into(),
            plan_type: product.plan_type.into(),
            price: product.price,
        }
    }
}
