use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::{ProductCategory, product_entity};

/// 商品信息响应
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub category: ProductCategory,
    pub price_per_gram: f64,
    pub weight_grams: f64,
    pub total_price: f64,
    pub image_url: Option<String>,
    pub in_stock: bool,
}

impl From<product_entity::Model> for ProductResponse {
    fn from(m: product_entity::Model) -> Self {
        ProductResponse {
            id: m.id,
            name: m.name,
            description: m.description,
            category: m.category,
            price_per_gram: m.price_per_gram,
            weight_grams: m.weight_grams,
            total_price: m.total_price,
            image_url: m.image_url,
            in_stock: m.in_stock,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateProductRequest {
    pub name: String,
    pub description: Option<String>,
    pub category: ProductCategory,
    pub price_per_gram: f64,
    pub weight_grams: f64,
    pub total_price: f64,
    pub image_url: Option<String>,
    #[serde(default = "default_true")]
    pub in_stock: bool,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<ProductCategory>,
    pub price_per_gram: Option<f64>,
    pub weight_grams: Option<f64>,
    pub total_price: Option<f64>,
    pub image_url: Option<String>,
    pub in_stock: Option<bool>,
}

fn default_true() -> bool {
    true
}
