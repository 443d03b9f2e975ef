use crate::models::*;
use crate::services::ProductService;
use actix_web::{HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/products",
    tag = "product",
    responses(
        (status = 200, description = "获取商品列表成功", body = [ProductResponse])
    )
)]
/// 在售商品列表（公开浏览）
pub async fn get_products(service: web::Data<ProductService>) -> Result<HttpResponse> {
    match service.list_in_stock().await {
        Ok(list) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": list }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = "product",
    params(
        ("id" = i64, Path, description = "商品ID")
    ),
    responses(
        (status = 200, description = "获取商品成功", body = ProductResponse),
        (status = 404, description = "商品不存在")
    )
)]
/// 商品详情（公开浏览）
pub async fn get_product(
    service: web::Data<ProductService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    match service.get(path.into_inner()).await {
        Ok(product) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": product }))),
        Err(e) => Ok(e.error_response()),
    }
}

/// 路由配置
pub fn product_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/products")
            .route("", web::get().to(get_products))
            .route("/{id}", web::get().to(get_product)),
    );
}
