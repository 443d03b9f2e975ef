use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::services::{
    CouponService, LoanRequestService, OrderService, PrizeService, ProductService, UserService,
    WheelService,
};
use actix_web::{HttpRequest, HttpResponse, ResponseError, Result, web};
use serde_json::json;

use super::get_user_id_from_request;

/// 管理端权限检查：请求用户必须存在且 is_admin
async fn require_admin(users: &UserService, req: &HttpRequest) -> AppResult<i64> {
    let user_id = get_user_id_from_request(req)
        .ok_or_else(|| AppError::AuthError("Missing access token".to_string()))?;
    if !users.is_admin(user_id).await? {
        return Err(AppError::PermissionDenied);
    }
    Ok(user_id)
}

#[utoipa::path(
    get,
    path = "/admin/users",
    tag = "admin",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "获取用户列表成功", body = [UserResponse]),
        (status = 403, description = "非管理员")
    )
)]
pub async fn list_users(
    user_service: web::Data<UserService>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    if let Err(e) = require_admin(&user_service, &req).await {
        return Ok(e.error_response());
    }
    match user_service.list_all().await {
        Ok(list) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": list }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/admin/prizes",
    tag = "admin",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "获取奖品列表成功（含停用）", body = [PrizeResponse]),
        (status = 403, description = "非管理员")
    )
)]
pub async fn list_prizes(
    user_service: web::Data<UserService>,
    prize_service: web::Data<PrizeService>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    if let Err(e) = require_admin(&user_service, &req).await {
        return Ok(e.error_response());
    }
    match prize_service.list_all().await {
        Ok(list) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": list }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/admin/prizes",
    tag = "admin",
    request_body = CreatePrizeRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "创建奖品成功", body = PrizeResponse),
        (status = 403, description = "非管理员")
    )
)]
pub async fn create_prize(
    user_service: web::Data<UserService>,
    prize_service: web::Data<PrizeService>,
    req: HttpRequest,
    body: web::Json<CreatePrizeRequest>,
) -> Result<HttpResponse> {
    if let Err(e) = require_admin(&user_service, &req).await {
        return Ok(e.error_response());
    }
    match prize_service.create(body.into_inner()).await {
        Ok(prize) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": prize }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    patch,
    path = "/admin/prizes/{id}",
    tag = "admin",
    params(
        ("id" = i64, Path, description = "奖品ID")
    ),
    request_body = UpdatePrizeRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "更新奖品成功", body = PrizeResponse),
        (status = 403, description = "非管理员"),
        (status = 404, description = "奖品不存在")
    )
)]
pub async fn update_prize(
    user_service: web::Data<UserService>,
    prize_service: web::Data<PrizeService>,
    req: HttpRequest,
    path: web::Path<i64>,
    body: web::Json<UpdatePrizeRequest>,
) -> Result<HttpResponse> {
    if let Err(e) = require_admin(&user_service, &req).await {
        return Ok(e.error_response());
    }
    match prize_service.update(path.into_inner(), body.into_inner()).await {
        Ok(prize) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": prize }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/admin/prizes/{id}",
    tag = "admin",
    params(
        ("id" = i64, Path, description = "奖品ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "删除奖品成功"),
        (status = 403, description = "非管理员"),
        (status = 404, description = "奖品不存在")
    )
)]
pub async fn delete_prize(
    user_service: web::Data<UserService>,
    prize_service: web::Data<PrizeService>,
    req: HttpRequest,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    if let Err(e) = require_admin(&user_service, &req).await {
        return Ok(e.error_response());
    }
    match prize_service.delete(path.into_inner()).await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({ "success": true }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/admin/products",
    tag = "admin",
    request_body = CreateProductRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "创建商品成功", body = ProductResponse),
        (status = 403, description = "非管理员")
    )
)]
pub async fn create_product(
    user_service: web::Data<UserService>,
    product_service: web::Data<ProductService>,
    req: HttpRequest,
    body: web::Json<CreateProductRequest>,
) -> Result<HttpResponse> {
    if let Err(e) = require_admin(&user_service, &req).await {
        return Ok(e.error_response());
    }
    match product_service.create(body.into_inner()).await {
        Ok(product) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": product }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    patch,
    path = "/admin/products/{id}",
    tag = "admin",
    params(
        ("id" = i64, Path, description = "商品ID")
    ),
    request_body = UpdateProductRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "更新商品成功", body = ProductResponse),
        (status = 403, description = "非管理员"),
        (status = 404, description = "商品不存在")
    )
)]
pub async fn update_product(
    user_service: web::Data<UserService>,
    product_service: web::Data<ProductService>,
    req: HttpRequest,
    path: web::Path<i64>,
    body: web::Json<UpdateProductRequest>,
) -> Result<HttpResponse> {
    if let Err(e) = require_admin(&user_service, &req).await {
        return Ok(e.error_response());
    }
    match product_service
        .update(path.into_inner(), body.into_inner())
        .await
    {
        Ok(product) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": product }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/admin/products/{id}",
    tag = "admin",
    params(
        ("id" = i64, Path, description = "商品ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "删除商品成功"),
        (status = 403, description = "非管理员"),
        (status = 404, description = "商品不存在")
    )
)]
pub async fn delete_product(
    user_service: web::Data<UserService>,
    product_service: web::Data<ProductService>,
    req: HttpRequest,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    if let Err(e) = require_admin(&user_service, &req).await {
        return Ok(e.error_response());
    }
    match product_service.delete(path.into_inner()).await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({ "success": true }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/admin/orders",
    tag = "admin",
    params(
        ("page" = Option<u32>, Query, description = "页码 (默认1)"),
        ("per_page" = Option<u32>, Query, description = "每页数量 (默认20)")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "获取订单列表成功", body = PaginatedOrderResponse),
        (status = 403, description = "非管理员")
    )
)]
pub async fn list_orders(
    user_service: web::Data<UserService>,
    order_service: web::Data<OrderService>,
    req: HttpRequest,
    query: web::Query<OrderQuery>,
) -> Result<HttpResponse> {
    if let Err(e) = require_admin(&user_service, &req).await {
        return Ok(e.error_response());
    }
    match order_service.list_all_orders(&query.into_inner()).await {
        Ok(page) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": page }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    patch,
    path = "/admin/orders/{id}/status",
    tag = "admin",
    params(
        ("id" = i64, Path, description = "订单ID")
    ),
    request_body = UpdateOrderStatusRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "更新订单状态成功", body = OrderResponse),
        (status = 403, description = "非管理员"),
        (status = 404, description = "订单不存在")
    )
)]
pub async fn update_order_status(
    user_service: web::Data<UserService>,
    order_service: web::Data<OrderService>,
    req: HttpRequest,
    path: web::Path<i64>,
    body: web::Json<UpdateOrderStatusRequest>,
) -> Result<HttpResponse> {
    if let Err(e) = require_admin(&user_service, &req).await {
        return Ok(e.error_response());
    }
    match order_service
        .update_status(path.into_inner(), body.into_inner())
        .await
    {
        Ok(order) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": order }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/admin/coupons",
    tag = "admin",
    params(
        ("page" = Option<u32>, Query, description = "页码 (默认1)"),
        ("per_page" = Option<u32>, Query, description = "每页数量 (默认20)")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "获取优惠券列表成功", body = PaginatedCouponResponse),
        (status = 403, description = "非管理员")
    )
)]
pub async fn list_coupons(
    user_service: web::Data<UserService>,
    coupon_service: web::Data<CouponService>,
    req: HttpRequest,
    query: web::Query<CouponQuery>,
) -> Result<HttpResponse> {
    if let Err(e) = require_admin(&user_service, &req).await {
        return Ok(e.error_response());
    }
    match coupon_service.list_all_coupons(&query.into_inner()).await {
        Ok(page) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": page }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/admin/spins",
    tag = "admin",
    params(
        ("page" = Option<u32>, Query, description = "页码 (默认1)"),
        ("per_page" = Option<u32>, Query, description = "每页数量 (默认20)")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "获取抽奖流水成功", body = PaginatedWheelSpinResponse),
        (status = 403, description = "非管理员")
    )
)]
pub async fn list_spins(
    user_service: web::Data<UserService>,
    wheel_service: web::Data<WheelService>,
    req: HttpRequest,
    query: web::Query<WheelSpinQuery>,
) -> Result<HttpResponse> {
    if let Err(e) = require_admin(&user_service, &req).await {
        return Ok(e.error_response());
    }
    match wheel_service.list_all_spins(&query.into_inner()).await {
        Ok(page) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": page }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/admin/loan-requests",
    tag = "admin",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "获取贷款申请列表成功", body = [LoanRequestResponse]),
        (status = 403, description = "非管理员")
    )
)]
pub async fn list_loan_requests(
    user_service: web::Data<UserService>,
    loan_request_service: web::Data<LoanRequestService>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    if let Err(e) = require_admin(&user_service, &req).await {
        return Ok(e.error_response());
    }
    match loan_request_service.list_all().await {
        Ok(list) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": list }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    patch,
    path = "/admin/loan-requests/{id}/status",
    tag = "admin",
    params(
        ("id" = i64, Path, description = "贷款申请ID")
    ),
    request_body = UpdateLoanRequestStatusRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "审核贷款申请成功", body = LoanRequestResponse),
        (status = 403, description = "非管理员"),
        (status = 404, description = "申请不存在")
    )
)]
pub async fn update_loan_request_status(
    user_service: web::Data<UserService>,
    loan_request_service: web::Data<LoanRequestService>,
    req: HttpRequest,
    path: web::Path<i64>,
    body: web::Json<UpdateLoanRequestStatusRequest>,
) -> Result<HttpResponse> {
    if let Err(e) = require_admin(&user_service, &req).await {
        return Ok(e.error_response());
    }
    match loan_request_service
        .update_status(path.into_inner(), body.into_inner())
        .await
    {
        Ok(request) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": request }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    patch,
    path = "/admin/wheel/config",
    tag = "admin",
    request_body = UpdateWheelConfigRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "更新转盘配置成功", body = WheelConfigResponse),
        (status = 403, description = "非管理员")
    )
)]
pub async fn update_wheel_config(
    user_service: web::Data<UserService>,
    wheel_service: web::Data<WheelService>,
    req: HttpRequest,
    body: web::Json<UpdateWheelConfigRequest>,
) -> Result<HttpResponse> {
    if let Err(e) = require_admin(&user_service, &req).await {
        return Ok(e.error_response());
    }
    match wheel_service.update_config(body.into_inner()).await {
        Ok(config) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": config }))),
        Err(e) => Ok(e.error_response()),
    }
}

/// 路由配置
pub fn admin_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .route("/users", web::get().to(list_users))
            .route("/prizes", web::get().to(list_prizes))
            .route("/prizes", web::post().to(create_prize))
            .route("/prizes/{id}", web::patch().to(update_prize))
            .route("/prizes/{id}", web::delete().to(delete_prize))
            .route("/products", web::post().to(create_product))
            .route("/products/{id}", web::patch().to(update_product))
            .route("/products/{id}", web::delete().to(delete_product))
            .route("/orders", web::get().to(list_orders))
            .route("/orders/{id}/status", web::patch().to(update_order_status))
            .route("/coupons", web::get().to(list_coupons))
            .route("/spins", web::get().to(list_spins))
            .route("/loan-requests", web::get().to(list_loan_requests))
            .route(
                "/loan-requests/{id}/status",
                web::patch().to(update_loan_request_status),
            )
            .route("/wheel/config", web::patch().to(update_wheel_config)),
    );
}
