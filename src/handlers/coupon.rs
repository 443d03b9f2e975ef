use crate::models::*;
use crate::services::CouponService;
use actix_web::{HttpRequest, HttpResponse, ResponseError, Result, web};
use serde_json::json;

use super::get_user_id_from_request;

#[utoipa::path(
    get,
    path = "/coupons",
    tag = "coupon",
    params(
        ("page" = Option<u32>, Query, description = "页码 (默认1)"),
        ("per_page" = Option<u32>, Query, description = "每页数量 (默认20)")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "获取优惠券列表成功", body = PaginatedCouponResponse),
        (status = 401, description = "未授权")
    )
)]
/// 分页获取当前用户优惠券（倒序）
pub async fn get_coupons(
    service: web::Data<CouponService>,
    req: HttpRequest,
    query: web::Query<CouponQuery>,
) -> Result<HttpResponse> {
    let user_id = get_user_id_from_request(&req).unwrap_or(0);
    match service.list_user_coupons(user_id, &query.into_inner()).await {
        Ok(page) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": page }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/coupons/validate/{code}",
    tag = "coupon",
    params(
        ("code" = String, Path, description = "兑换码")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "优惠券可用", body = CouponResponse),
        (status = 400, description = "已核销或已过期"),
        (status = 401, description = "未授权"),
        (status = 404, description = "兑换码不存在")
    )
)]
/// 按兑换码校验优惠券可用性（存在 / 未核销 / 未过期）
pub async fn validate_coupon(
    service: web::Data<CouponService>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let code = path.into_inner();
    match service.validate_code(&code).await {
        Ok(coupon) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": coupon }))),
        Err(e) => Ok(e.error_response()),
    }
}

/// 路由配置
pub fn coupon_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/coupons")
            .route("", web::get().to(get_coupons))
            .route("/validate/{code}", web::get().to(validate_coupon)),
    );
}
