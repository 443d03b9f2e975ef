use crate::models::*;
use crate::services::OrderService;
use actix_web::{HttpRequest, HttpResponse, ResponseError, Result, web};
use serde_json::json;

use super::get_user_id_from_request;

#[utoipa::path(
    post,
    path = "/orders",
    tag = "order",
    request_body = CreateOrderRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "下单成功", body = OrderResponse),
        (status = 400, description = "券已核销/已过期或商品缺货"),
        (status = 401, description = "未授权"),
        (status = 403, description = "优惠券不属于当前用户"),
        (status = 404, description = "商品或优惠券不存在"),
        (status = 409, description = "券被并发核销，客户端应重试")
    )
)]
/// 下单。携带 coupon_id 时在同一事务内核销优惠券并抵扣，
/// 成交价 = max(0, 商品总价 - min(券面值, 商品总价))
pub async fn create_order(
    service: web::Data<OrderService>,
    req: HttpRequest,
    body: web::Json<CreateOrderRequest>,
) -> Result<HttpResponse> {
    let user_id = get_user_id_from_request(&req).unwrap_or(0);
    match service.create_order(user_id, body.into_inner()).await {
        Ok(order) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": order }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/orders",
    tag = "order",
    params(
        ("page" = Option<u32>, Query, description = "页码 (默认1)"),
        ("per_page" = Option<u32>, Query, description = "每页数量 (默认20)")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "获取订单列表成功", body = PaginatedOrderResponse),
        (status = 401, description = "未授权")
    )
)]
/// 分页获取当前用户订单（倒序）
pub async fn get_orders(
    service: web::Data<OrderService>,
    req: HttpRequest,
    query: web::Query<OrderQuery>,
) -> Result<HttpResponse> {
    let user_id = get_user_id_from_request(&req).unwrap_or(0);
    match service.list_user_orders(user_id, &query.into_inner()).await {
        Ok(page) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": page }))),
        Err(e) => Ok(e.error_response()),
    }
}

/// 路由配置
pub fn order_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/orders")
            .route("", web::post().to(create_order))
            .route("", web::get().to(get_orders)),
    );
}
