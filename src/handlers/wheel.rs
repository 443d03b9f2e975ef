use crate::models::*;
use crate::services::WheelService;
use actix_web::{HttpRequest, HttpResponse, ResponseError, Result, web};
use serde_json::json;

use super::get_user_id_from_request;

#[utoipa::path(
    post,
    path = "/wheel/spin",
    tag = "wheel",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "抽奖成功", body = SpinResponse),
        (status = 400, description = "次数不足或无可用奖品"),
        (status = 401, description = "未授权"),
        (status = 404, description = "用户不存在"),
        (status = 409, description = "并发冲突，客户端应重试")
    )
)]
/// 进行一次抽奖:
/// 1. 校验剩余次数
/// 2. 按权重选择奖品
/// 3. 发放优惠券 (30 天有效) 并写抽奖流水
/// 4. 原子扣减次数，三步在同一事务内
pub async fn spin(service: web::Data<WheelService>, req: HttpRequest) -> Result<HttpResponse> {
    let user_id = get_user_id_from_request(&req).unwrap_or(0);
    match service.spin(user_id).await {
        Ok(result) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": result }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/wheel/buy-spins",
    tag = "wheel",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "购买成功（模拟支付）", body = BuySpinsResponse),
        (status = 401, description = "未授权"),
        (status = 404, description = "用户不存在")
    )
)]
/// 购买抽奖次数（无真实支付网关，直接按配置发放）
pub async fn buy_spins(service: web::Data<WheelService>, req: HttpRequest) -> Result<HttpResponse> {
    let user_id = get_user_id_from_request(&req).unwrap_or(0);
    match service.buy_spins(user_id).await {
        Ok(result) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": result }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/wheel/config",
    tag = "wheel",
    responses(
        (status = 200, description = "获取转盘配置成功", body = WheelConfigResponse)
    )
)]
/// 获取转盘配置（公开，前端展示价格与次数）
pub async fn get_config(service: web::Data<WheelService>) -> Result<HttpResponse> {
    match service.get_config().await {
        Ok(config) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": config }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/wheel/spins",
    tag = "wheel",
    params(
        ("page" = Option<u32>, Query, description = "页码 (默认1)"),
        ("per_page" = Option<u32>, Query, description = "每页数量 (默认20)")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "获取抽奖流水成功", body = PaginatedWheelSpinResponse),
        (status = 401, description = "未授权")
    )
)]
/// 分页获取当前用户抽奖流水（倒序）
pub async fn get_spins(
    service: web::Data<WheelService>,
    req: HttpRequest,
    query: web::Query<WheelSpinQuery>,
) -> Result<HttpResponse> {
    let user_id = get_user_id_from_request(&req).unwrap_or(0);
    match service.list_spins(user_id, &query.into_inner()).await {
        Ok(page) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": page }))),
        Err(e) => Ok(e.error_response()),
    }
}

/// 路由配置
pub fn wheel_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/wheel")
            .route("/spin", web::post().to(spin))
            .route("/buy-spins", web::post().to(buy_spins))
            .route("/config", web::get().to(get_config))
            .route("/spins", web::get().to(get_spins)),
    );
}
