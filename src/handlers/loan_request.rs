use crate::models::*;
use crate::services::LoanRequestService;
use actix_web::{HttpRequest, HttpResponse, ResponseError, Result, web};
use serde_json::json;

use super::get_user_id_from_request;

#[utoipa::path(
    post,
    path = "/loan-requests",
    tag = "loan",
    request_body = CreateLoanRequestRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "提交贷款申请成功", body = LoanRequestResponse),
        (status = 400, description = "克重或额度非法"),
        (status = 401, description = "未授权")
    )
)]
/// 提交黄金抵押贷款申请（初始状态 pending，等待管理端审核）
pub async fn create_loan_request(
    service: web::Data<LoanRequestService>,
    req: HttpRequest,
    body: web::Json<CreateLoanRequestRequest>,
) -> Result<HttpResponse> {
    let user_id = get_user_id_from_request(&req).unwrap_or(0);
    match service.create(user_id, body.into_inner()).await {
        Ok(request) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": request }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/loan-requests",
    tag = "loan",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "获取贷款申请列表成功", body = [LoanRequestResponse]),
        (status = 401, description = "未授权")
    )
)]
/// 获取当前用户的贷款申请（倒序）
pub async fn get_loan_requests(
    service: web::Data<LoanRequestService>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    let user_id = get_user_id_from_request(&req).unwrap_or(0);
    match service.list_user_requests(user_id).await {
        Ok(list) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": list }))),
        Err(e) => Ok(e.error_response()),
    }
}

/// 路由配置
pub fn loan_request_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/loan-requests")
            .route("", web::post().to(create_loan_request))
            .route("", web::get().to(get_loan_requests)),
    );
}
