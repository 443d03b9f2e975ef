pub mod admin;
pub mod coupon;
pub mod loan_request;
pub mod order;
pub mod prize;
pub mod product;
pub mod user;
pub mod wheel;

pub use admin::admin_config;
pub use coupon::coupon_config;
pub use loan_request::loan_request_config;
pub use order::order_config;
pub use prize::prize_config;
pub use product::product_config;
pub use user::user_config;
pub use wheel::wheel_config;

use actix_web::{HttpMessage, HttpRequest};

/// 从请求扩展中获取用户ID（中间件在鉴权后注入）
pub(crate) fn get_user_id_from_request(req: &HttpRequest) -> Option<i64> {
    req.extensions().get::<i64>().copied()
}
