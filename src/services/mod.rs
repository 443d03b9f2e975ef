pub mod coupon_service;
pub mod loan_request_service;
pub mod order_service;
pub mod prize_service;
pub mod product_service;
pub mod user_service;
pub mod wheel_service;

pub use coupon_service::*;
pub use loan_request_service::*;
pub use order_service::*;
pub use prize_service::*;
pub use product_service::*;
pub use user_service::*;
pub use wheel_service::*;
