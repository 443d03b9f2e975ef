pub mod coupon_code;
pub mod jwt;

pub use coupon_code::{generate_coupon_code, generate_unique_coupon_code, COUPON_CODE_PREFIX};
pub use jwt::*;
