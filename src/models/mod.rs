pub mod common;
pub mod coupon;
pub mod loan_request;
pub mod order;
pub mod pagination;
pub mod prize;
pub mod product;
pub mod user;
pub mod wheel;

pub use common::*;
pub use coupon::*;
pub use loan_request::*;
pub use order::*;
pub use pagination::*;
pub use prize::*;
pub use product::*;
pub use user::*;
pub use wheel::*;
