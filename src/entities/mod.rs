pub mod coupons;
pub mod loan_requests;
pub mod orders;
pub mod prizes;
pub mod products;
pub mod users;
pub mod wheel_config;
pub mod wheel_spins;

pub use coupons as coupon_entity;
pub use loan_requests as loan_request_entity;
pub use orders as order_entity;
pub use prizes as prize_entity;
pub use products as product_entity;
pub use users as user_entity;
pub use wheel_config as wheel_config_entity;
pub use wheel_spins as wheel_spin_entity;

pub use loan_requests::LoanRequestStatus;
pub use orders::OrderStatus;
pub use prizes::PrizeType;
pub use products::ProductCategory;
