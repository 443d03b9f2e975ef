use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::{OrderStatus, order_entity};

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateOrderRequest {
    pub product_id: i64,
    /// 可选，用优惠券抵扣订单金额；核销与下单在同一事务内完成
    pub coupon_id: Option<i64>,
}

/// 订单响应
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct OrderResponse {
    pub id: i64,
    pub product_id: i64,
    pub coupon_id: Option<i64>,
    pub original_price: f64,
    pub discount_amount: f64,
    pub final_price: f64,
    pub status: OrderStatus,
    pub payment_intent_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<order_entity::Model> for OrderResponse {
    fn from(m: order_entity::Model) -> Self {
        OrderResponse {
            id: m.id,
            product_id: m.product_id,
            coupon_id: m.coupon_id,
            original_price: m.original_price,
            discount_amount: m.discount_amount,
            final_price: m.final_price,
            status: m.status,
            payment_intent_id: m.payment_intent_id,
            created_at: m.created_at.unwrap_or_else(Utc::now),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct OrderQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct UpdateOrderStatusRequest {
    pub status: OrderStatus,
}
