use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::coupon_entity;

/// 优惠券响应
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CouponResponse {
    pub id: i64,
    /// 兑换码 (GF + 6 位)
    pub code: String,
    pub prize_id: i64,
    /// 抵扣面值 (卢比)
    pub value: f64,
    pub gold_grams: f64,
    pub silver_grams: f64,
    pub is_redeemed: bool,
    pub redeemed_at: Option<DateTime<Utc>>,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl From<coupon_entity::Model> for CouponResponse {
    fn from(m: coupon_entity::Model) -> Self {
        CouponResponse {
            id: m.id,
            code: m.code,
            prize_id: m.prize_id,
            value: m.value,
            gold_grams: m.gold_grams,
            silver_grams: m.silver_grams,
            is_redeemed: m.is_redeemed,
            redeemed_at: m.redeemed_at,
            expires_at: m.expires_at,
            created_at: m.created_at.unwrap_or_else(Utc::now),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CouponQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}
