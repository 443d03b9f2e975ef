use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::{wheel_config_entity, wheel_spin_entity};

use super::{CouponResponse, PrizeResponse};

/// 抽奖（Spin）响应
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SpinResponse {
    /// 抽中的奖品
    pub prize: PrizeResponse,
    /// 本次发放的优惠券
    pub coupon: CouponResponse,
    /// 剩余抽奖次数
    pub spins_remaining: i32,
}

/// 购买抽奖次数响应（模拟支付）
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BuySpinsResponse {
    pub spins_added: i32,
    pub new_spin_count: i32,
    /// 模拟支付凭证
    pub payment_intent_id: String,
}

/// 转盘配置响应
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct WheelConfigResponse {
    /// 单次付费价格 (卢比)
    pub entry_price: f64,
    /// 单次付费获得的抽奖次数
    pub spins_per_entry: i32,
    pub is_active: bool,
}

impl From<wheel_config_entity::Model> for WheelConfigResponse {
    fn from(m: wheel_config_entity::Model) -> Self {
        WheelConfigResponse {
            entry_price: m.entry_price,
            spins_per_entry: m.spins_per_entry,
            is_active: m.is_active,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct UpdateWheelConfigRequest {
    pub entry_price: Option<f64>,
    pub spins_per_entry: Option<i32>,
    pub is_active: Option<bool>,
}

/// 抽奖流水响应
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct WheelSpinResponse {
    pub id: i64,
    pub prize_id: i64,
    pub coupon_id: i64,
    pub created_at: DateTime<Utc>,
}

impl From<wheel_spin_entity::Model> for WheelSpinResponse {
    fn from(m: wheel_spin_entity::Model) -> Self {
        WheelSpinResponse {
            id: m.id,
            prize_id: m.prize_id,
            coupon_id: m.coupon_id,
            created_at: m.created_at.unwrap_or_else(Utc::now),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct WheelSpinQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}
