use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::{PrizeType, prize_entity};

/// 奖品信息（转盘展示与管理端共用）
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PrizeResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub prize_type: PrizeType,
    /// 面值 (卢比)
    pub value: f64,
    pub gold_grams: f64,
    pub silver_grams: f64,
    /// 相对权重 (0-100)，不要求所有奖品之和为 100
    pub probability: f64,
    pub is_active: bool,
}

impl From<prize_entity::Model> for PrizeResponse {
    fn from(m: prize_entity::Model) -> Self {
        PrizeResponse {
            id: m.id,
            name: m.name,
            description: m.description,
            prize_type: m.prize_type,
            value: m.value,
            gold_grams: m.gold_grams,
            silver_grams: m.silver_grams,
            probability: m.probability,
            is_active: m.is_active,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreatePrizeRequest {
    pub name: String,
    pub description: Option<String>,
    pub prize_type: PrizeType,
    pub value: f64,
    #[serde(default)]
    pub gold_grams: f64,
    #[serde(default)]
    pub silver_grams: f64,
    pub probability: f64,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct UpdatePrizeRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub prize_type: Option<PrizeType>,
    pub value: Option<f64>,
    pub gold_grams: Option<f64>,
    pub silver_grams: Option<f64>,
    pub probability: Option<f64>,
    pub is_active: Option<bool>,
}

fn default_true() -> bool {
    true
}
