use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema, DeriveActiveEnum, EnumIter,
)]
#[sea_orm(rs_type = "String", db_type = "String(Some(50))")]
#[serde(rename_all = "snake_case")]
pub enum PrizeType {
    #[sea_orm(string_value = "free_gold")]
    FreeGold,
    #[sea_orm(string_value = "free_silver")]
    FreeSilver,
    #[sea_orm(string_value = "combo")]
    Combo,
    #[sea_orm(string_value = "discount")]
    Discount,
}

impl std::fmt::Display for PrizeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PrizeType::FreeGold => write!(f, "free_gold"),
            PrizeType::FreeSilver => write!(f, "free_silver"),
            PrizeType::Combo => write!(f, "combo"),
            PrizeType::Discount => write!(f, "discount"),
        }
    }
}

/// 转盘奖品配置实体
/// 概念说明:
/// - probability: 相对权重 (0-100)，各奖品之和不要求等于 100，
///   实际中奖率 = probability / 所有启用奖品权重之和
/// - value: 奖品面值 (卢比)，兑换时用作抵扣金额
/// - gold_grams / silver_grams: 实物类奖品对应的克重
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "prizes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub prize_type: PrizeType,
    pub value: f64,
    pub gold_grams: f64,
    pub silver_grams: f64,
    /// 相对权重，<= 0 的奖品实际不可能被抽中
    pub probability: f64,
    pub is_active: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
