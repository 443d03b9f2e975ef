use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

/// 转盘全局配置 (单行表)
/// - entry_price: 一次付费的价格 (卢比)
/// - spins_per_entry: 一次付费获得的抽奖次数
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "wheel_config")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub entry_price: f64,
    pub spins_per_entry: i32,
    pub is_active: bool,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
