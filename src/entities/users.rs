use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

/// 用户实体
/// - spins_remaining: 剩余抽奖次数 (只允许 spin 扣减 / buy-spins 增加)
/// - total_spins_used: 累计已用次数 (审计用)
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub is_admin: bool,
    pub spins_remaining: i32,
    pub total_spins_used: i32,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
