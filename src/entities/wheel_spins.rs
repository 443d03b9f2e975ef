use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

/// 抽奖流水实体 (append-only)
/// 每次成功抽奖写入一条，关联用户 / 奖品 / 发放的优惠券，从不删除。
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "wheel_spins")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: i64,
    pub prize_id: i64,
    pub coupon_id: i64,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
