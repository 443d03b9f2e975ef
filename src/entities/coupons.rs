use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

/// 优惠券实体
/// 每次抽奖成功恰好生成一张；除 is_redeemed/redeemed_at 的单向翻转外不可变，
/// 过期通过 expires_at 逻辑判断，从不物理删除。
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "coupons")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// 兑换码 (唯一查找键, GF + 6 位)
    pub code: String,
    pub user_id: i64,
    pub prize_id: i64,
    pub value: f64,
    pub gold_grams: f64,
    pub silver_grams: f64,
    pub is_redeemed: bool,
    pub redeemed_at: Option<DateTime<Utc>>,
    pub expires_at: DateTime<Utc>,
    pub created_at: Option<DateTime<Utc>>,
}

impl Model {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at < now
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
