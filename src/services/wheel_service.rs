use crate::entities::{
    coupon_entity as coupons, prize_entity as prizes, user_entity as users,
    wheel_config_entity as wheel_config, wheel_spin_entity as wheel_spins,
};
use crate::error::{AppError, AppResult};
use crate::models::{
    BuySpinsResponse, PaginationParams, PaginatedResponse, SpinResponse, UpdateWheelConfigRequest,
    WheelConfigResponse, WheelSpinQuery, WheelSpinResponse,
};
use crate::utils::generate_unique_coupon_code;
use chrono::{Duration, Utc};
use rand::Rng;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel, Order,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait, UpdateResult,
};
use uuid::Uuid;

/// 券有效期 (天)，从发放时刻起算
const COUPON_VALIDITY_DAYS: i64 = 30;

#[derive(Clone)]
pub struct WheelService {
    pool: DatabaseConnection,
}

/// 按权重随机选择一个奖品。
///
/// - 入参应当已过滤为启用奖品；为空返回 None（调用方需拒绝本次抽奖）。
/// - 算法: 在 [0, total_weight) 均匀取 r，按存储顺序逐个减去权重，r <= 0 即命中。
///   权重是相对值，不要求总和为 100；长期频率收敛到 probability / total。
/// - 浮点误差可能让整轮减完后 r 仍略大于 0，此时回退到最后一个奖品，
///   保证非空输入必有返回值。total <= 0 的退化配置同样走该回退。
pub fn select_prize(active: &[prizes::Model]) -> Option<&prizes::Model> {
    let last = active.last()?;

    let total_weight: f64 = active.iter().map(|p| p.probability).sum();
    if total_weight <= 0.0 {
        return Some(last);
    }

    let mut r: f64 = rand::thread_rng().gen_range(0.0..total_weight);
    for prize in active {
        r -= prize.probability;
        if r <= 0.0 {
            return Some(prize);
        }
    }

    Some(last)
}

impl WheelService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// 获取转盘配置（不存在则初始化默认值）
    pub async fn get_config(&self) -> AppResult<WheelConfigResponse> {
        let model = self.ensure_config(&self.pool).await?;
        Ok(model.into())
    }

    /// 管理端更新转盘配置
    pub async fn update_config(
        &self,
        request: UpdateWheelConfigRequest,
    ) -> AppResult<WheelConfigResponse> {
        if let Some(spins) = request.spins_per_entry
            && spins <= 0
        {
            return Err(AppError::ValidationError(
                "spins_per_entry must be positive".into(),
            ));
        }

        let model = self.ensure_config(&self.pool).await?;
        let mut am = model.into_active_model();
        if let Some(v) = request.entry_price {
            am.entry_price = Set(v);
        }
        if let Some(v) = request.spins_per_entry {
            am.spins_per_entry = Set(v);
        }
        if let Some(v) = request.is_active {
            am.is_active = Set(v);
        }
        am.updated_at = Set(Some(Utc::now()));
        let updated = am.update(&self.pool).await?;
        Ok(updated.into())
    }

    /// 获取用户抽奖流水（分页，倒序）
    pub async fn list_spins(
        &self,
        user_id: i64,
        query: &WheelSpinQuery,
    ) -> AppResult<PaginatedResponse<WheelSpinResponse>> {
        let params = PaginationParams::new(query.page, query.per_page);

        let base_query =
            wheel_spins::Entity::find().filter(wheel_spins::Column::UserId.eq(user_id));

        let total = base_query.clone().count(&self.pool).await? as i64;

        let items_models = base_query
            .order_by(wheel_spins::Column::CreatedAt, Order::Desc)
            .limit(params.get_limit() as u64)
            .offset(params.get_offset() as u64)
            .all(&self.pool)
            .await?;

        let items: Vec<WheelSpinResponse> = items_models.into_iter().map(Into::into).collect();

        Ok(PaginatedResponse::new(
            items,
            params.page.unwrap_or(1),
            params.page_size.unwrap_or(20),
            total,
        ))
    }

    /// 管理端：所有用户的抽奖流水（分页，倒序）
    pub async fn list_all_spins(
        &self,
        query: &WheelSpinQuery,
    ) -> AppResult<PaginatedResponse<WheelSpinResponse>> {
        let params = PaginationParams::new(query.page, query.per_page);

        let total = wheel_spins::Entity::find().count(&self.pool).await? as i64;

        let items_models = wheel_spins::Entity::find()
            .order_by(wheel_spins::Column::CreatedAt, Order::Desc)
            .limit(params.get_limit() as u64)
            .offset(params.get_offset() as u64)
            .all(&self.pool)
            .await?;

        let items: Vec<WheelSpinResponse> = items_models.into_iter().map(Into::into).collect();

        Ok(PaginatedResponse::new(
            items,
            params.page.unwrap_or(1),
            params.page_size.unwrap_or(20),
            total,
        ))
    }

    /// 抽奖 (Spin)
    ///
    /// 逻辑（整体在一个数据库事务内，要么全部生效要么全部回滚）:
    /// 1. 校验用户存在与剩余次数
    /// 2. 读取启用奖品并按权重抽取
    /// 3. 生成唯一兑换码，写入优惠券（30 天有效）
    /// 4. 写抽奖流水
    /// 5. 原子条件扣减次数 (update ... where spins_remaining > 0)，
    ///    0 行生效说明并发请求先消费了余额，返回 Conflict 并回滚
    pub async fn spin(&self, user_id: i64) -> AppResult<SpinResponse> {
        let txn = self.pool.begin().await?;

        let user = users::Entity::find_by_id(user_id)
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        if user.spins_remaining <= 0 {
            return Err(AppError::InsufficientBalance(
                "No spins remaining. Please purchase more spins.".to_string(),
            ));
        }

        let prize_list = prizes::Entity::find()
            .filter(prizes::Column::IsActive.eq(true))
            .order_by_asc(prizes::Column::Id)
            .all(&txn)
            .await?;

        if prize_list.is_empty() {
            return Err(AppError::InvalidConfiguration(
                "No prizes available".to_string(),
            ));
        }

        let selected_prize = select_prize(&prize_list)
            .ok_or_else(|| AppError::InternalError("Prize selection failed".to_string()))?
            .clone();

        // 兑换码是唯一查找键，入库前查重（碰撞时有限重试）
        let code = generate_unique_coupon_code(&txn).await?;

        let coupon = coupons::ActiveModel {
            code: Set(code),
            user_id: Set(user_id),
            prize_id: Set(selected_prize.id),
            value: Set(selected_prize.value),
            gold_grams: Set(selected_prize.gold_grams),
            silver_grams: Set(selected_prize.silver_grams),
            is_redeemed: Set(false),
            expires_at: Set(Utc::now() + Duration::days(COUPON_VALIDITY_DAYS)),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        wheel_spins::ActiveModel {
            user_id: Set(user_id),
            prize_id: Set(selected_prize.id),
            coupon_id: Set(coupon.id),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let update_result: UpdateResult = users::Entity::update_many()
            .col_expr(
                users::Column::SpinsRemaining,
                Expr::col(users::Column::SpinsRemaining).sub(1),
            )
            .col_expr(
                users::Column::TotalSpinsUsed,
                Expr::col(users::Column::TotalSpinsUsed).add(1),
            )
            .col_expr(users::Column::UpdatedAt, Expr::current_timestamp().into())
            .filter(users::Column::Id.eq(user_id))
            .filter(users::Column::SpinsRemaining.gt(0))
            .exec(&txn)
            .await?;

        if update_result.rows_affected != 1 {
            // 余额被并发请求抢先消费；整个事务回滚，已写入的券与流水一并撤销
            return Err(AppError::Conflict(
                "Spin balance was consumed by a concurrent request, please retry".to_string(),
            ));
        }

        // 回读扣减后的行，响应里的余额以本事务提交值为准，
        // 而不是进入事务前的快照减一
        let user = users::Entity::find_by_id(user_id)
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::InternalError("User row vanished mid-spin".to_string()))?;

        txn.commit().await?;

        log::info!(
            "User {} won prize '{}' (coupon {})",
            user_id,
            selected_prize.name,
            coupon.code
        );

        Ok(SpinResponse {
            prize: selected_prize.into(),
            coupon: coupon.into(),
            spins_remaining: user.spins_remaining,
        })
    }

    /// 购买抽奖次数（支付为模拟确认，固定按配置的 spins_per_entry 发放）
    pub async fn buy_spins(&self, user_id: i64) -> AppResult<BuySpinsResponse> {
        let txn = self.pool.begin().await?;

        let user = users::Entity::find_by_id(user_id)
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let config = self.ensure_config(&txn).await?;
        if !config.is_active {
            return Err(AppError::InvalidConfiguration(
                "The wheel is currently disabled".to_string(),
            ));
        }

        let spins_added = config.spins_per_entry;

        // 无真实支付网关，生成一个模拟凭证以便对账
        let payment_intent_id = format!("mock_{}", Uuid::new_v4());

        users::Entity::update_many()
            .col_expr(
                users::Column::SpinsRemaining,
                Expr::col(users::Column::SpinsRemaining).add(spins_added),
            )
            .col_expr(users::Column::UpdatedAt, Expr::current_timestamp().into())
            .filter(users::Column::Id.eq(user_id))
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(BuySpinsResponse {
            spins_added,
            new_spin_count: user.spins_remaining + spins_added,
            payment_intent_id,
        })
    }

    // -----------------------------
    // 内部辅助方法
    // -----------------------------

    async fn ensure_config<C>(&self, conn: &C) -> Result<wheel_config::Model, DbErr>
    where
        C: sea_orm::ConnectionTrait,
    {
        if let Some(m) = wheel_config::Entity::find()
            .order_by_asc(wheel_config::Column::Id)
            .one(conn)
            .await?
        {
            return Ok(m);
        }
        wheel_config::ActiveModel {
            entry_price: Set(10.0),
            spins_per_entry: Set(2),
            is_active: Set(true),
            ..Default::default()
        }
        .insert(conn)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::PrizeType;

    fn prize(id: i64, name: &str, probability: f64) -> prizes::Model {
        prizes::Model {
            id,
            name: name.to_string(),
            description: None,
            prize_type: PrizeType::Discount,
            value: 50.0,
            gold_grams: 0.0,
            silver_grams: 0.0,
            probability,
            is_active: true,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_empty_prize_list_returns_none() {
        assert!(select_prize(&[]).is_none());
    }

    #[test]
    fn test_always_returns_member_of_input() {
        let list = vec![prize(1, "a", 5.0), prize(2, "b", 10.0), prize(3, "c", 0.5)];
        for _ in 0..1_000 {
            let chosen = select_prize(&list).unwrap();
            assert!(list.iter().any(|p| p.id == chosen.id));
        }
    }

    #[test]
    fn test_single_prize_always_selected() {
        let list = vec![prize(7, "only", 3.0)];
        for _ in 0..100 {
            assert_eq!(select_prize(&list).unwrap().id, 7);
        }
    }

    #[test]
    fn test_zero_total_weight_falls_back_to_last() {
        let list = vec![prize(1, "a", 0.0), prize(2, "b", 0.0)];
        // 退化配置: 所有权重 <= 0 时回退到最后一个
        assert_eq!(select_prize(&list).unwrap().id, 2);
    }

    #[test]
    fn test_zero_weight_prize_unreachable() {
        let list = vec![prize(1, "never", 0.0), prize(2, "always", 10.0)];
        for _ in 0..10_000 {
            assert_eq!(select_prize(&list).unwrap().id, 2);
        }
    }

    #[test]
    fn test_selection_frequencies_converge_to_weights() {
        let weights = [5.0, 10.0, 25.0, 20.0, 8.0, 15.0, 3.0, 14.0];
        let list: Vec<prizes::Model> = weights
            .iter()
            .enumerate()
            .map(|(i, &w)| prize(i as i64 + 1, &format!("p{i}"), w))
            .collect();
        let total: f64 = weights.iter().sum();

        const DRAWS: usize = 100_000;
        let mut counts = vec![0usize; weights.len()];
        for _ in 0..DRAWS {
            let chosen = select_prize(&list).unwrap();
            counts[(chosen.id - 1) as usize] += 1;
        }

        for (i, &w) in weights.iter().enumerate() {
            let expected = w / total;
            let observed = counts[i] as f64 / DRAWS as f64;
            assert!(
                (observed - expected).abs() < 0.01,
                "prize {i}: observed {observed:.4}, expected {expected:.4}"
            );
        }
    }

    // TODO: Postgres 集成测试 (testcontainers)，覆盖并发 spin 下
    // spins_remaining 恰好消费到 0 且不为负，以及响应中的余额等于提交后的行值
}
