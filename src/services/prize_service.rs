use crate::entities::prize_entity as prizes;
use crate::error::{AppError, AppResult};
use crate::models::{CreatePrizeRequest, PrizeResponse, UpdatePrizeRequest};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, Set,
};

#[derive(Clone)]
pub struct PrizeService {
    pool: DatabaseConnection,
}

impl PrizeService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// 获取启用的奖品列表（转盘展示用，按 id 排序即存储顺序）
    pub async fn list_active(&self) -> AppResult<Vec<PrizeResponse>> {
        let list = prizes::Entity::find()
            .filter(prizes::Column::IsActive.eq(true))
            .order_by_asc(prizes::Column::Id)
            .all(&self.pool)
            .await?;
        Ok(list.into_iter().map(Into::into).collect())
    }

    /// 管理端：全部奖品（含停用）
    pub async fn list_all(&self) -> AppResult<Vec<PrizeResponse>> {
        let list = prizes::Entity::find()
            .order_by_asc(prizes::Column::Id)
            .all(&self.pool)
            .await?;
        Ok(list.into_iter().map(Into::into).collect())
    }

    /// 管理端：新建奖品
    pub async fn create(&self, request: CreatePrizeRequest) -> AppResult<PrizeResponse> {
        if request.probability < 0.0 {
            return Err(AppError::ValidationError(
                "Probability must not be negative".to_string(),
            ));
        }

        let model = prizes::ActiveModel {
            name: Set(request.name),
            description: Set(request.description),
            prize_type: Set(request.prize_type),
            value: Set(request.value),
            gold_grams: Set(request.gold_grams),
            silver_grams: Set(request.silver_grams),
            probability: Set(request.probability),
            is_active: Set(request.is_active),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;

        Ok(model.into())
    }

    /// 管理端：更新奖品（含权重调整、启停）
    pub async fn update(&self, prize_id: i64, request: UpdatePrizeRequest) -> AppResult<PrizeResponse> {
        if let Some(p) = request.probability
            && p < 0.0
        {
            return Err(AppError::ValidationError(
                "Probability must not be negative".to_string(),
            ));
        }

        let prize = prizes::Entity::find_by_id(prize_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Prize not found".to_string()))?;

        let mut am = prize.into_active_model();
        if let Some(v) = request.name {
            am.name = Set(v);
        }
        if let Some(v) = request.description {
            am.description = Set(Some(v));
        }
        if let Some(v) = request.prize_type {
            am.prize_type = Set(v);
        }
        if let Some(v) = request.value {
            am.value = Set(v);
        }
        if let Some(v) = request.gold_grams {
            am.gold_grams = Set(v);
        }
        if let Some(v) = request.silver_grams {
            am.silver_grams = Set(v);
        }
        if let Some(v) = request.probability {
            am.probability = Set(v);
        }
        if let Some(v) = request.is_active {
            am.is_active = Set(v);
        }
        am.updated_at = Set(Some(Utc::now()));
        let updated = am.update(&self.pool).await?;

        Ok(updated.into())
    }

    /// 管理端：删除奖品。
    /// 历史流水/券通过外键保留奖品 id，不做级联删除。
    pub async fn delete(&self, prize_id: i64) -> AppResult<()> {
        let result = prizes::Entity::delete_by_id(prize_id)
            .exec(&self.pool)
            .await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound("Prize not found".to_string()));
        }
        Ok(())
    }
}
