use crate::entities::coupon_entity as coupons;
use crate::error::{AppError, AppResult};
use crate::models::{CouponQuery, CouponResponse, PaginatedResponse, PaginationParams};
use chrono::Utc;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, Order, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

#[derive(Clone)]
pub struct CouponService {
    pool: DatabaseConnection,
}

impl CouponService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// 获取用户优惠券（分页，倒序）
    pub async fn list_user_coupons(
        &self,
        user_id: i64,
        query: &CouponQuery,
    ) -> AppResult<PaginatedResponse<CouponResponse>> {
        let params = PaginationParams::new(query.page, query.per_page);

        let base_query = coupons::Entity::find().filter(coupons::Column::UserId.eq(user_id));

        let total = base_query.clone().count(&self.pool).await? as i64;

        let items_models = base_query
            .order_by(coupons::Column::CreatedAt, Order::Desc)
            .limit(params.get_limit() as u64)
            .offset(params.get_offset() as u64)
            .all(&self.pool)
            .await?;

        let items: Vec<CouponResponse> = items_models.into_iter().map(Into::into).collect();

        Ok(PaginatedResponse::new(
            items,
            params.page.unwrap_or(1),
            params.page_size.unwrap_or(20),
            total,
        ))
    }

    /// 按兑换码查券并校验可用性（存在 / 未核销 / 未过期）。
    /// 仅查询，不做核销；真正的核销发生在下单事务里。
    pub async fn validate_code(&self, code: &str) -> AppResult<CouponResponse> {
        let coupon = coupons::Entity::find()
            .filter(coupons::Column::Code.eq(code))
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Coupon not found".to_string()))?;

        if coupon.is_redeemed {
            return Err(AppError::AlreadyRedeemed(
                "Coupon has already been redeemed".to_string(),
            ));
        }
        if coupon.is_expired(Utc::now()) {
            return Err(AppError::Expired("Coupon has expired".to_string()));
        }

        Ok(coupon.into())
    }

    /// 管理端：全部优惠券（分页，倒序）
    pub async fn list_all_coupons(
        &self,
        query: &CouponQuery,
    ) -> AppResult<PaginatedResponse<CouponResponse>> {
        let params = PaginationParams::new(query.page, query.per_page);

        let total = coupons::Entity::find().count(&self.pool).await? as i64;

        let items_models = coupons::Entity::find()
            .order_by(coupons::Column::CreatedAt, Order::Desc)
            .limit(params.get_limit() as u64)
            .offset(params.get_offset() as u64)
            .all(&self.pool)
            .await?;

        let items: Vec<CouponResponse> = items_models.into_iter().map(Into::into).collect();

        Ok(PaginatedResponse::new(
            items,
            params.page.unwrap_or(1),
            params.page_size.unwrap_or(20),
            total,
        ))
    }
}
