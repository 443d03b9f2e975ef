use crate::entities::{
    OrderStatus, coupon_entity as coupons, order_entity as orders, product_entity as products,
};
use crate::error::{AppError, AppResult};
use crate::models::{
    CreateOrderRequest, OrderQuery, OrderResponse, PaginatedResponse, PaginationParams,
    UpdateOrderStatusRequest,
};
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, EntityTrait,
    IntoActiveModel, Order, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
    TransactionTrait, UpdateResult,
};
use uuid::Uuid;

#[derive(Clone)]
pub struct OrderService {
    pool: DatabaseConnection,
}

/// 优惠抵扣金额: 不超过券面值也不超过订单金额，成交价不可能为负。
pub fn coupon_discount(coupon_value: f64, order_total: f64) -> f64 {
    coupon_value.min(order_total)
}

impl OrderService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// 下单（可选用券抵扣）
    ///
    /// 用券路径（与下单同一事务）:
    /// 1. 券存在 / 归属当前用户 / 未核销 / 未过期
    /// 2. 原子核销 (update ... where is_redeemed = false)，0 行生效返回 Conflict
    /// 3. discount = min(券面值, 商品总价)，final = max(0, 总价 - discount)
    ///
    /// 0 元订单直接置为已支付，其余挂起并附模拟支付凭证。
    pub async fn create_order(
        &self,
        user_id: i64,
        request: CreateOrderRequest,
    ) -> AppResult<OrderResponse> {
        let txn = self.pool.begin().await?;

        let product = products::Entity::find_by_id(request.product_id)
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

        if !product.in_stock {
            return Err(AppError::ValidationError(
                "Product is out of stock".to_string(),
            ));
        }

        let mut discount_amount = 0.0;
        let mut coupon_id: Option<i64> = None;

        if let Some(id) = request.coupon_id {
            let coupon = self.redeem_coupon(&txn, id, user_id).await?;
            discount_amount = coupon_discount(coupon.value, product.total_price);
            coupon_id = Some(coupon.id);
        }

        let final_price = (product.total_price - discount_amount).max(0.0);

        // 全额抵扣的订单无需支付
        let (status, payment_intent_id) = if final_price == 0.0 {
            (OrderStatus::Paid, None)
        } else {
            (
                OrderStatus::Pending,
                Some(format!("mock_{}", Uuid::new_v4())),
            )
        };

        let order = orders::ActiveModel {
            user_id: Set(user_id),
            product_id: Set(product.id),
            coupon_id: Set(coupon_id),
            original_price: Set(product.total_price),
            discount_amount: Set(discount_amount),
            final_price: Set(final_price),
            status: Set(status),
            payment_intent_id: Set(payment_intent_id),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        log::info!(
            "Order {} created for user {} (final price {:.2})",
            order.id,
            user_id,
            order.final_price
        );

        Ok(order.into())
    }

    /// 获取用户订单（分页，倒序）
    pub async fn list_user_orders(
        &self,
        user_id: i64,
        query: &OrderQuery,
    ) -> AppResult<PaginatedResponse<OrderResponse>> {
        let params = PaginationParams::new(query.page, query.per_page);

        let base_query = orders::Entity::find().filter(orders::Column::UserId.eq(user_id));

        let total = base_query.clone().count(&self.pool).await? as i64;

        let items_models = base_query
            .order_by(orders::Column::CreatedAt, Order::Desc)
            .limit(params.get_limit() as u64)
            .offset(params.get_offset() as u64)
            .all(&self.pool)
            .await?;

        let items: Vec<OrderResponse> = items_models.into_iter().map(Into::into).collect();

        Ok(PaginatedResponse::new(
            items,
            params.page.unwrap_or(1),
            params.page_size.unwrap_or(20),
            total,
        ))
    }

    /// 管理端：全部订单（分页，倒序）
    pub async fn list_all_orders(
        &self,
        query: &OrderQuery,
    ) -> AppResult<PaginatedResponse<OrderResponse>> {
        let params = PaginationParams::new(query.page, query.per_page);

        let total = orders::Entity::find().count(&self.pool).await? as i64;

        let items_models = orders::Entity::find()
            .order_by(orders::Column::CreatedAt, Order::Desc)
            .limit(params.get_limit() as u64)
            .offset(params.get_offset() as u64)
            .all(&self.pool)
            .await?;

        let items: Vec<OrderResponse> = items_models.into_iter().map(Into::into).collect();

        Ok(PaginatedResponse::new(
            items,
            params.page.unwrap_or(1),
            params.page_size.unwrap_or(20),
            total,
        ))
    }

    /// 管理端：更新订单状态
    pub async fn update_status(
        &self,
        order_id: i64,
        request: UpdateOrderStatusRequest,
    ) -> AppResult<OrderResponse> {
        let order = orders::Entity::find_by_id(order_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Order not found".to_string()))?;

        let mut am = order.into_active_model();
        am.status = Set(request.status);
        am.updated_at = Set(Some(Utc::now()));
        let updated = am.update(&self.pool).await?;

        Ok(updated.into())
    }

    // -----------------------------
    // 内部辅助方法
    // -----------------------------

    /// 校验并核销优惠券（事务内）。
    /// 过期在核销路径同样强制检查，而不是只在 /validate 查询时检查。
    async fn redeem_coupon(
        &self,
        txn: &DatabaseTransaction,
        coupon_id: i64,
        user_id: i64,
    ) -> AppResult<coupons::Model> {
        let coupon = coupons::Entity::find_by_id(coupon_id)
            .one(txn)
            .await?
            .ok_or_else(|| AppError::NotFound("Coupon not found".to_string()))?;

        if coupon.user_id != user_id {
            return Err(AppError::Forbidden);
        }
        if coupon.is_redeemed {
            return Err(AppError::AlreadyRedeemed(
                "Coupon has already been redeemed".to_string(),
            ));
        }
        if coupon.is_expired(Utc::now()) {
            return Err(AppError::Expired("Coupon has expired".to_string()));
        }

        // 条件更新防止两次并发结算同一张券
        let update_result: UpdateResult = coupons::Entity::update_many()
            .col_expr(coupons::Column::IsRedeemed, Expr::value(true))
            .col_expr(coupons::Column::RedeemedAt, Expr::current_timestamp().into())
            .filter(coupons::Column::Id.eq(coupon_id))
            .filter(coupons::Column::IsRedeemed.eq(false))
            .exec(txn)
            .await?;

        if update_result.rows_affected != 1 {
            return Err(AppError::Conflict(
                "Coupon was redeemed by a concurrent request".to_string(),
            ));
        }

        Ok(coupon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discount_capped_at_order_total() {
        // 券面值 500，订单 300 -> 抵扣 300，成交价 0，不可能为负
        let discount = coupon_discount(500.0, 300.0);
        assert_eq!(discount, 300.0);
        assert_eq!((300.0f64 - discount).max(0.0), 0.0);
    }

    #[test]
    fn test_discount_capped_at_coupon_value() {
        let discount = coupon_discount(50.0, 300.0);
        assert_eq!(discount, 50.0);
        assert_eq!((300.0f64 - discount).max(0.0), 250.0);
    }

    #[test]
    fn test_full_discount_is_exact() {
        let discount = coupon_discount(300.0, 300.0);
        assert_eq!((300.0f64 - discount).max(0.0), 0.0);
    }

    // TODO: Postgres 集成测试 (testcontainers)，覆盖同一张券两次下单
    // 第二次必须失败 (AlreadyRedeemed / 并发路径 Conflict)
}
