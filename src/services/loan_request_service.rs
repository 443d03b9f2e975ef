use crate::entities::loan_request_entity as loan_requests;
use crate::error::{AppError, AppResult};
use crate::models::{CreateLoanRequestRequest, LoanRequestResponse, UpdateLoanRequestStatusRequest};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, Order,
    QueryFilter, QueryOrder, Set,
};

#[derive(Clone)]
pub struct LoanRequestService {
    pool: DatabaseConnection,
}

/// 申请入参校验：抵押克重与期望额度都必须为正
pub fn validate_loan_request(gold_weight: f64, requested_amount: f64) -> AppResult<()> {
    if gold_weight <= 0.0 {
        return Err(AppError::ValidationError(
            "Gold weight must be positive".to_string(),
        ));
    }
    if requested_amount <= 0.0 {
        return Err(AppError::ValidationError(
            "Requested amount must be positive".to_string(),
        ));
    }
    Ok(())
}

impl LoanRequestService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// 提交贷款申请（初始状态 pending）
    pub async fn create(
        &self,
        user_id: i64,
        request: CreateLoanRequestRequest,
    ) -> AppResult<LoanRequestResponse> {
        validate_loan_request(request.gold_weight, request.requested_amount)?;

        let model = loan_requests::ActiveModel {
            user_id: Set(user_id),
            gold_weight: Set(request.gold_weight),
            gold_purity: Set(request.gold_purity),
            requested_amount: Set(request.requested_amount),
            purpose: Set(request.purpose),
            status: Set(crate::entities::LoanRequestStatus::Pending),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;

        log::info!(
            "Loan request {} created by user {} ({}g, Rs.{:.2})",
            model.id,
            user_id,
            model.gold_weight,
            model.requested_amount
        );

        Ok(model.into())
    }

    /// 当前用户的申请列表（倒序）
    pub async fn list_user_requests(&self, user_id: i64) -> AppResult<Vec<LoanRequestResponse>> {
        let list = loan_requests::Entity::find()
            .filter(loan_requests::Column::UserId.eq(user_id))
            .order_by(loan_requests::Column::CreatedAt, Order::Desc)
            .all(&self.pool)
            .await?;
        Ok(list.into_iter().map(Into::into).collect())
    }

    /// 管理端：全部申请（倒序）
    pub async fn list_all(&self) -> AppResult<Vec<LoanRequestResponse>> {
        let list = loan_requests::Entity::find()
            .order_by(loan_requests::Column::CreatedAt, Order::Desc)
            .all(&self.pool)
            .await?;
        Ok(list.into_iter().map(Into::into).collect())
    }

    /// 管理端：审核（更新状态并附备注）
    pub async fn update_status(
        &self,
        request_id: i64,
        request: UpdateLoanRequestStatusRequest,
    ) -> AppResult<LoanRequestResponse> {
        let loan_request = loan_requests::Entity::find_by_id(request_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Loan request not found".to_string()))?;

        let mut am = loan_request.into_active_model();
        am.status = Set(request.status);
        if let Some(notes) = request.admin_notes {
            am.admin_notes = Set(Some(notes));
        }
        am.updated_at = Set(Some(Utc::now()));
        let updated = am.update(&self.pool).await?;

        Ok(updated.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_request_accepted() {
        assert!(validate_loan_request(10.5, 30_000.0).is_ok());
    }

    #[test]
    fn test_zero_gold_weight_rejected() {
        assert!(matches!(
            validate_loan_request(0.0, 30_000.0),
            Err(AppError::ValidationError(_))
        ));
    }

    #[test]
    fn test_negative_amount_rejected() {
        assert!(matches!(
            validate_loan_request(10.0, -1.0),
            Err(AppError::ValidationError(_))
        ));
    }
}
