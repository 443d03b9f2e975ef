use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::{LoanRequestStatus, loan_request_entity};

/// 贷款申请响应
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LoanRequestResponse {
    pub id: i64,
    pub gold_weight: f64,
    pub gold_purity: String,
    pub requested_amount: f64,
    pub purpose: Option<String>,
    pub status: LoanRequestStatus,
    pub admin_notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<loan_request_entity::Model> for LoanRequestResponse {
    fn from(m: loan_request_entity::Model) -> Self {
        LoanRequestResponse {
            id: m.id,
            gold_weight: m.gold_weight,
            gold_purity: m.gold_purity,
            requested_amount: m.requested_amount,
            purpose: m.purpose,
            status: m.status,
            admin_notes: m.admin_notes,
            created_at: m.created_at.unwrap_or_else(Utc::now),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateLoanRequestRequest {
    pub gold_weight: f64,
    /// 缺省按 22K 计
    #[serde(default = "default_purity")]
    pub gold_purity: String,
    pub requested_amount: f64,
    pub purpose: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct UpdateLoanRequestStatusRequest {
    pub status: LoanRequestStatus,
    pub admin_notes: Option<String>,
}

fn default_purity() -> String {
    "22K".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_purity_defaults_to_22k() {
        let request: CreateLoanRequestRequest =
            serde_json::from_str(r#"{"gold_weight": 10.5, "requested_amount": 30000}"#).unwrap();
        assert_eq!(request.gold_purity, "22K");
        assert!(request.purpose.is_none());
    }
}
