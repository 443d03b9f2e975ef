//! 分页相关的数据结构

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{CouponResponse, OrderResponse, WheelSpinResponse};

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct PaginationParams {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: Some(1),
            page_size: Some(20),
        }
    }
}

/// 单页上限，防止一次拉全表
const MAX_PAGE_SIZE: i64 = 100;

impl PaginationParams {
    /// page/per_page 来自查询串，0 或超限值一律钳制到合法区间
    pub fn new(page: Option<u32>, per_page: Option<u32>) -> Self {
        Self {
            page: page.map(|p| (p as i64).max(1)),
            page_size: per_page.map(|p| (p as i64).clamp(1, MAX_PAGE_SIZE)),
        }
    }

    pub fn get_offset(&self) -> i64 {
        let page = self.page.unwrap_or(1).max(1);
        (page - 1) * self.get_limit()
    }

    pub fn get_limit(&self) -> i64 {
        self.page_size.unwrap_or(20).clamp(1, MAX_PAGE_SIZE)
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[aliases(
    PaginatedOrderResponse = PaginatedResponse<OrderResponse>,
    PaginatedCouponResponse = PaginatedResponse<CouponResponse>,
    PaginatedWheelSpinResponse = PaginatedResponse<WheelSpinResponse>
)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub page: i64,
    pub page_size: i64,
    pub total: i64,
    pub total_pages: i64,
}

impl<T> PaginatedResponse<T> {
    pub fn new(data: Vec<T>, page: i64, page_size: i64, total: i64) -> Self {
        let page_size = page_size.max(1);
        let total_pages = (total + page_size - 1) / page_size;
        Self {
            data,
            page,
            page_size,
            total,
            total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_per_page_zero_clamped_to_one() {
        // ?per_page=0 不能触发除零，按 1 处理
        let params = PaginationParams::new(Some(1), Some(0));
        assert_eq!(params.get_limit(), 1);
        assert_eq!(params.get_offset(), 0);

        let page: PaginatedResponse<i64> =
            PaginatedResponse::new(vec![], params.page.unwrap_or(1), params.get_limit(), 7);
        assert_eq!(page.page_size, 1);
        assert_eq!(page.total_pages, 7);
    }

    #[test]
    fn test_page_zero_does_not_produce_negative_offset() {
        let params = PaginationParams::new(Some(0), Some(20));
        assert_eq!(params.get_offset(), 0);
    }

    #[test]
    fn test_per_page_capped() {
        let params = PaginationParams::new(Some(1), Some(10_000));
        assert_eq!(params.get_limit(), MAX_PAGE_SIZE);
    }

    #[test]
    fn test_total_pages_rounds_up() {
        let page: PaginatedResponse<i64> = PaginatedResponse::new(vec![], 1, 20, 41);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_zero_page_size_in_response_does_not_panic() {
        let page: PaginatedResponse<i64> = PaginatedResponse::new(vec![], 1, 0, 10);
        assert_eq!(page.page_size, 1);
        assert_eq!(page.total_pages, 10);
    }
}
