use crate::entities::product_entity as products;
use crate::error::{AppError, AppResult};
use crate::models::{CreateProductRequest, ProductResponse, UpdateProductRequest};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, Set,
};

#[derive(Clone)]
pub struct ProductService {
    pool: DatabaseConnection,
}

impl ProductService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// 在售商品列表（公开浏览）
    pub async fn list_in_stock(&self) -> AppResult<Vec<ProductResponse>> {
        let list = products::Entity::find()
            .filter(products::Column::InStock.eq(true))
            .order_by_asc(products::Column::Id)
            .all(&self.pool)
            .await?;
        Ok(list.into_iter().map(Into::into).collect())
    }

    pub async fn get(&self, product_id: i64) -> AppResult<ProductResponse> {
        let product = products::Entity::find_by_id(product_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;
        Ok(product.into())
    }

    /// 管理端：新建商品
    pub async fn create(&self, request: CreateProductRequest) -> AppResult<ProductResponse> {
        let model = products::ActiveModel {
            name: Set(request.name),
            description: Set(request.description),
            category: Set(request.category),
            price_per_gram: Set(request.price_per_gram),
            weight_grams: Set(request.weight_grams),
            total_price: Set(request.total_price),
            image_url: Set(request.image_url),
            in_stock: Set(request.in_stock),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;

        Ok(model.into())
    }

    /// 管理端：更新商品
    pub async fn update(
        &self,
        product_id: i64,
        request: UpdateProductRequest,
    ) -> AppResult<ProductResponse> {
        let product = products::Entity::find_by_id(product_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

        let mut am = product.into_active_model();
        if let Some(v) = request.name {
            am.name = Set(v);
        }
        if let Some(v) = request.description {
            am.description = Set(Some(v));
        }
        if let Some(v) = request.category {
            am.category = Set(v);
        }
        if let Some(v) = request.price_per_gram {
            am.price_per_gram = Set(v);
        }
        if let Some(v) = request.weight_grams {
            am.weight_grams = Set(v);
        }
        if let Some(v) = request.total_price {
            am.total_price = Set(v);
        }
        if let Some(v) = request.image_url {
            am.image_url = Set(Some(v));
        }
        if let Some(v) = request.in_stock {
            am.in_stock = Set(v);
        }
        am.updated_at = Set(Some(Utc::now()));
        let updated = am.update(&self.pool).await?;

        Ok(updated.into())
    }

    /// 管理端：删除商品
    pub async fn delete(&self, product_id: i64) -> AppResult<()> {
        let result = products::Entity::delete_by_id(product_id)
            .exec(&self.pool)
            .await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound("Product not found".to_string()));
        }
        Ok(())
    }
}
