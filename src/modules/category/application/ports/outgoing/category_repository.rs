use async_trait::async_trait;
use uuid::Uuid;

use crate::category::application::domain::entities::Category;

#[derive(Debug, Clone)]
pub struct CreateCategoryData {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CategoryRepositoryError {
    #[error("Category not found")]
    CategoryNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn create_category(
        &self,
        data: CreateCategoryData,
    ) -> Result<Category, CategoryRepositoryError>;

    /// Dependent recipes have their category cleared by the FK rule.
    async fn delete_category(&self, category_id: Uuid) -> Result<(), CategoryRepositoryError>;
}
