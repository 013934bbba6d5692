use async_trait::async_trait;
use uuid::Uuid;

use crate::category::application::domain::entities::Category;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CategoryQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CategoryQuery: Send + Sync {
    /// All categories ordered by name.
    async fn list_categories(&self) -> Result<Vec<Category>, CategoryQueryError>;

    /// Used by recipe writes to reject dangling category ids.
    async fn category_exists(&self, category_id: Uuid) -> Result<bool, CategoryQueryError>;
}
