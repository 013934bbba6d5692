use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use crate::category::application::domain::entities::Category;
use crate::category::application::ports::outgoing::{CategoryQuery, CategoryQueryError};

use super::sea_orm_entity::{Column as CategoryColumn, Entity as CategoryEntity};

#[derive(Debug, Clone)]
pub struct CategoryQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CategoryQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryQuery for CategoryQueryPostgres {
    async fn list_categories(&self) -> Result<Vec<Category>, CategoryQueryError> {
        let models = CategoryEntity::find()
            .order_by_asc(CategoryColumn::Name)
            .all(&*self.db)
            .await
            .map_err(|e| CategoryQueryError::DatabaseError(e.to_string()))?;

        Ok(models.iter().map(|m| m.to_domain()).collect())
    }

    async fn category_exists(&self, category_id: Uuid) -> Result<bool, CategoryQueryError> {
        let found = CategoryEntity::find_by_id(category_id)
            .one(&*self.db)
            .await
            .map_err(|e| CategoryQueryError::DatabaseError(e.to_string()))?;

        Ok(found.is_some())
    }
}
