use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::category::application::domain::entities::Category;
use crate::category::application::ports::outgoing::{
    CategoryRepository, CategoryRepositoryError, CreateCategoryData,
};

use super::sea_orm_entity::{ActiveModel as CategoryActiveModel, Entity as CategoryEntity};

#[derive(Debug, Clone)]
pub struct CategoryRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CategoryRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryRepository for CategoryRepositoryPostgres {
    async fn create_category(
        &self,
        data: CreateCategoryData,
    ) -> Result<Category, CategoryRepositoryError> {
        let active = CategoryActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            description: Set(data.description),
            created_at: NotSet,
        };

        let inserted = active
            .insert(&*self.db)
            .await
            .map_err(|e| CategoryRepositoryError::DatabaseError(e.to_string()))?;

        Ok(inserted.to_domain())
    }

    async fn delete_category(&self, category_id: Uuid) -> Result<(), CategoryRepositoryError> {
        let result = CategoryEntity::delete_by_id(category_id)
            .exec(&*self.db)
            .await
            .map_err(|e| CategoryRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(CategoryRepositoryError::CategoryNotFound);
        }

        Ok(())
    }
}
