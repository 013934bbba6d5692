use async_trait::async_trait;

use crate::category::application::domain::entities::Category;
use crate::category::application::ports::{
    incoming::use_cases::{CreateCategoryCommand, CreateCategoryError, CreateCategoryUseCase},
    outgoing::{CategoryRepository, CreateCategoryData},
};

#[derive(Debug, Clone)]
pub struct CreateCategoryService<R>
where
    R: CategoryRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreateCategoryService<R>
where
    R: CategoryRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateCategoryUseCase for CreateCategoryService<R>
where
    R: CategoryRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: CreateCategoryCommand,
    ) -> Result<Category, CreateCategoryError> {
        let data = CreateCategoryData {
            name: command.name().to_string(),
            description: command.description().to_string(),
        };

        self.repository
            .create_category(data)
            .await
            .map_err(|e| CreateCategoryError::RepositoryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::application::ports::outgoing::CategoryRepositoryError;
    use chrono::Utc;
    use std::sync::Mutex;
    use uuid::Uuid;

    // ──────────────────────────────────────────────────────────
    // Mock Repository
    // ──────────────────────────────────────────────────────────

    #[derive(Default)]
    struct MockCategoryRepository {
        fail: bool,
        received: Mutex<Option<CreateCategoryData>>,
    }

    #[async_trait]
    impl CategoryRepository for MockCategoryRepository {
        async fn create_category(
            &self,
            data: CreateCategoryData,
        ) -> Result<Category, CategoryRepositoryError> {
            if self.fail {
                return Err(CategoryRepositoryError::DatabaseError(
                    "connection lost".to_string(),
                ));
            }
            *self.received.lock().unwrap() = Some(data.clone());
            Ok(Category {
                id: Uuid::new_v4(),
                name: data.name,
                description: data.description,
                created_at: Utc::now(),
            })
        }

        async fn delete_category(&self, _category_id: Uuid) -> Result<(), CategoryRepositoryError> {
            unimplemented!()
        }
    }

    #[tokio::test]
    async fn create_category_success() {
        let service = CreateCategoryService::new(MockCategoryRepository::default());
        let command =
            CreateCategoryCommand::new("Soups".to_string(), Some("Warm".to_string())).unwrap();

        let category = service.execute(command).await.unwrap();

        assert_eq!(category.name, "Soups");
        assert_eq!(category.description, "Warm");
        let received = service.repository.received.lock().unwrap();
        assert_eq!(received.as_ref().unwrap().name, "Soups");
    }

    #[tokio::test]
    async fn create_category_repository_error_is_mapped() {
        let service = CreateCategoryService::new(MockCategoryRepository {
            fail: true,
            ..Default::default()
        });
        let command = CreateCategoryCommand::new("Soups".to_string(), None).unwrap();

        match service.execute(command).await {
            Err(CreateCategoryError::RepositoryError(msg)) => {
                assert!(msg.contains("connection lost"))
            }
            other => panic!("Expected RepositoryError, got {:?}", other),
        }
    }
}
