use async_trait::async_trait;

use crate::category::application::domain::entities::Category;
use crate::category::application::ports::{
    incoming::use_cases::{GetCategoriesError, GetCategoriesUseCase},
    outgoing::CategoryQuery,
};

#[derive(Debug, Clone)]
pub struct GetCategoriesService<Q>
where
    Q: CategoryQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetCategoriesService<Q>
where
    Q: CategoryQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetCategoriesUseCase for GetCategoriesService<Q>
where
    Q: CategoryQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Category>, GetCategoriesError> {
        self.query
            .list_categories()
            .await
            .map_err(|e| GetCategoriesError::QueryFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::application::ports::outgoing::CategoryQueryError;
    use chrono::Utc;
    use uuid::Uuid;

    #[derive(Clone)]
    struct MockCategoryQuery {
        result: Result<Vec<Category>, CategoryQueryError>,
    }

    #[async_trait]
    impl CategoryQuery for MockCategoryQuery {
        async fn list_categories(&self) -> Result<Vec<Category>, CategoryQueryError> {
            self.result.clone()
        }

        async fn category_exists(&self, _category_id: Uuid) -> Result<bool, CategoryQueryError> {
            unimplemented!()
        }
    }

    fn category(name: &str) -> Category {
        Category {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: String::new(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_get_categories_success() {
        let service = GetCategoriesService::new(MockCategoryQuery {
            result: Ok(vec![category("Breakfast"), category("Desserts")]),
        });

        let categories = service.execute().await.unwrap();

        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].name, "Breakfast");
    }

    #[tokio::test]
    async fn test_get_categories_query_failure() {
        let service = GetCategoriesService::new(MockCategoryQuery {
            result: Err(CategoryQueryError::DatabaseError("db down".to_string())),
        });

        match service.execute().await {
            Err(GetCategoriesError::QueryFailed(msg)) => assert!(msg.contains("db down")),
            other => panic!("Expected QueryFailed error, got {:?}", other),
        }
    }
}
