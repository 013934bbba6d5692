use async_trait::async_trait;

use crate::recipe::application::ports::{
    incoming::use_cases::{GetRecipesError, GetRecipesUseCase},
    outgoing::{RecipeFilter, RecipeQuery, RecipeView},
};

#[derive(Debug, Clone)]
pub struct GetRecipesService<Q>
where
    Q: RecipeQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetRecipesService<Q>
where
    Q: RecipeQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetRecipesUseCase for GetRecipesService<Q>
where
    Q: RecipeQuery + Send + Sync,
{
    async fn execute(&self, mut filter: RecipeFilter) -> Result<Vec<RecipeView>, GetRecipesError> {
        filter.search = filter
            .search
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        self.query
            .list_recipes(filter)
            .await
            .map_err(|e| GetRecipesError::QueryFailed(e.to_string()))
    }
}
