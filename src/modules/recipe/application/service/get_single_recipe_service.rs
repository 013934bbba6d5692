use async_trait::async_trait;
use uuid::Uuid;

use crate::recipe::application::ports::{
    incoming::use_cases::{GetSingleRecipeError, GetSingleRecipeUseCase},
    outgoing::{RecipeQuery, RecipeView},
};

#[derive(Debug, Clone)]
pub struct GetSingleRecipeService<Q>
where
    Q: RecipeQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetSingleRecipeService<Q>
where
    Q: RecipeQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSingleRecipeUseCase for GetSingleRecipeService<Q>
where
    Q: RecipeQuery + Send + Sync,
{
    async fn execute(&self, recipe_id: Uuid) -> Result<RecipeView, GetSingleRecipeError> {
        self.query
            .get_recipe(recipe_id)
            .await
            .map_err(|e| GetSingleRecipeError::QueryFailed(e.to_string()))?
            .ok_or(GetSingleRecipeError::NotFound)
    }
}
