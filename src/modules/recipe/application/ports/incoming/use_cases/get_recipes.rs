use async_trait::async_trait;

use crate::recipe::application::ports::outgoing::{RecipeFilter, RecipeView};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetRecipesError {
    #[error("Failed to fetch recipes: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetRecipesUseCase: Send + Sync {
    async fn execute(&self, filter: RecipeFilter) -> Result<Vec<RecipeView>, GetRecipesError>;
}
