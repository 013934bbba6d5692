use async_trait::async_trait;
use uuid::Uuid;

use crate::recipe::application::ports::outgoing::RecipeView;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSingleRecipeError {
    #[error("Recipe not found")]
    NotFound,

    #[error("Failed to fetch recipe: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetSingleRecipeUseCase: Send + Sync {
    async fn execute(&self, recipe_id: Uuid) -> Result<RecipeView, GetSingleRecipeError>;
}
