use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteRecipeError {
    #[error("Authentication required")]
    AuthenticationRequired,

    #[error("Recipe not found")]
    NotFound,

    #[error("Only the author may delete this recipe")]
    NotAuthor,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteRecipeUseCase: Send + Sync {
    async fn execute(
        &self,
        requester: Option<UserId>,
        recipe_id: Uuid,
    ) -> Result<(), DeleteRecipeError>;
}
