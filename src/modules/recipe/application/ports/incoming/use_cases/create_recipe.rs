use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::recipe::application::domain::entities::RecipeChanges;
use crate::recipe::application::ports::outgoing::RecipeView;
use crate::shared::validation::ValidationErrors;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateRecipeError {
    #[error("Authentication required")]
    AuthenticationRequired,

    #[error("Invalid recipe: {0}")]
    InvalidInput(ValidationErrors),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateRecipeUseCase: Send + Sync {
    /// The author a create would run as.
    fn authorize(&self, requester: Option<UserId>) -> Result<UserId, CreateRecipeError>;

    /// The requester becomes the author.
    async fn execute(
        &self,
        requester: Option<UserId>,
        changes: RecipeChanges,
    ) -> Result<RecipeView, CreateRecipeError>;
}
