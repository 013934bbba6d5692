use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::recipe::application::domain::entities::RecipeChanges;
use crate::recipe::application::domain::policies::RecipeOperation;
use crate::recipe::application::domain::validation::WriteMode;
use crate::recipe::application::ports::outgoing::RecipeView;
use crate::shared::validation::ValidationErrors;

/// PUT or PATCH.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateMode {
    Full,
    Partial,
}

impl UpdateMode {
    pub fn operation(self) -> RecipeOperation {
        match self {
            UpdateMode::Full => RecipeOperation::Update,
            UpdateMode::Partial => RecipeOperation::PartialUpdate,
        }
    }

    pub fn write_mode(self) -> WriteMode {
        match self {
            UpdateMode::Full => WriteMode::Replace,
            UpdateMode::Partial => WriteMode::Partial,
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateRecipeError {
    #[error("Authentication required")]
    AuthenticationRequired,

    #[error("Recipe not found")]
    NotFound,

    #[error("Only the author may modify this recipe")]
    NotAuthor,

    #[error("Invalid recipe: {0}")]
    InvalidInput(ValidationErrors),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateRecipeUseCase: Send + Sync {
    /// Access checks alone, in order: authentication, existence, authorship.
    /// Callers run this before reading the request body.
    async fn authorize(
        &self,
        requester: Option<UserId>,
        recipe_id: Uuid,
        mode: UpdateMode,
    ) -> Result<(), UpdateRecipeError>;

    async fn execute(
        &self,
        requester: Option<UserId>,
        recipe_id: Uuid,
        mode: UpdateMode,
        changes: RecipeChanges,
    ) -> Result<RecipeView, UpdateRecipeError>;
}
