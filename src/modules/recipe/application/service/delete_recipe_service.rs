use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::recipe::application::domain::policies::{
    AccessDenied, RecipeAccessPolicy, RecipeOperation,
};
use crate::recipe::application::ports::{
    incoming::use_cases::{DeleteRecipeError, DeleteRecipeUseCase},
    outgoing::{RecipeRepository, RecipeRepositoryError},
};

pub struct DeleteRecipeService<R>
where
    R: RecipeRepository + Send + Sync,
{
    repository: R,
}

impl<R> DeleteRecipeService<R>
where
    R: RecipeRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

fn map_denied(denied: AccessDenied) -> DeleteRecipeError {
    match denied {
        AccessDenied::AuthenticationRequired => DeleteRecipeError::AuthenticationRequired,
        AccessDenied::NotAuthor => DeleteRecipeError::NotAuthor,
    }
}

#[async_trait]
impl<R> DeleteRecipeUseCase for DeleteRecipeService<R>
where
    R: RecipeRepository + Send + Sync,
{
    async fn execute(
        &self,
        requester: Option<UserId>,
        recipe_id: Uuid,
    ) -> Result<(), DeleteRecipeError> {
        let op = RecipeOperation::Delete;
        RecipeAccessPolicy::check_request(requester.as_ref(), op).map_err(map_denied)?;

        let author = self
            .repository
            .find_author(recipe_id)
            .await
            .map_err(|e| DeleteRecipeError::RepositoryError(e.to_string()))?
            .ok_or(DeleteRecipeError::NotFound)?;

        RecipeAccessPolicy::check_object(requester.as_ref(), op, &author).map_err(map_denied)?;

        self.repository
            .delete_recipe(recipe_id)
            .await
            .map_err(|e| match e {
                RecipeRepositoryError::NotFound => DeleteRecipeError::NotFound,
                other => DeleteRecipeError::RepositoryError(other.to_string()),
            })
    }
}
