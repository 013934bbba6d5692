use async_trait::async_trait;

use super::category_check::{check_category, unknown_category};
use crate::auth::application::domain::entities::UserId;
use crate::category::application::ports::outgoing::CategoryQuery;
use crate::recipe::application::domain::entities::{RecipeChanges, DEFAULT_SERVINGS};
use crate::recipe::application::domain::policies::{RecipeAccessPolicy, RecipeOperation};
use crate::recipe::application::domain::validation::{validate_changes, WriteMode};
use crate::recipe::application::ports::{
    incoming::use_cases::{CreateRecipeError, CreateRecipeUseCase},
    outgoing::{CreateRecipeData, RecipeQuery, RecipeRepository, RecipeRepositoryError, RecipeView},
};
use crate::shared::patch_field::PatchField;
use crate::shared::validation::ValidationErrors;

pub struct CreateRecipeService<R, Q, C>
where
    R: RecipeRepository + Send + Sync,
    Q: RecipeQuery + Send + Sync,
    C: CategoryQuery + Send + Sync,
{
    repository: R,
    query: Q,
    categories: C,
}

impl<R, Q, C> CreateRecipeService<R, Q, C>
where
    R: RecipeRepository + Send + Sync,
    Q: RecipeQuery + Send + Sync,
    C: CategoryQuery + Send + Sync,
{
    pub fn new(repository: R, query: Q, categories: C) -> Self {
        Self {
            repository,
            query,
            categories,
        }
    }
}

/// Assumes `changes` already passed `validate_changes` in create mode.
fn to_create_data(author: UserId, changes: RecipeChanges) -> CreateRecipeData {
    CreateRecipeData {
        author,
        category: changes.category.as_value().copied(),
        title: changes
            .title
            .as_value()
            .map(|t| t.trim().to_string())
            .unwrap_or_default(),
        description: changes.description.as_value().cloned().unwrap_or_default(),
        ingredients: changes.ingredients.as_value().cloned().unwrap_or_default(),
        instructions: changes.instructions.as_value().cloned().unwrap_or_default(),
        prep_time: changes.prep_time.as_value().copied().unwrap_or_default(),
        cook_time: changes.cook_time.as_value().copied().unwrap_or_default(),
        servings: changes
            .servings
            .as_value()
            .copied()
            .unwrap_or(DEFAULT_SERVINGS),
        ingredients_list: match changes.ingredients_list {
            PatchField::Value(items) => items,
            _ => Vec::new(),
        },
    }
}

#[async_trait]
impl<R, Q, C> CreateRecipeUseCase for CreateRecipeService<R, Q, C>
where
    R: RecipeRepository + Send + Sync,
    Q: RecipeQuery + Send + Sync,
    C: CategoryQuery + Send + Sync,
{
    fn authorize(&self, requester: Option<UserId>) -> Result<UserId, CreateRecipeError> {
        RecipeAccessPolicy::check_request(requester.as_ref(), RecipeOperation::Create)
            .map_err(|_| CreateRecipeError::AuthenticationRequired)?;
        requester.ok_or(CreateRecipeError::AuthenticationRequired)
    }

    async fn execute(
        &self,
        requester: Option<UserId>,
        changes: RecipeChanges,
    ) -> Result<RecipeView, CreateRecipeError> {
        let author = self.authorize(requester)?;

        // 1️⃣ Validate everything before touching storage
        let mut errors = validate_changes(&changes, WriteMode::Create);
        check_category(&self.categories, &changes.category, &mut errors)
            .await
            .map_err(|e| CreateRecipeError::RepositoryError(e.to_string()))?;
        errors
            .into_result()
            .map_err(CreateRecipeError::InvalidInput)?;

        // 2️⃣ Recipe + ingredients in one transaction
        let category = changes.category.as_value().copied();
        let recipe_id = self
            .repository
            .create_recipe(to_create_data(author, changes))
            .await
            .map_err(|e| match e {
                RecipeRepositoryError::CategoryNotFound => {
                    CreateRecipeError::InvalidInput(ValidationErrors::single(
                        "category",
                        unknown_category(category.unwrap_or_default()),
                    ))
                }
                other => CreateRecipeError::RepositoryError(other.to_string()),
            })?;

        // 3️⃣ Read back with author name and ingredient ids
        self.query
            .get_recipe(recipe_id)
            .await
            .map_err(|e| CreateRecipeError::RepositoryError(e.to_string()))?
            .ok_or_else(|| {
                CreateRecipeError::RepositoryError(format!(
                    "recipe {} missing after insert",
                    recipe_id
                ))
            })
    }
}
