use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::recipe::application::domain::entities::NewIngredient;
use crate::shared::patch_field::PatchField;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateRecipeData {
    pub author: UserId,
    pub category: Option<Uuid>,
    pub title: String,
    pub description: String,
    pub ingredients: String,
    pub instructions: String,
    pub prep_time: i32,
    pub cook_time: i32,
    pub servings: i32,
    pub ingredients_list: Vec<NewIngredient>,
}

/// Patch semantics:
/// - scalars: Unset => keep, Value => replace
/// - category: Unset => keep, Null => clear, Value => set
/// - ingredients_list: None => keep rows, Some(list) => replace all rows
///
/// `updated_at` is written on every patch, even an empty one.
#[derive(Debug, Clone, Default)]
pub struct PatchRecipeData {
    pub category: PatchField<Uuid>,
    pub title: PatchField<String>,
    pub description: PatchField<String>,
    pub ingredients: PatchField<String>,
    pub instructions: PatchField<String>,
    pub prep_time: PatchField<i32>,
    pub cook_time: PatchField<i32>,
    pub servings: PatchField<i32>,
    pub ingredients_list: Option<Vec<NewIngredient>>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum RecipeRepositoryError {
    #[error("Recipe not found")]
    NotFound,

    /// The category vanished between validation and write.
    #[error("Category not found")]
    CategoryNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (write-side, owns ingredient rows)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait RecipeRepository: Send + Sync {
    /// Stored author, or `None` when the recipe does not exist.
    async fn find_author(&self, recipe_id: Uuid) -> Result<Option<UserId>, RecipeRepositoryError>;

    /// Inserts the recipe and its ingredients in one transaction.
    async fn create_recipe(&self, data: CreateRecipeData) -> Result<Uuid, RecipeRepositoryError>;

    /// Scalar update and ingredient replacement share one transaction.
    async fn patch_recipe(
        &self,
        recipe_id: Uuid,
        data: PatchRecipeData,
    ) -> Result<(), RecipeRepositoryError>;

    async fn delete_recipe(&self, recipe_id: Uuid) -> Result<(), RecipeRepositoryError>;
}
