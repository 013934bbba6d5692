use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::recipe::application::domain::entities::Ingredient;

//
// ──────────────────────────────────────────────────────────
// Read models
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Serialize)]
pub struct RecipeView {
    pub id: Uuid,
    /// Author's username
    pub author: String,
    pub category: Option<Uuid>,
    pub title: String,
    pub description: String,
    pub ingredients: String,
    pub instructions: String,
    pub prep_time: i32,
    pub cook_time: i32,
    pub servings: i32,
    /// In insertion order
    pub ingredients_list: Vec<Ingredient>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Optional list filters; all present filters must match.
#[derive(Debug, Clone, Default)]
pub struct RecipeFilter {
    /// Case-insensitive substring of title or ingredients text
    pub search: Option<String>,
    pub category: Option<Uuid>,
    pub author: Option<UserId>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum RecipeQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait RecipeQuery: Send + Sync {
    /// Newest first.
    async fn list_recipes(&self, filter: RecipeFilter) -> Result<Vec<RecipeView>, RecipeQueryError>;

    async fn get_recipe(&self, recipe_id: Uuid) -> Result<Option<RecipeView>, RecipeQueryError>;
}
