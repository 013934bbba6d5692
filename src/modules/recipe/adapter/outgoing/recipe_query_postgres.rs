use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{
    sea_query::Expr, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::{ingredients, recipes};
use crate::auth::adapter::outgoing::sea_orm_entity::users;
use crate::recipe::application::domain::entities::Ingredient;
use crate::recipe::application::ports::outgoing::{
    RecipeFilter, RecipeQuery, RecipeQueryError, RecipeView,
};

// ============================================================================
// Query Implementation
// ============================================================================

#[derive(Clone)]
pub struct RecipeQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl RecipeQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Attaches author usernames and ingredient lines with one query each.
    async fn hydrate(
        &self,
        models: Vec<recipes::Model>,
    ) -> Result<Vec<RecipeView>, RecipeQueryError> {
        if models.is_empty() {
            return Ok(Vec::new());
        }

        let recipe_ids: Vec<Uuid> = models.iter().map(|m| m.id).collect();
        let mut author_ids: Vec<Uuid> = models.iter().map(|m| m.author_id).collect();
        author_ids.sort();
        author_ids.dedup();

        let usernames: HashMap<Uuid, String> = users::Entity::find()
            .filter(users::Column::Id.is_in(author_ids))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(|u| (u.id, u.username))
            .collect();

        let mut lines: HashMap<Uuid, Vec<Ingredient>> = HashMap::new();
        for row in ingredients::Entity::find()
            .filter(ingredients::Column::RecipeId.is_in(recipe_ids))
            .order_by_asc(ingredients::Column::RecipeId)
            .order_by_asc(ingredients::Column::Position)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
        {
            lines.entry(row.recipe_id).or_default().push(row.to_domain());
        }

        Ok(models
            .into_iter()
            .map(|m| {
                // author_id is a NOT NULL FK, so the username is always present
                let author = usernames.get(&m.author_id).cloned().unwrap_or_default();
                let ingredients_list = lines.remove(&m.id).unwrap_or_default();
                model_to_view(m, author, ingredients_list)
            })
            .collect())
    }
}

#[async_trait]
impl RecipeQuery for RecipeQueryPostgres {
    async fn list_recipes(&self, filter: RecipeFilter) -> Result<Vec<RecipeView>, RecipeQueryError> {
        let mut query = recipes::Entity::find();

        if let Some(ref search) = filter.search {
            let pattern = format!("%{}%", escape_like(search.trim()));
            query = query.filter(
                Condition::any()
                    .add(Expr::col(recipes::Column::Title).ilike(&pattern))
                    .add(Expr::col(recipes::Column::Ingredients).ilike(&pattern)),
            );
        }

        if let Some(category_id) = filter.category {
            query = query.filter(recipes::Column::CategoryId.eq(category_id));
        }

        if let Some(author) = filter.author {
            let author_id: Uuid = author.into();
            query = query.filter(recipes::Column::AuthorId.eq(author_id));
        }

        let models = query
            .order_by_desc(recipes::Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        self.hydrate(models).await
    }

    async fn get_recipe(&self, recipe_id: Uuid) -> Result<Option<RecipeView>, RecipeQueryError> {
        let Some(model) = recipes::Entity::find_by_id(recipe_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
        else {
            return Ok(None);
        };

        Ok(self.hydrate(vec![model]).await?.into_iter().next())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn model_to_view(
    model: recipes::Model,
    author: String,
    ingredients_list: Vec<Ingredient>,
) -> RecipeView {
    RecipeView {
        id: model.id,
        author,
        category: model.category_id,
        title: model.title,
        description: model.description,
        ingredients: model.ingredients,
        instructions: model.instructions,
        prep_time: model.prep_time,
        cook_time: model.cook_time,
        servings: model.servings,
        ingredients_list,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

/// Makes `%`, `_` and `\` match literally inside an ILIKE pattern.
fn escape_like(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn map_db_err(e: DbErr) -> RecipeQueryError {
    RecipeQueryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
