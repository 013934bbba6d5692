use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait,
    QueryFilter, Set, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::{ingredients, recipes};
use crate::auth::application::domain::entities::UserId;
use crate::recipe::application::domain::entities::NewIngredient;
use crate::recipe::application::ports::outgoing::{
    CreateRecipeData, PatchRecipeData, RecipeRepository, RecipeRepositoryError,
};
use crate::shared::db_error::is_foreign_key_violation;
use crate::shared::patch_field::PatchField;

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct RecipeRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl RecipeRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Inserts ingredient rows in input order. Empty input is a no-op.
    async fn insert_ingredients<C>(
        conn: &C,
        recipe_id: Uuid,
        items: Vec<NewIngredient>,
    ) -> Result<(), DbErr>
    where
        C: ConnectionTrait,
    {
        if items.is_empty() {
            return Ok(());
        }

        let rows = items
            .into_iter()
            .enumerate()
            .map(|(position, item)| ingredients::ActiveModel {
                id: Set(Uuid::new_v4()),
                recipe_id: Set(recipe_id),
                name: Set(item.name.trim().to_string()),
                quantity: Set(item.quantity.trim().to_string()),
                position: Set(position as i32),
            });

        ingredients::Entity::insert_many(rows)
            .exec_without_returning(conn)
            .await?;

        Ok(())
    }

    async fn create_in_txn(
        txn: &DatabaseTransaction,
        recipe_id: Uuid,
        data: CreateRecipeData,
    ) -> Result<(), RecipeRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = recipes::ActiveModel {
            id: Set(recipe_id),
            author_id: Set(data.author.into()),
            category_id: Set(data.category),
            title: Set(data.title),
            description: Set(data.description),
            ingredients: Set(data.ingredients),
            instructions: Set(data.instructions),
            prep_time: Set(data.prep_time),
            cook_time: Set(data.cook_time),
            servings: Set(data.servings),
            created_at: Set(now),
            updated_at: Set(now),
        };

        recipes::Entity::insert(model)
            .exec_without_returning(txn)
            .await
            .map_err(map_write_err)?;

        Self::insert_ingredients(txn, recipe_id, data.ingredients_list)
            .await
            .map_err(map_write_err)
    }

    async fn patch_in_txn(
        txn: &DatabaseTransaction,
        recipe_id: Uuid,
        data: PatchRecipeData,
    ) -> Result<(), RecipeRepositoryError> {
        let mut model = <recipes::ActiveModel as Default>::default();

        match data.category {
            PatchField::Unset => {}
            PatchField::Null => model.category_id = Set(None),
            PatchField::Value(id) => model.category_id = Set(Some(id)),
        }

        if let PatchField::Value(title) = data.title {
            model.title = Set(title);
        }
        if let PatchField::Value(description) = data.description {
            model.description = Set(description);
        }
        if let PatchField::Value(ingredients) = data.ingredients {
            model.ingredients = Set(ingredients);
        }
        if let PatchField::Value(instructions) = data.instructions {
            model.instructions = Set(instructions);
        }
        if let PatchField::Value(prep_time) = data.prep_time {
            model.prep_time = Set(prep_time);
        }
        if let PatchField::Value(cook_time) = data.cook_time {
            model.cook_time = Set(cook_time);
        }
        if let PatchField::Value(servings) = data.servings {
            model.servings = Set(servings);
        }

        // Every update counts as a write
        model.updated_at = Set(Utc::now().fixed_offset());

        let result = recipes::Entity::update_many()
            .set(model)
            .filter(recipes::Column::Id.eq(recipe_id))
            .exec(txn)
            .await
            .map_err(map_write_err)?;

        if result.rows_affected == 0 {
            return Err(RecipeRepositoryError::NotFound);
        }

        if let Some(items) = data.ingredients_list {
            ingredients::Entity::delete_many()
                .filter(ingredients::Column::RecipeId.eq(recipe_id))
                .exec(txn)
                .await
                .map_err(map_db_err)?;

            Self::insert_ingredients(txn, recipe_id, items)
                .await
                .map_err(map_db_err)?;
        }

        Ok(())
    }
}

#[async_trait]
impl RecipeRepository for RecipeRepositoryPostgres {
    async fn find_author(&self, recipe_id: Uuid) -> Result<Option<UserId>, RecipeRepositoryError> {
        let recipe = recipes::Entity::find_by_id(recipe_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(recipe.map(|r| UserId::from(r.author_id)))
    }

    async fn create_recipe(&self, data: CreateRecipeData) -> Result<Uuid, RecipeRepositoryError> {
        let recipe_id = Uuid::new_v4();
        let txn = self.db.begin().await.map_err(map_db_err)?;

        if let Err(e) = Self::create_in_txn(&txn, recipe_id, data).await {
            let _ = txn.rollback().await;
            return Err(e);
        }

        txn.commit().await.map_err(map_db_err)?;

        Ok(recipe_id)
    }

    async fn patch_recipe(
        &self,
        recipe_id: Uuid,
        data: PatchRecipeData,
    ) -> Result<(), RecipeRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        if let Err(e) = Self::patch_in_txn(&txn, recipe_id, data).await {
            let _ = txn.rollback().await;
            return Err(e);
        }

        txn.commit().await.map_err(map_db_err)
    }

    async fn delete_recipe(&self, recipe_id: Uuid) -> Result<(), RecipeRepositoryError> {
        // Ingredient rows go with it (ON DELETE CASCADE)
        let result = recipes::Entity::delete_by_id(recipe_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(RecipeRepositoryError::NotFound);
        }

        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn map_db_err(e: DbErr) -> RecipeRepositoryError {
    RecipeRepositoryError::DatabaseError(e.to_string())
}

/// Recipe writes only reference users and categories; the author is always
/// the authenticated caller, so an FK failure means the category is gone.
fn map_write_err(e: DbErr) -> RecipeRepositoryError {
    if is_foreign_key_violation(&e) {
        RecipeRepositoryError::CategoryNotFound
    } else {
        map_db_err(e)
    }
}

// ============================================================================
// Tests
// ============================================================================
