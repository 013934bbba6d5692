//! In-memory doubles for the recipe ports, shared by the service tests.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::{UserQuery, UserQueryError, UserQueryResult};
use crate::category::application::domain::entities::Category;
use crate::category::application::ports::outgoing::{CategoryQuery, CategoryQueryError};
use crate::recipe::application::domain::entities::{Ingredient, NewIngredient};
use crate::recipe::application::ports::outgoing::{
    CreateRecipeData, PatchRecipeData, RecipeFilter, RecipeQuery, RecipeQueryError,
    RecipeRepository, RecipeRepositoryError, RecipeView,
};
use crate::shared::patch_field::PatchField;

#[derive(Debug, Clone)]
struct StoredRecipe {
    id: Uuid,
    author: UserId,
    category: Option<Uuid>,
    title: String,
    description: String,
    ingredients: String,
    instructions: String,
    prep_time: i32,
    cook_time: i32,
    servings: i32,
    lines: Vec<Ingredient>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(Default)]
struct Inner {
    users: HashMap<UserId, String>,
    recipes: Vec<StoredRecipe>,
    seq: i64,
}

/// Shared store acting as both repository and query, so writes are visible
/// to reads the way they are against one database.
#[derive(Clone, Default)]
pub struct InMemoryRecipes {
    inner: Arc<Mutex<Inner>>,
    fail: bool,
}

fn lines(items: Vec<NewIngredient>) -> Vec<Ingredient> {
    items
        .into_iter()
        .map(|i| Ingredient {
            id: Uuid::new_v4(),
            name: i.name.trim().to_string(),
            quantity: i.quantity.trim().to_string(),
        })
        .collect()
}

impl InMemoryRecipes {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn add_user(&self, username: &str) -> UserId {
        let id = UserId::from(Uuid::new_v4());
        self.insert_user(id, username);
        id
    }

    pub fn insert_user(&self, id: UserId, username: &str) {
        self.inner
            .lock()
            .unwrap()
            .users
            .insert(id, username.to_string());
    }

    fn next_timestamp(inner: &mut Inner) -> DateTime<Utc> {
        inner.seq += 1;
        Utc::now() - Duration::hours(1) + Duration::seconds(inner.seq)
    }

    pub fn seed_recipe(&self, author: UserId, title: &str, items: &[(&str, &str)]) -> Uuid {
        let mut inner = self.inner.lock().unwrap();
        let now = Self::next_timestamp(&mut inner);
        let id = Uuid::new_v4();
        inner.recipes.push(StoredRecipe {
            id,
            author,
            category: None,
            title: title.to_string(),
            description: String::new(),
            ingredients: String::new(),
            instructions: String::new(),
            prep_time: 5,
            cook_time: 10,
            servings: 2,
            lines: lines(
                items
                    .iter()
                    .map(|(name, quantity)| NewIngredient {
                        name: name.to_string(),
                        quantity: quantity.to_string(),
                    })
                    .collect(),
            ),
            created_at: now,
            updated_at: now,
        });
        id
    }

    pub fn set_category(&self, recipe_id: Uuid, category: Option<Uuid>) {
        let mut inner = self.inner.lock().unwrap();
        if let Some(r) = inner.recipes.iter_mut().find(|r| r.id == recipe_id) {
            r.category = category;
        }
    }

    pub fn recipe_count(&self) -> usize {
        self.inner.lock().unwrap().recipes.len()
    }

    pub fn ingredient_count(&self) -> usize {
        self.inner
            .lock()
            .unwrap()
            .recipes
            .iter()
            .map(|r| r.lines.len())
            .sum()
    }

    pub fn snapshot(&self, recipe_id: Uuid) -> RecipeView {
        let inner = self.inner.lock().unwrap();
        let recipe = inner
            .recipes
            .iter()
            .find(|r| r.id == recipe_id)
            .expect("recipe seeded");
        Self::view(&inner, recipe)
    }

    fn view(inner: &Inner, r: &StoredRecipe) -> RecipeView {
        RecipeView {
            id: r.id,
            author: inner.users.get(&r.author).cloned().unwrap_or_default(),
            category: r.category,
            title: r.title.clone(),
            description: r.description.clone(),
            ingredients: r.ingredients.clone(),
            instructions: r.instructions.clone(),
            prep_time: r.prep_time,
            cook_time: r.cook_time,
            servings: r.servings,
            ingredients_list: r.lines.clone(),
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }

    fn db_error() -> String {
        "connection refused".to_string()
    }
}

fn apply<T>(target: &mut T, field: PatchField<T>) {
    if let PatchField::Value(v) = field {
        *target = v;
    }
}

#[async_trait]
impl RecipeRepository for InMemoryRecipes {
    async fn find_author(&self, recipe_id: Uuid) -> Result<Option<UserId>, RecipeRepositoryError> {
        if self.fail {
            return Err(RecipeRepositoryError::DatabaseError(Self::db_error()));
        }
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .recipes
            .iter()
            .find(|r| r.id == recipe_id)
            .map(|r| r.author))
    }

    async fn create_recipe(&self, data: CreateRecipeData) -> Result<Uuid, RecipeRepositoryError> {
        if self.fail {
            return Err(RecipeRepositoryError::DatabaseError(Self::db_error()));
        }
        let mut inner = self.inner.lock().unwrap();
        let now = Self::next_timestamp(&mut inner);
        let id = Uuid::new_v4();
        inner.recipes.push(StoredRecipe {
            id,
            author: data.author,
            category: data.category,
            title: data.title,
            description: data.description,
            ingredients: data.ingredients,
            instructions: data.instructions,
            prep_time: data.prep_time,
            cook_time: data.cook_time,
            servings: data.servings,
            lines: lines(data.ingredients_list),
            created_at: now,
            updated_at: now,
        });
        Ok(id)
    }

    async fn patch_recipe(
        &self,
        recipe_id: Uuid,
        data: PatchRecipeData,
    ) -> Result<(), RecipeRepositoryError> {
        if self.fail {
            return Err(RecipeRepositoryError::DatabaseError(Self::db_error()));
        }
        let mut inner = self.inner.lock().unwrap();
        let recipe = inner
            .recipes
            .iter_mut()
            .find(|r| r.id == recipe_id)
            .ok_or(RecipeRepositoryError::NotFound)?;

        match data.category {
            PatchField::Unset => {}
            PatchField::Null => recipe.category = None,
            PatchField::Value(c) => recipe.category = Some(c),
        }
        apply(&mut recipe.title, data.title);
        apply(&mut recipe.description, data.description);
        apply(&mut recipe.ingredients, data.ingredients);
        apply(&mut recipe.instructions, data.instructions);
        apply(&mut recipe.prep_time, data.prep_time);
        apply(&mut recipe.cook_time, data.cook_time);
        apply(&mut recipe.servings, data.servings);
        if let Some(items) = data.ingredients_list {
            recipe.lines = lines(items);
        }
        recipe.updated_at = Utc::now();
        Ok(())
    }

    async fn delete_recipe(&self, recipe_id: Uuid) -> Result<(), RecipeRepositoryError> {
        if self.fail {
            return Err(RecipeRepositoryError::DatabaseError(Self::db_error()));
        }
        let mut inner = self.inner.lock().unwrap();
        let before = inner.recipes.len();
        inner.recipes.retain(|r| r.id != recipe_id);
        if inner.recipes.len() == before {
            return Err(RecipeRepositoryError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl RecipeQuery for InMemoryRecipes {
    async fn list_recipes(&self, filter: RecipeFilter) -> Result<Vec<RecipeView>, RecipeQueryError> {
        if self.fail {
            return Err(RecipeQueryError::DatabaseError(Self::db_error()));
        }
        let inner = self.inner.lock().unwrap();
        let needle = filter.search.as_deref().map(str::to_lowercase);

        let mut matching: Vec<&StoredRecipe> = inner
            .recipes
            .iter()
            .filter(|r| filter.author.map_or(true, |a| r.author == a))
            .filter(|r| filter.category.map_or(true, |c| r.category == Some(c)))
            .filter(|r| {
                needle.as_deref().map_or(true, |n| {
                    r.title.to_lowercase().contains(n) || r.ingredients.to_lowercase().contains(n)
                })
            })
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(matching.into_iter().map(|r| Self::view(&inner, r)).collect())
    }

    async fn get_recipe(&self, recipe_id: Uuid) -> Result<Option<RecipeView>, RecipeQueryError> {
        if self.fail {
            return Err(RecipeQueryError::DatabaseError(Self::db_error()));
        }
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .recipes
            .iter()
            .find(|r| r.id == recipe_id)
            .map(|r| Self::view(&inner, r)))
    }
}

/// Lets the author filter resolve usernames against the same store.
#[async_trait]
impl UserQuery for InMemoryRecipes {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<UserQueryResult>, UserQueryError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .users
            .get(&UserId::from(user_id))
            .map(|name| user_result(user_id, name)))
    }

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserQueryResult>, UserQueryError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .users
            .iter()
            .find(|(_, name)| name.as_str() == username)
            .map(|(id, name)| user_result(id.value(), name)))
    }
}

fn user_result(id: Uuid, username: &str) -> UserQueryResult {
    UserQueryResult {
        id,
        username: username.to_string(),
        email: String::new(),
        password_hash: String::new(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

#[derive(Clone, Default)]
pub struct FakeCategories {
    known: Vec<Uuid>,
}

impl FakeCategories {
    pub fn with(known: Vec<Uuid>) -> Self {
        Self { known }
    }
}

#[async_trait]
impl CategoryQuery for FakeCategories {
    async fn list_categories(&self) -> Result<Vec<Category>, CategoryQueryError> {
        Ok(self
            .known
            .iter()
            .map(|id| Category {
                id: *id,
                name: id.to_string(),
                description: String::new(),
                created_at: Utc::now(),
            })
            .collect())
    }

    async fn category_exists(&self, category_id: Uuid) -> Result<bool, CategoryQueryError> {
        Ok(self.known.contains(&category_id))
    }
}
