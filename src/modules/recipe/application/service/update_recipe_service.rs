use async_trait::async_trait;
use uuid::Uuid;

use super::category_check::{check_category, unknown_category};
use crate::auth::application::domain::entities::UserId;
use crate::category::application::ports::outgoing::CategoryQuery;
use crate::recipe::application::domain::entities::RecipeChanges;
use crate::recipe::application::domain::policies::{AccessDenied, RecipeAccessPolicy};
use crate::recipe::application::domain::validation::validate_changes;
use crate::recipe::application::ports::{
    incoming::use_cases::{UpdateMode, UpdateRecipeError, UpdateRecipeUseCase},
    outgoing::{PatchRecipeData, RecipeQuery, RecipeRepository, RecipeRepositoryError, RecipeView},
};
use crate::shared::patch_field::PatchField;
use crate::shared::validation::ValidationErrors;

//
// ──────────────────────────────────────────────────────────
// Service (PUT and PATCH)
// ──────────────────────────────────────────────────────────
//

pub struct UpdateRecipeService<R, Q, C>
where
    R: RecipeRepository + Send + Sync,
    Q: RecipeQuery + Send + Sync,
    C: CategoryQuery + Send + Sync,
{
    repository: R,
    query: Q,
    categories: C,
}

impl<R, Q, C> UpdateRecipeService<R, Q, C>
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

fn map_denied(denied: AccessDenied) -> UpdateRecipeError {
    match denied {
        AccessDenied::AuthenticationRequired => UpdateRecipeError::AuthenticationRequired,
        AccessDenied::NotAuthor => UpdateRecipeError::NotAuthor,
    }
}

fn to_patch_data(changes: RecipeChanges) -> PatchRecipeData {
    PatchRecipeData {
        category: changes.category,
        title: changes.title.map(|t| t.trim().to_string()),
        description: changes.description,
        ingredients: changes.ingredients,
        instructions: changes.instructions,
        prep_time: changes.prep_time,
        cook_time: changes.cook_time,
        servings: changes.servings,
        ingredients_list: match changes.ingredients_list {
            PatchField::Value(items) => Some(items),
            PatchField::Unset | PatchField::Null => None,
        },
    }
}

#[async_trait]
impl<R, Q, C> UpdateRecipeUseCase for UpdateRecipeService<R, Q, C>
where
    R: RecipeRepository + Send + Sync,
    Q: RecipeQuery + Send + Sync,
    C: CategoryQuery + Send + Sync,
{
    async fn authorize(
        &self,
        requester: Option<UserId>,
        recipe_id: Uuid,
        mode: UpdateMode,
    ) -> Result<(), UpdateRecipeError> {
        let op = mode.operation();

        // 1️⃣ 401 before anything else, even for unknown ids
        RecipeAccessPolicy::check_request(requester.as_ref(), op).map_err(map_denied)?;

        // 2️⃣ 404
        let author = self
            .repository
            .find_author(recipe_id)
            .await
            .map_err(|e| UpdateRecipeError::RepositoryError(e.to_string()))?
            .ok_or(UpdateRecipeError::NotFound)?;

        // 3️⃣ 403
        RecipeAccessPolicy::check_object(requester.as_ref(), op, &author).map_err(map_denied)
    }

    async fn execute(
        &self,
        requester: Option<UserId>,
        recipe_id: Uuid,
        mode: UpdateMode,
        changes: RecipeChanges,
    ) -> Result<RecipeView, UpdateRecipeError> {
        self.authorize(requester, recipe_id, mode).await?;

        // 4️⃣ Validate, then write
        let mut errors = validate_changes(&changes, mode.write_mode());
        check_category(&self.categories, &changes.category, &mut errors)
            .await
            .map_err(|e| UpdateRecipeError::RepositoryError(e.to_string()))?;
        errors
            .into_result()
            .map_err(UpdateRecipeError::InvalidInput)?;

        let category = changes.category.as_value().copied();
        self.repository
            .patch_recipe(recipe_id, to_patch_data(changes))
            .await
            .map_err(|e| match e {
                RecipeRepositoryError::NotFound => UpdateRecipeError::NotFound,
                RecipeRepositoryError::CategoryNotFound => {
                    UpdateRecipeError::InvalidInput(ValidationErrors::single(
                        "category",
                        unknown_category(category.unwrap_or_default()),
                    ))
                }
                RecipeRepositoryError::DatabaseError(msg) => {
                    UpdateRecipeError::RepositoryError(msg)
                }
            })?;

        self.query
            .get_recipe(recipe_id)
            .await
            .map_err(|e| UpdateRecipeError::RepositoryError(e.to_string()))?
            .ok_or(UpdateRecipeError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::application::domain::entities::NewIngredient;
    use crate::recipe::application::service::in_memory::{FakeCategories, InMemoryRecipes};

    fn service(
        store: &InMemoryRecipes,
        categories: FakeCategories,
    ) -> UpdateRecipeService<InMemoryRecipes, InMemoryRecipes, FakeCategories> {
        UpdateRecipeService::new(store.clone(), store.clone(), categories)
    }

    fn soup(store: &InMemoryRecipes, author: UserId) -> Uuid {
        store.seed_recipe(author, "Soup", &[("Water", "1L"), ("Salt", "1 pinch")])
    }

    fn new_ingredient(name: &str, quantity: &str) -> NewIngredient {
        NewIngredient {
            name: name.to_string(),
            quantity: quantity.to_string(),
        }
    }

    #[tokio::test]
    async fn patch_replaces_ingredient_set_exactly() {
        let store = InMemoryRecipes::default();
        let alice = store.add_user("alice");
        let id = soup(&store, alice);
        let svc = service(&store, FakeCategories::default());

        let changes = RecipeChanges {
            ingredients_list: PatchField::Value(vec![new_ingredient("New Ingredient", "100g")]),
            ..Default::default()
        };
        let view = svc
            .execute(Some(alice), id, UpdateMode::Partial, changes)
            .await
            .unwrap();

        assert_eq!(view.ingredients_list.len(), 1);
        assert_eq!(view.ingredients_list[0].name, "New Ingredient");
        assert_eq!(view.ingredients_list[0].quantity, "100g");
        assert_eq!(store.ingredient_count(), 1);
        assert_eq!(view.title, "Soup");
    }

    #[tokio::test]
    async fn patch_without_ingredients_list_keeps_rows() {
        let store = InMemoryRecipes::default();
        let alice = store.add_user("alice");
        let id = soup(&store, alice);
        let before = store.snapshot(id);
        let svc = service(&store, FakeCategories::default());

        let changes = RecipeChanges {
            title: PatchField::Value("Better Soup".to_string()),
            ..Default::default()
        };
        let view = svc
            .execute(Some(alice), id, UpdateMode::Partial, changes)
            .await
            .unwrap();

        assert_eq!(view.title, "Better Soup");
        assert_eq!(view.ingredients_list, before.ingredients_list);
        assert!(view.updated_at >= before.updated_at);
    }

    #[tokio::test]
    async fn patch_with_empty_list_clears_ingredients() {
        let store = InMemoryRecipes::default();
        let alice = store.add_user("alice");
        let id = soup(&store, alice);
        let svc = service(&store, FakeCategories::default());

        let changes = RecipeChanges {
            ingredients_list: PatchField::Value(vec![]),
            ..Default::default()
        };
        let view = svc
            .execute(Some(alice), id, UpdateMode::Partial, changes)
            .await
            .unwrap();

        assert!(view.ingredients_list.is_empty());
        assert_eq!(store.ingredient_count(), 0);
    }

    #[tokio::test]
    async fn non_author_patch_is_forbidden_and_changes_nothing() {
        let store = InMemoryRecipes::default();
        let alice = store.add_user("alice");
        let bob = store.add_user("bob");
        let id = soup(&store, alice);
        let before = store.snapshot(id);
        let svc = service(&store, FakeCategories::default());

        let changes = RecipeChanges {
            title: PatchField::Value("Hijacked".to_string()),
            ingredients_list: PatchField::Value(vec![]),
            ..Default::default()
        };
        let result = svc
            .execute(Some(bob), id, UpdateMode::Partial, changes)
            .await;

        assert!(matches!(result, Err(UpdateRecipeError::NotAuthor)));
        let after = store.snapshot(id);
        assert_eq!(after.title, before.title);
        assert_eq!(after.ingredients_list, before.ingredients_list);
        assert_eq!(after.updated_at, before.updated_at);
    }

    #[tokio::test]
    async fn anonymous_patch_on_unknown_id_is_unauthenticated() {
        let svc = service(&InMemoryRecipes::default(), FakeCategories::default());

        let result = svc
            .execute(None, Uuid::new_v4(), UpdateMode::Partial, RecipeChanges::default())
            .await;

        assert!(matches!(result, Err(UpdateRecipeError::AuthenticationRequired)));
    }

    #[tokio::test]
    async fn unknown_id_is_not_found_before_validation() {
        let store = InMemoryRecipes::default();
        let alice = store.add_user("alice");
        let svc = service(&store, FakeCategories::default());

        let changes = RecipeChanges {
            cook_time: PatchField::Value(0),
            ..Default::default()
        };
        let result = svc
            .execute(Some(alice), Uuid::new_v4(), UpdateMode::Partial, changes)
            .await;

        assert!(matches!(result, Err(UpdateRecipeError::NotFound)));
    }

    #[tokio::test]
    async fn put_requires_required_fields() {
        let store = InMemoryRecipes::default();
        let alice = store.add_user("alice");
        let id = soup(&store, alice);
        let svc = service(&store, FakeCategories::default());

        let changes = RecipeChanges {
            title: PatchField::Value("Only a title".to_string()),
            ..Default::default()
        };
        let result = svc
            .execute(Some(alice), id, UpdateMode::Full, changes)
            .await;

        match result {
            Err(UpdateRecipeError::InvalidInput(errors)) => {
                assert!(errors.contains("prep_time"));
                assert!(errors.contains("cook_time"));
                assert!(!errors.contains("title"));
            }
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
        assert_eq!(store.snapshot(id).title, "Soup");
    }

    #[tokio::test]
    async fn put_with_all_required_fields_succeeds() {
        let store = InMemoryRecipes::default();
        let alice = store.add_user("alice");
        let id = soup(&store, alice);
        let svc = service(&store, FakeCategories::default());

        let changes = RecipeChanges {
            title: PatchField::Value("Stew".to_string()),
            prep_time: PatchField::Value(15),
            cook_time: PatchField::Value(90),
            servings: PatchField::Value(6),
            ..Default::default()
        };
        let view = svc
            .execute(Some(alice), id, UpdateMode::Full, changes)
            .await
            .unwrap();

        assert_eq!(view.title, "Stew");
        assert_eq!(view.cook_time, 90);
        assert_eq!(view.servings, 6);
        assert_eq!(view.ingredients_list.len(), 2);
    }

    #[tokio::test]
    async fn null_category_clears_it() {
        let store = InMemoryRecipes::default();
        let alice = store.add_user("alice");
        let category = Uuid::new_v4();
        let id = soup(&store, alice);
        store.set_category(id, Some(category));
        let svc = service(&store, FakeCategories::with(vec![category]));

        let changes = RecipeChanges {
            category: PatchField::Null,
            ..Default::default()
        };
        let view = svc
            .execute(Some(alice), id, UpdateMode::Partial, changes)
            .await
            .unwrap();

        assert_eq!(view.category, None);
    }

    #[tokio::test]
    async fn unknown_category_is_validation_error() {
        let store = InMemoryRecipes::default();
        let alice = store.add_user("alice");
        let id = soup(&store, alice);
        let svc = service(&store, FakeCategories::default());

        let changes = RecipeChanges {
            category: PatchField::Value(Uuid::new_v4()),
            ..Default::default()
        };
        let result = svc
            .execute(Some(alice), id, UpdateMode::Partial, changes)
            .await;

        assert!(matches!(
            result,
            Err(UpdateRecipeError::InvalidInput(errors)) if errors.contains("category")
        ));
    }
}
