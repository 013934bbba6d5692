use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::recipe::application::domain::entities::{Ingredient, NewIngredient, RecipeChanges};
use crate::recipe::application::ports::outgoing::RecipeView;
use crate::shared::patch_field::PatchField;
use crate::shared::validation::ValidationErrors;

/// Key for errors that belong to the body as a whole.
pub const NON_FIELD_ERRORS: &str = "non_field_errors";

//
// ──────────────────────────────────────────────────────────
// Request DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct IngredientRequest {
    #[schema(example = "Water")]
    pub name: String,
    #[serde(default)]
    #[schema(example = "1L")]
    pub quantity: String,
}

/// Body for POST, PUT and PATCH.
///
/// Omitted keys stay `Unset`. `author` is not accepted; unknown keys are
/// ignored.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct RecipeRequest {
    #[serde(default)]
    #[schema(value_type = Option<Uuid>)]
    pub category: PatchField<Uuid>,

    #[serde(default)]
    #[schema(value_type = Option<String>, example = "Pancakes")]
    pub title: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub description: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub ingredients: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub instructions: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<i32>, example = 10)]
    pub prep_time: PatchField<i32>,

    #[serde(default)]
    #[schema(value_type = Option<i32>, example = 20)]
    pub cook_time: PatchField<i32>,

    #[serde(default)]
    #[schema(value_type = Option<i32>, example = 4)]
    pub servings: PatchField<i32>,

    /// Present (even empty) replaces every stored line.
    #[serde(default)]
    #[schema(value_type = Option<Vec<IngredientRequest>>)]
    pub ingredients_list: PatchField<Vec<IngredientRequest>>,
}

impl RecipeRequest {
    /// Parses a raw JSON body. Mistyped values are reported under their own
    /// key; a body that is not a JSON object goes under `non_field_errors`.
    pub fn from_json(body: &[u8]) -> Result<Self, ValidationErrors> {
        let value: serde_json::Value = serde_json::from_slice(body).map_err(|e| {
            ValidationErrors::single(NON_FIELD_ERRORS, format!("JSON parse error - {}", e))
        })?;
        let serde_json::Value::Object(mut body) = value else {
            return Err(ValidationErrors::single(
                NON_FIELD_ERRORS,
                "Invalid data. Expected a dictionary.",
            ));
        };

        let mut errors = ValidationErrors::new();
        let request = Self {
            category: PatchField::take(&mut body, "category", &mut errors),
            title: PatchField::take(&mut body, "title", &mut errors),
            description: PatchField::take(&mut body, "description", &mut errors),
            ingredients: PatchField::take(&mut body, "ingredients", &mut errors),
            instructions: PatchField::take(&mut body, "instructions", &mut errors),
            prep_time: PatchField::take(&mut body, "prep_time", &mut errors),
            cook_time: PatchField::take(&mut body, "cook_time", &mut errors),
            servings: PatchField::take(&mut body, "servings", &mut errors),
            ingredients_list: PatchField::take(&mut body, "ingredients_list", &mut errors),
        };
        errors.into_result()?;
        Ok(request)
    }
}

impl From<RecipeRequest> for RecipeChanges {
    fn from(req: RecipeRequest) -> Self {
        RecipeChanges {
            category: req.category,
            title: req.title,
            description: req.description,
            ingredients: req.ingredients,
            instructions: req.instructions,
            prep_time: req.prep_time,
            cook_time: req.cook_time,
            servings: req.servings,
            ingredients_list: req.ingredients_list.map(|items| {
                items
                    .into_iter()
                    .map(|i| NewIngredient {
                        name: i.name,
                        quantity: i.quantity,
                    })
                    .collect()
            }),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Response DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Serialize, ToSchema)]
pub struct IngredientResponse {
    pub id: Uuid,
    pub name: String,
    pub quantity: String,
}

impl From<Ingredient> for IngredientResponse {
    fn from(i: Ingredient) -> Self {
        Self {
            id: i.id,
            name: i.name,
            quantity: i.quantity,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RecipeResponse {
    pub id: Uuid,
    /// Author's username
    #[schema(example = "alice")]
    pub author: String,
    pub category: Option<Uuid>,
    pub title: String,
    pub description: String,
    pub ingredients: String,
    pub instructions: String,
    pub prep_time: i32,
    pub cook_time: i32,
    pub servings: i32,
    pub ingredients_list: Vec<IngredientResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<RecipeView> for RecipeResponse {
    fn from(v: RecipeView) -> Self {
        Self {
            id: v.id,
            author: v.author,
            category: v.category,
            title: v.title,
            description: v.description,
            ingredients: v.ingredients,
            instructions: v.instructions,
            prep_time: v.prep_time,
            cook_time: v.cook_time,
            servings: v.servings,
            ingredients_list: v
                .ingredients_list
                .into_iter()
                .map(IngredientResponse::from)
                .collect(),
            created_at: v.created_at,
            updated_at: v.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absent_null_and_empty_ingredients_list_are_distinct() {
        let absent: RecipeRequest = serde_json::from_value(json!({ "title": "Soup" })).unwrap();
        assert!(absent.ingredients_list.is_unset());

        let null: RecipeRequest =
            serde_json::from_value(json!({ "ingredients_list": null })).unwrap();
        assert!(null.ingredients_list.is_null());

        let empty: RecipeRequest =
            serde_json::from_value(json!({ "ingredients_list": [] })).unwrap();
        let changes = RecipeChanges::from(empty);
        assert_eq!(changes.ingredients_list.as_value(), Some(&Vec::new()));
    }

    #[test]
    fn from_json_keys_type_errors_by_field() {
        let body = br#"{"cook_time": "abc", "prep_time": 99999999999, "category": "nope", "title": "Soup"}"#;

        let errors = RecipeRequest::from_json(body).unwrap_err();

        assert!(errors.contains("cook_time"));
        assert!(errors.contains("prep_time"));
        assert!(errors.contains("category"));
        assert!(!errors.contains("title"));
    }

    #[test]
    fn from_json_rejects_broken_and_non_object_bodies() {
        let broken = RecipeRequest::from_json(br#"{"title": "#).unwrap_err();
        assert!(broken.contains(NON_FIELD_ERRORS));

        let list = RecipeRequest::from_json(b"[1, 2]").unwrap_err();
        assert!(list.contains(NON_FIELD_ERRORS));
    }

    #[test]
    fn from_json_keeps_absent_null_and_value_apart() {
        let req = RecipeRequest::from_json(
            br#"{"author": "mallory", "category": null, "ingredients_list": [{"name": "Salt"}]}"#,
        )
        .unwrap();

        assert!(req.category.is_null());
        assert!(req.title.is_unset());
        let items = req.ingredients_list.as_value().unwrap();
        assert_eq!(items[0].name, "Salt");
        assert_eq!(items[0].quantity, "");
    }

    #[test]
    fn author_key_is_ignored() {
        let req: RecipeRequest = serde_json::from_value(json!({
            "author": "mallory",
            "title": "Soup",
            "ingredients_list": [{ "name": "Water" }]
        }))
        .unwrap();

        let changes = RecipeChanges::from(req);
        let items = changes.ingredients_list.as_value().unwrap();
        assert_eq!(items[0].name, "Water");
        assert_eq!(items[0].quantity, "");
    }
}
