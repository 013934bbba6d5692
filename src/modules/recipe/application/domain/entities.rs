use serde::Serialize;
use uuid::Uuid;

use crate::shared::patch_field::PatchField;

pub const TITLE_MAX_LEN: usize = 200;
pub const INGREDIENT_NAME_MAX_LEN: usize = 100;
pub const INGREDIENT_QUANTITY_MAX_LEN: usize = 100;
pub const DEFAULT_SERVINGS: i32 = 1;

/// A stored ingredient line. Lines have no identity across updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ingredient {
    pub id: Uuid,
    pub name: String,
    pub quantity: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewIngredient {
    pub name: String,
    pub quantity: String,
}

/// Client-supplied recipe fields for any write.
///
/// `Unset` means the key was absent. On create and full update the required
/// fields must be present; on partial update absent fields keep their value.
/// `category: Null` clears the category. Every other `Null` is rejected.
/// A present `ingredients_list` replaces the stored lines wholesale.
#[derive(Debug, Clone, Default)]
pub struct RecipeChanges {
    pub category: PatchField<Uuid>,
    pub title: PatchField<String>,
    pub description: PatchField<String>,
    pub ingredients: PatchField<String>,
    pub instructions: PatchField<String>,
    pub prep_time: PatchField<i32>,
    pub cook_time: PatchField<i32>,
    pub servings: PatchField<i32>,
    pub ingredients_list: PatchField<Vec<NewIngredient>>,
}
