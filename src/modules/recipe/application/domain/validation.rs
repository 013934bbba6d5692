use crate::recipe::application::domain::entities::{
    NewIngredient, RecipeChanges, INGREDIENT_NAME_MAX_LEN, INGREDIENT_QUANTITY_MAX_LEN,
    TITLE_MAX_LEN,
};
use crate::shared::patch_field::PatchField;
use crate::shared::validation::ValidationErrors;

const REQUIRED: &str = "This field is required.";
const NOT_NULL: &str = "This field may not be null.";
const NOT_BLANK: &str = "This field may not be blank.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    Create,
    /// PUT: required fields must be supplied again.
    Replace,
    /// PATCH: every field is optional.
    Partial,
}

impl WriteMode {
    fn requires_all(self) -> bool {
        !matches!(self, WriteMode::Partial)
    }
}

fn too_long(max: usize) -> String {
    format!("Ensure this field has no more than {} characters.", max)
}

/// Checks presence and nullability, returning the value when there is one.
fn present<'a, T>(
    errors: &mut ValidationErrors,
    field: &str,
    value: &'a PatchField<T>,
    required: bool,
) -> Option<&'a T> {
    match value {
        PatchField::Value(v) => Some(v),
        PatchField::Null => {
            errors.add(field, NOT_NULL);
            None
        }
        PatchField::Unset => {
            if required {
                errors.add(field, REQUIRED);
            }
            None
        }
    }
}

fn check_ingredients(errors: &mut ValidationErrors, items: &[NewIngredient]) {
    for (idx, item) in items.iter().enumerate() {
        let name_key = format!("ingredients_list[{}].name", idx);
        let name = item.name.trim();
        if name.is_empty() {
            errors.add(&name_key, NOT_BLANK);
        } else if name.chars().count() > INGREDIENT_NAME_MAX_LEN {
            errors.add(&name_key, too_long(INGREDIENT_NAME_MAX_LEN));
        }

        if item.quantity.trim().chars().count() > INGREDIENT_QUANTITY_MAX_LEN {
            errors.add(
                &format!("ingredients_list[{}].quantity", idx),
                too_long(INGREDIENT_QUANTITY_MAX_LEN),
            );
        }
    }
}

/// Field-level checks for a recipe write. Category existence needs the
/// database and is checked by the caller.
pub fn validate_changes(changes: &RecipeChanges, mode: WriteMode) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    let required = mode.requires_all();

    if let Some(title) = present(&mut errors, "title", &changes.title, required) {
        let title = title.trim();
        if title.is_empty() {
            errors.add("title", NOT_BLANK);
        } else if title.chars().count() > TITLE_MAX_LEN {
            errors.add("title", too_long(TITLE_MAX_LEN));
        }
    }

    present(&mut errors, "description", &changes.description, false);
    present(&mut errors, "ingredients", &changes.ingredients, false);
    present(&mut errors, "instructions", &changes.instructions, false);

    if let Some(&prep_time) = present(&mut errors, "prep_time", &changes.prep_time, required) {
        if prep_time < 0 {
            errors.add("prep_time", "Ensure this value is greater than or equal to 0.");
        }
    }

    if let Some(&cook_time) = present(&mut errors, "cook_time", &changes.cook_time, required) {
        if cook_time <= 0 {
            errors.add("cook_time", "Cooking time must be greater than 0.");
        }
    }

    if let Some(&servings) = present(&mut errors, "servings", &changes.servings, false) {
        if servings < 0 {
            errors.add("servings", "Ensure this value is greater than or equal to 0.");
        }
    }

    if let Some(items) = present(
        &mut errors,
        "ingredients_list",
        &changes.ingredients_list,
        false,
    ) {
        check_ingredients(&mut errors, items);
    }

    errors
}
