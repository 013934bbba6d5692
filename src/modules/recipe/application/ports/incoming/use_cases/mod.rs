mod create_recipe;
mod delete_recipe;
mod get_recipes;
mod get_single_recipe;
mod update_recipe;

pub use create_recipe::{CreateRecipeError, CreateRecipeUseCase};
pub use delete_recipe::{DeleteRecipeError, DeleteRecipeUseCase};
pub use get_recipes::{GetRecipesError, GetRecipesUseCase};
pub use get_single_recipe::{GetSingleRecipeError, GetSingleRecipeUseCase};
pub use update_recipe::{UpdateMode, UpdateRecipeError, UpdateRecipeUseCase};
