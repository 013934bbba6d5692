mod category_check;
mod create_recipe_service;
mod delete_recipe_service;
mod get_recipes_service;
mod get_single_recipe_service;
mod update_recipe_service;

#[cfg(test)]
pub(crate) mod in_memory;

pub use create_recipe_service::CreateRecipeService;
pub use delete_recipe_service::DeleteRecipeService;
pub use get_recipes_service::GetRecipesService;
pub use get_single_recipe_service::GetSingleRecipeService;
pub use update_recipe_service::UpdateRecipeService;
