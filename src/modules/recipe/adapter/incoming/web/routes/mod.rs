mod create_recipe;
mod delete_recipe;
mod get_recipes;
mod get_single_recipe;
mod update_recipe;

pub use create_recipe::*;
pub use delete_recipe::*;
pub use get_recipes::*;
pub use get_single_recipe::*;
pub use update_recipe::*;
