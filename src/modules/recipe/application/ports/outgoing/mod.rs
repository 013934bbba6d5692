pub mod recipe_query;
pub mod recipe_repository;

pub use recipe_query::{RecipeFilter, RecipeQuery, RecipeQueryError, RecipeView};
pub use recipe_repository::{
    CreateRecipeData, PatchRecipeData, RecipeRepository, RecipeRepositoryError,
};
