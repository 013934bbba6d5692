use std::sync::Arc;

use crate::recipe::application::ports::incoming::use_cases::{
    CreateRecipeUseCase, DeleteRecipeUseCase, GetRecipesUseCase, GetSingleRecipeUseCase,
    UpdateRecipeUseCase,
};

#[derive(Clone)]
pub struct RecipeUseCases {
    pub create: Arc<dyn CreateRecipeUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetRecipesUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetSingleRecipeUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateRecipeUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteRecipeUseCase + Send + Sync>,
}
