use std::sync::Arc;

use crate::category::application::ports::incoming::use_cases::{
    CreateCategoryUseCase, DeleteCategoryUseCase, GetCategoriesUseCase,
};

#[derive(Clone)]
pub struct CategoryUseCases {
    pub create: Arc<dyn CreateCategoryUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetCategoriesUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteCategoryUseCase + Send + Sync>,
}
