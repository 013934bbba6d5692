use async_trait::async_trait;

use crate::category::application::domain::entities::{Category, CATEGORY_NAME_MAX_LEN};
use crate::shared::validation::ValidationErrors;

//
// ──────────────────────────────────────────────────────────
// Create Category Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateCategoryCommand {
    name: String,
    description: String,
}

impl CreateCategoryCommand {
    pub fn new(name: String, description: Option<String>) -> Result<Self, ValidationErrors> {
        let name = name.trim();

        let mut errors = ValidationErrors::new();
        if name.is_empty() {
            errors.add("name", "This field may not be blank.");
        } else if name.chars().count() > CATEGORY_NAME_MAX_LEN {
            errors.add(
                "name",
                format!(
                    "Ensure this field has no more than {} characters.",
                    CATEGORY_NAME_MAX_LEN
                ),
            );
        }
        errors.into_result()?;

        Ok(Self {
            name: name.to_string(),
            description: description.unwrap_or_default(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateCategoryError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateCategoryUseCase: Send + Sync {
    async fn execute(&self, command: CreateCategoryCommand)
        -> Result<Category, CreateCategoryError>;
}
