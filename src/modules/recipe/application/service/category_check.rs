use uuid::Uuid;

use crate::category::application::ports::outgoing::{CategoryQuery, CategoryQueryError};
use crate::shared::patch_field::PatchField;
use crate::shared::validation::ValidationErrors;

pub(super) fn unknown_category(category_id: Uuid) -> String {
    format!("Invalid pk \"{}\" - object does not exist.", category_id)
}

/// Records a `category` error when a referenced category does not exist.
pub(super) async fn check_category<C>(
    categories: &C,
    category: &PatchField<Uuid>,
    errors: &mut ValidationErrors,
) -> Result<(), CategoryQueryError>
where
    C: CategoryQuery + Send + Sync,
{
    if let PatchField::Value(category_id) = category {
        if !categories.category_exists(*category_id).await? {
            errors.add("category", unknown_category(*category_id));
        }
    }
    Ok(())
}
