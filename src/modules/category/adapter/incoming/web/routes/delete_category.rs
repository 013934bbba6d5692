use actix_web::{delete, web, Responder};
use uuid::Uuid;

use crate::{
    api::schemas::ErrorResponse,
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    category::application::ports::incoming::use_cases::DeleteCategoryError,
    shared::api::ApiResponse,
    AppState,
};

/// Delete a category
///
/// Recipes in the category are kept and become uncategorized.
#[utoipa::path(
    delete,
    path = "/categories/{category_id}/",
    tag = "categories",
    params(("category_id" = Uuid, Path, description = "Category id")),
    security(("token_auth" = [])),
    responses(
        (status = 204, description = "Category deleted"),
        (status = 401, description = "Authentication required", body = ErrorResponse),
        (status = 404, description = "Category not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/categories/{category_id}/")]
pub async fn delete_category_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let category_id = path.into_inner();

    match data.category.delete.execute(category_id).await {
        Ok(()) => {
            tracing::info!(
                category_id = %category_id,
                deleted_by = %user.username,
                "Category deleted"
            );
            ApiResponse::no_content()
        }
        Err(DeleteCategoryError::CategoryNotFound) => {
            ApiResponse::not_found("CATEGORY_NOT_FOUND", "Category not found")
        }
        Err(DeleteCategoryError::RepositoryError(msg)) => {
            tracing::error!(category_id = %category_id, error = %msg, "Failed to delete category");
            ApiResponse::internal_error()
        }
    }
}
