use actix_web::{delete, web, Responder};
use uuid::Uuid;

use crate::{
    api::schemas::ErrorResponse,
    auth::adapter::incoming::web::extractors::auth::MaybeAuthenticatedUser,
    recipe::application::ports::incoming::use_cases::DeleteRecipeError,
    shared::api::ApiResponse,
    AppState,
};

/// Delete a recipe
///
/// Its ingredient lines are removed with it.
#[utoipa::path(
    delete,
    path = "/recipes/{recipe_id}/",
    tag = "recipes",
    params(("recipe_id" = Uuid, Path, description = "Recipe id")),
    security(("token_auth" = [])),
    responses(
        (status = 204, description = "Recipe deleted"),
        (status = 401, description = "Authentication required", body = ErrorResponse),
        (status = 403, description = "Caller is not the author", body = ErrorResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/recipes/{recipe_id}/")]
pub async fn delete_recipe_handler(
    user: MaybeAuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let recipe_id = path.into_inner();

    match data.recipe.delete.execute(user.user_id(), recipe_id).await {
        Ok(()) => {
            tracing::info!(recipe_id = %recipe_id, "Recipe deleted");
            ApiResponse::no_content()
        }
        Err(DeleteRecipeError::AuthenticationRequired) => ApiResponse::unauthorized(
            "MISSING_AUTH_HEADER",
            "Authentication credentials were not provided",
        ),
        Err(DeleteRecipeError::NotFound) => {
            ApiResponse::not_found("RECIPE_NOT_FOUND", "Recipe not found")
        }
        Err(DeleteRecipeError::NotAuthor) => ApiResponse::forbidden(
            "NOT_AUTHOR",
            "You do not have permission to perform this action",
        ),
        Err(DeleteRecipeError::RepositoryError(msg)) => {
            tracing::error!(recipe_id = %recipe_id, error = %msg, "Failed to delete recipe");
            ApiResponse::internal_error()
        }
    }
}
