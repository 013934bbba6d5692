use actix_web::{patch, put, web, HttpResponse, Responder};
use uuid::Uuid;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::auth::MaybeAuthenticatedUser,
    recipe::adapter::incoming::web::dto::{RecipeRequest, RecipeResponse},
    recipe::application::domain::entities::RecipeChanges,
    recipe::application::ports::incoming::use_cases::{UpdateMode, UpdateRecipeError},
    shared::api::ApiResponse,
    AppState,
};

fn error_response(recipe_id: Uuid, err: UpdateRecipeError) -> HttpResponse {
    match err {
        UpdateRecipeError::AuthenticationRequired => ApiResponse::unauthorized(
            "MISSING_AUTH_HEADER",
            "Authentication credentials were not provided",
        ),
        UpdateRecipeError::NotFound => {
            ApiResponse::not_found("RECIPE_NOT_FOUND", "Recipe not found")
        }
        UpdateRecipeError::NotAuthor => ApiResponse::forbidden(
            "NOT_AUTHOR",
            "You do not have permission to perform this action",
        ),
        UpdateRecipeError::InvalidInput(errors) => {
            ApiResponse::validation_error(errors.into_fields())
        }
        UpdateRecipeError::RepositoryError(msg) => {
            tracing::error!(recipe_id = %recipe_id, error = %msg, "Failed to update recipe");
            ApiResponse::internal_error()
        }
    }
}

/// The body is read only after the access checks, so a bad body from a
/// caller who may not edit the recipe still gets 401/403/404.
async fn update(
    user: MaybeAuthenticatedUser,
    data: web::Data<AppState>,
    recipe_id: Uuid,
    mode: UpdateMode,
    body: web::Bytes,
) -> HttpResponse {
    let requester = user.user_id();
    if let Err(e) = data.recipe.update.authorize(requester, recipe_id, mode).await {
        return error_response(recipe_id, e);
    }

    let changes = match RecipeRequest::from_json(&body) {
        Ok(payload) => RecipeChanges::from(payload),
        Err(errors) => return ApiResponse::validation_error(errors.into_fields()),
    };

    match data
        .recipe
        .update
        .execute(requester, recipe_id, mode, changes)
        .await
    {
        Ok(recipe) => {
            tracing::info!(recipe_id = %recipe_id, mode = ?mode, "Recipe updated");
            ApiResponse::success(RecipeResponse::from(recipe))
        }
        Err(e) => error_response(recipe_id, e),
    }
}

/// Replace a recipe
///
/// `title`, `prep_time` and `cook_time` are required. Omitted optional fields
/// are left as stored; a supplied `ingredients_list` replaces every line.
#[utoipa::path(
    put,
    path = "/recipes/{recipe_id}/",
    tag = "recipes",
    params(("recipe_id" = Uuid, Path, description = "Recipe id")),
    request_body = RecipeRequest,
    security(("token_auth" = [])),
    responses(
        (status = 200, description = "Recipe updated", body = inline(SuccessResponse<RecipeResponse>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Authentication required", body = ErrorResponse),
        (status = 403, description = "Caller is not the author", body = ErrorResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/recipes/{recipe_id}/")]
pub async fn update_recipe_handler(
    user: MaybeAuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Bytes,
) -> impl Responder {
    update(user, data, path.into_inner(), UpdateMode::Full, body).await
}

/// Partially update a recipe
///
/// Only supplied fields change. An absent `ingredients_list` keeps the stored
/// lines; an empty one clears them.
#[utoipa::path(
    patch,
    path = "/recipes/{recipe_id}/",
    tag = "recipes",
    params(("recipe_id" = Uuid, Path, description = "Recipe id")),
    request_body = RecipeRequest,
    security(("token_auth" = [])),
    responses(
        (status = 200, description = "Recipe updated", body = inline(SuccessResponse<RecipeResponse>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Authentication required", body = ErrorResponse),
        (status = 403, description = "Caller is not the author", body = ErrorResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[patch("/recipes/{recipe_id}/")]
pub async fn patch_recipe_handler(
    user: MaybeAuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Bytes,
) -> impl Responder {
    update(user, data, path.into_inner(), UpdateMode::Partial, body).await
}
