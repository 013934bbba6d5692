use actix_web::{post, web, HttpResponse};

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::auth::MaybeAuthenticatedUser,
    recipe::adapter::incoming::web::dto::{RecipeRequest, RecipeResponse},
    recipe::application::domain::entities::RecipeChanges,
    recipe::application::ports::incoming::use_cases::CreateRecipeError,
    shared::api::ApiResponse,
    AppState,
};

/// Create a recipe
///
/// The caller becomes the author. `ingredients_list` lines are stored in the
/// order given.
#[utoipa::path(
    post,
    path = "/recipes/",
    tag = "recipes",
    request_body = RecipeRequest,
    security(("token_auth" = [])),
    responses(
        (status = 201, description = "Recipe created", body = inline(SuccessResponse<RecipeResponse>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Authentication required", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/recipes/")]
pub async fn create_recipe_handler(
    user: MaybeAuthenticatedUser,
    data: web::Data<AppState>,
    body: web::Bytes,
) -> HttpResponse {
    let requester = match data.recipe.create.authorize(user.user_id()) {
        Ok(author) => Some(author),
        Err(e) => return error_response(e),
    };

    let changes = match RecipeRequest::from_json(&body) {
        Ok(payload) => RecipeChanges::from(payload),
        Err(errors) => return ApiResponse::validation_error(errors.into_fields()),
    };

    match data.recipe.create.execute(requester, changes).await {
        Ok(recipe) => {
            tracing::info!(recipe_id = %recipe.id, author = %recipe.author, "Recipe created");
            ApiResponse::created(RecipeResponse::from(recipe))
        }
        Err(e) => error_response(e),
    }
}

fn error_response(err: CreateRecipeError) -> HttpResponse {
    match err {
        CreateRecipeError::AuthenticationRequired => ApiResponse::unauthorized(
            "MISSING_AUTH_HEADER",
            "Authentication credentials were not provided",
        ),
        CreateRecipeError::InvalidInput(errors) => {
            ApiResponse::validation_error(errors.into_fields())
        }
        CreateRecipeError::RepositoryError(msg) => {
            tracing::error!(error = %msg, "Failed to create recipe");
            ApiResponse::internal_error()
        }
    }
}
