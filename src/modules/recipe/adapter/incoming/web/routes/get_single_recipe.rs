use actix_web::{get, web, Responder};
use uuid::Uuid;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    recipe::adapter::incoming::web::dto::RecipeResponse,
    recipe::application::ports::incoming::use_cases::GetSingleRecipeError,
    shared::api::ApiResponse,
    AppState,
};

/// Get a recipe
#[utoipa::path(
    get,
    path = "/recipes/{recipe_id}/",
    tag = "recipes",
    params(("recipe_id" = Uuid, Path, description = "Recipe id")),
    responses(
        (status = 200, description = "Recipe found", body = inline(SuccessResponse<RecipeResponse>)),
        (status = 404, description = "Recipe not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/recipes/{recipe_id}/")]
pub async fn get_single_recipe_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let recipe_id = path.into_inner();

    match data.recipe.get_single.execute(recipe_id).await {
        Ok(recipe) => ApiResponse::success(RecipeResponse::from(recipe)),
        Err(GetSingleRecipeError::NotFound) => {
            ApiResponse::not_found("RECIPE_NOT_FOUND", "Recipe not found")
        }
        Err(GetSingleRecipeError::QueryFailed(msg)) => {
            tracing::error!(recipe_id = %recipe_id, error = %msg, "Failed to fetch recipe");
            ApiResponse::internal_error()
        }
    }
}
