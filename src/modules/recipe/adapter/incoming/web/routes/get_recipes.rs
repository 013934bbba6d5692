use actix_web::{get, web, Responder};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::auth::resolve_user_id_or_response,
    recipe::adapter::incoming::web::dto::RecipeResponse,
    recipe::application::ports::incoming::use_cases::GetRecipesError,
    recipe::application::ports::outgoing::RecipeFilter,
    shared::api::ApiResponse,
    shared::validation::ValidationErrors,
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Query DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct GetRecipesQuery {
    /// Case-insensitive match on title or ingredients text
    pub search: Option<String>,
    /// Category id
    pub category: Option<String>,
    /// Author username
    pub author: Option<String>,
}

fn parse_category(raw: Option<&str>) -> Result<Option<Uuid>, ValidationErrors> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };
    Uuid::parse_str(raw).map(Some).map_err(|_| {
        ValidationErrors::single(
            "category",
            "Select a valid choice. That choice is not one of the available choices.",
        )
    })
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// List recipes
#[utoipa::path(
    get,
    path = "/recipes/",
    tag = "recipes",
    params(GetRecipesQuery),
    responses(
        (status = 200, description = "Recipes, newest first", body = inline(SuccessResponse<Vec<RecipeResponse>>)),
        (status = 400, description = "Invalid filter", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/recipes/")]
pub async fn get_recipes_handler(
    query: web::Query<GetRecipesQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = query.into_inner();

    let category = match parse_category(query.category.as_deref()) {
        Ok(category) => category,
        Err(errors) => return ApiResponse::validation_error(errors.into_fields()),
    };

    let author = match query.author.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        None => None,
        Some(username) => match resolve_user_id_or_response(&data, username).await {
            Ok(Some(user_id)) => Some(user_id),
            // Nobody by that name wrote anything
            Ok(None) => return ApiResponse::success(Vec::<RecipeResponse>::new()),
            Err(resp) => return resp,
        },
    };

    let filter = RecipeFilter {
        search: query.search,
        category,
        author,
    };

    match data.recipe.get_list.execute(filter).await {
        Ok(recipes) => ApiResponse::success(
            recipes
                .into_iter()
                .map(RecipeResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(GetRecipesError::QueryFailed(msg)) => {
            tracing::error!(error = %msg, "Failed to list recipes");
            ApiResponse::internal_error()
        }
    }
}
