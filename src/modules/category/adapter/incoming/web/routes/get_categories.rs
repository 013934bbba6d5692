use actix_web::{get, web, Responder};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    category::application::domain::entities::Category,
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryResponse {
    pub id: Uuid,
    #[schema(example = "Desserts")]
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl From<Category> for CategoryResponse {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            name: c.name,
            description: c.description,
            created_at: c.created_at,
        }
    }
}

/// List categories ordered by name
#[utoipa::path(
    get,
    path = "/categories/",
    tag = "categories",
    responses(
        (status = 200, description = "All categories", body = inline(SuccessResponse<Vec<CategoryResponse>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/categories/")]
pub async fn get_categories_handler(data: web::Data<AppState>) -> impl Responder {
    match data.category.get_list.execute().await {
        Ok(categories) => ApiResponse::success(
            categories
                .into_iter()
                .map(CategoryResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(e) => {
            tracing::error!(error = %e, "Failed to list categories");
            ApiResponse::internal_error()
        }
    }
}
