use actix_web::{post, web, Responder};
use serde::Deserialize;
use utoipa::ToSchema;

use super::get_categories::CategoryResponse;
use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    category::application::ports::incoming::use_cases::CreateCategoryCommand,
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCategoryRequest {
    #[schema(example = "Desserts")]
    pub name: String,
    pub description: Option<String>,
}

/// Create a category
#[utoipa::path(
    post,
    path = "/categories/",
    tag = "categories",
    request_body = CreateCategoryRequest,
    security(("token_auth" = [])),
    responses(
        (status = 201, description = "Category created", body = inline(SuccessResponse<CategoryResponse>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Authentication required", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/categories/")]
pub async fn create_category_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    payload: web::Json<CreateCategoryRequest>,
) -> impl Responder {
    let payload = payload.into_inner();

    // 1️⃣ Build command (validation happens here)
    let command = match CreateCategoryCommand::new(payload.name, payload.description) {
        Ok(cmd) => cmd,
        Err(errors) => return ApiResponse::validation_error(errors.into_fields()),
    };

    // 2️⃣ Execute use case
    match data.category.create.execute(command).await {
        Ok(category) => {
            tracing::info!(
                category_id = %category.id,
                created_by = %user.username,
                "Category created"
            );
            ApiResponse::created(CategoryResponse::from(category))
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to create category");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{token_header, TEST_TOKEN};

    async fn call(req: test::TestRequest) -> (StatusCode, Value) {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .service(create_category_handler),
        )
        .await;

        let resp = test::call_service(&app, req.to_request()).await;
        let status = resp.status();
        let body = test::read_body(resp).await;
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[actix_web::test]
    async fn create_category_success() {
        let (status, json) = call(
            test::TestRequest::post()
                .uri("/categories/")
                .insert_header(token_header(TEST_TOKEN))
                .set_json(json!({ "name": "Desserts" })),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["data"]["name"], "Desserts");
        assert_eq!(json["data"]["description"], "");
    }

    #[actix_web::test]
    async fn create_category_requires_token() {
        let (status, json) = call(
            test::TestRequest::post()
                .uri("/categories/")
                .set_json(json!({ "name": "Desserts" })),
        )
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(json["error"]["code"], "MISSING_AUTH_HEADER");
    }

    #[actix_web::test]
    async fn create_category_blank_name_is_validation_error() {
        let (status, json) = call(
            test::TestRequest::post()
                .uri("/categories/")
                .insert_header(token_header(TEST_TOKEN))
                .set_json(json!({ "name": "  " })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
        assert!(json["error"]["fields"]["name"].is_array());
    }
}
