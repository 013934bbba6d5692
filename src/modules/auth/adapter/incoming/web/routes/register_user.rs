use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::register_user::{RegisterUserError, RegisterUserInput};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

/// Request body for user registration
#[derive(Serialize, Deserialize, ToSchema)]
pub struct RegisterUserRequest {
    /// Letters, digits and @/./+/-/_ only, at most 150 characters
    #[schema(example = "johndoe")]
    pub username: String,

    /// Optional email address
    #[schema(example = "john@example.com")]
    #[serde(default)]
    pub email: Option<String>,

    #[schema(example = "SecurePass123!")]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct RegisterUserResponse {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub id: String,

    #[schema(example = "johndoe")]
    pub username: String,

    /// Empty string when no email was given
    #[schema(example = "john@example.com")]
    pub email: String,

    /// Opaque token for the `Authorization: Token <key>` header
    #[schema(example = "9944b09199c62bcf9418ad846dd0e4bbdfc6ee4b")]
    pub token: String,
}

fn map_register_user_error(err: RegisterUserError, username: &str) -> HttpResponse {
    match err {
        RegisterUserError::InvalidInput(errors) => {
            warn!(username = %username, error = %errors, "Invalid registration input");
            ApiResponse::validation_error(errors.into_fields())
        }

        RegisterUserError::UsernameTaken => {
            warn!(username = %username, "Username already taken");
            ApiResponse::bad_request(
                "USERNAME_TAKEN",
                "A user with that username already exists.",
            )
        }

        other => {
            error!(username = %username, error = %other, "User registration failed");
            ApiResponse::internal_error()
        }
    }
}

/// Register a new user
///
/// Creates the account and returns a token the client can use right away.
#[utoipa::path(
    post,
    path = "/register/",
    tag = "auth",
    request_body = RegisterUserRequest,
    responses(
        (
            status = 201,
            description = "User created",
            body = inline(SuccessResponse<RegisterUserResponse>),
            example = json!({
                "success": true,
                "data": {
                    "id": "123e4567-e89b-12d3-a456-426614174000",
                    "username": "johndoe",
                    "email": "john@example.com",
                    "token": "9944b09199c62bcf9418ad846dd0e4bbdfc6ee4b"
                }
            })
        ),
        (
            status = 400,
            description = "Validation error or username taken",
            body = ErrorResponse,
            examples(
                ("Invalid fields" = (value = json!({
                    "success": false,
                    "error": {
                        "code": "VALIDATION_ERROR",
                        "message": "One or more fields are invalid",
                        "fields": { "email": ["Enter a valid email address."] }
                    }
                }))),
                ("Username taken" = (value = json!({
                    "success": false,
                    "error": {
                        "code": "USERNAME_TAKEN",
                        "message": "A user with that username already exists."
                    }
                })))
            )
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/register/")]
pub async fn register_user_handler(
    req: web::Json<RegisterUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    info!(username = %req.username, "User registration attempt");

    let input = RegisterUserInput {
        username: req.username.clone(),
        email: req.email,
        password: req.password,
    };

    match data.register_user_use_case.execute(input).await {
        Ok(user) => {
            info!(user_id = %user.user_id, username = %user.username, "User created");

            ApiResponse::created(RegisterUserResponse {
                id: user.user_id.to_string(),
                username: user.username,
                email: user.email,
                token: user.token,
            })
        }
        Err(e) => map_register_user_error(e, &req.username),
    }
}
