use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::obtain_token::{ObtainTokenError, ObtainTokenInput};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ObtainTokenRequest {
    #[schema(example = "johndoe")]
    pub username: String,

    #[schema(example = "SecurePass123!")]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct ObtainTokenResponse {
    #[schema(example = "9944b09199c62bcf9418ad846dd0e4bbdfc6ee4b")]
    pub token: String,
}

fn map_obtain_token_error(err: ObtainTokenError, username: &str) -> HttpResponse {
    match err {
        ObtainTokenError::InvalidInput(errors) => ApiResponse::validation_error(errors.into_fields()),
        ObtainTokenError::InvalidCredentials => {
            warn!(username = %username, "Login failed: invalid credentials");
            ApiResponse::bad_request(
                "INVALID_CREDENTIALS",
                "Unable to log in with provided credentials.",
            )
        }
        other => {
            error!(username = %username, error = %other, "Login failed");
            ApiResponse::internal_error()
        }
    }
}

/// Obtain an auth token
///
/// Every successful call issues a new token; earlier tokens stay valid.
#[utoipa::path(
    post,
    path = "/token-auth/",
    tag = "auth",
    request_body = ObtainTokenRequest,
    responses(
        (
            status = 200,
            description = "Token issued",
            body = inline(SuccessResponse<ObtainTokenResponse>),
            example = json!({
                "success": true,
                "data": { "token": "9944b09199c62bcf9418ad846dd0e4bbdfc6ee4b" }
            })
        ),
        (
            status = 400,
            description = "Invalid credentials",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INVALID_CREDENTIALS",
                    "message": "Unable to log in with provided credentials."
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/token-auth/")]
pub async fn obtain_token_handler(
    req: web::Json<ObtainTokenRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let username = req.username.clone();

    let input = ObtainTokenInput {
        username: req.username,
        password: req.password,
    };

    match data.obtain_token_use_case.execute(input).await {
        Ok(token) => {
            info!(username = %username, "Token issued");
            ApiResponse::success(ObtainTokenResponse { token })
        }
        Err(e) => map_obtain_token_error(e, &username),
    }
}
