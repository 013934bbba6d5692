use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use futures::future::LocalBoxFuture;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::helpers::ResolveUserIdError;
use crate::auth::application::use_cases::authenticate_token::AuthenticateTokenError;
use crate::{shared::api::ApiResponse, AppState};

/// Caller identified by a valid `Authorization: Token <key>` header.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub username: String,
}

/// Like [`AuthenticatedUser`] but lets anonymous callers through.
///
/// A header that is present but wrong still fails with 401.
#[derive(Debug, Clone)]
pub struct MaybeAuthenticatedUser(pub Option<AuthenticatedUser>);

impl MaybeAuthenticatedUser {
    pub fn user_id(&self) -> Option<UserId> {
        self.0.as_ref().map(|u| u.user_id)
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Credentials {
    Missing,
    Malformed,
    Key(String),
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

fn missing_credentials() -> ActixError {
    create_api_error(ApiResponse::unauthorized(
        "MISSING_AUTH_HEADER",
        "Authentication credentials were not provided",
    ))
}

fn invalid_token(message: &str) -> ActixError {
    create_api_error(ApiResponse::unauthorized("INVALID_TOKEN", message))
}

/// Reads the Authorization header. Accepts the `Token` and `Bearer` schemes;
/// any other scheme is treated as no credentials at all.
fn extract_credentials(req: &HttpRequest) -> Credentials {
    let Some(value) = req.headers().get(actix_web::http::header::AUTHORIZATION) else {
        return Credentials::Missing;
    };
    let Ok(value) = value.to_str() else {
        return Credentials::Malformed;
    };

    let mut parts = value.split_whitespace();
    let scheme = parts.next().unwrap_or_default();
    if !scheme.eq_ignore_ascii_case("token") && !scheme.eq_ignore_ascii_case("bearer") {
        return Credentials::Missing;
    }

    match (parts.next(), parts.next()) {
        (Some(key), None) => Credentials::Key(key.to_string()),
        _ => Credentials::Malformed,
    }
}

async fn authenticate(state: &AppState, key: &str) -> Result<AuthenticatedUser, ActixError> {
    match state.authenticate_token_use_case.execute(key).await {
        Ok(identity) => Ok(AuthenticatedUser {
            user_id: identity.user_id,
            username: identity.username,
        }),
        Err(AuthenticateTokenError::InvalidToken) => Err(invalid_token("Invalid token")),
        Err(AuthenticateTokenError::RepositoryError(msg)) => {
            tracing::error!(error = %msg, "Token lookup failed");
            Err(create_api_error(ApiResponse::internal_error()))
        }
    }
}

fn app_state(req: &HttpRequest) -> Option<web::Data<AppState>> {
    req.app_data::<web::Data<AppState>>().cloned()
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let credentials = extract_credentials(req);
        let state = app_state(req);

        Box::pin(async move {
            let key = match credentials {
                Credentials::Missing => return Err(missing_credentials()),
                Credentials::Malformed => return Err(invalid_token("Invalid token header")),
                Credentials::Key(key) => key,
            };
            let state = state.ok_or_else(|| create_api_error(ApiResponse::internal_error()))?;

            authenticate(&state, &key).await
        })
    }
}

impl FromRequest for MaybeAuthenticatedUser {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let credentials = extract_credentials(req);
        let state = app_state(req);

        Box::pin(async move {
            let key = match credentials {
                Credentials::Missing => return Ok(MaybeAuthenticatedUser(None)),
                Credentials::Malformed => return Err(invalid_token("Invalid token header")),
                Credentials::Key(key) => key,
            };
            let state = state.ok_or_else(|| create_api_error(ApiResponse::internal_error()))?;

            authenticate(&state, &key)
                .await
                .map(|user| MaybeAuthenticatedUser(Some(user)))
        })
    }
}

/// Resolves a username from a query parameter into a user id, or the error
/// response to return.
pub async fn resolve_user_id_or_response(
    data: &web::Data<AppState>,
    username: &str,
) -> Result<Option<UserId>, HttpResponse> {
    match data.user_identity_resolver.by_username(username).await {
        Ok(user_id) => Ok(Some(user_id)),
        Err(ResolveUserIdError::NotFound) => Ok(None),
        Err(ResolveUserIdError::RepositoryError(msg)) => {
            tracing::error!(username = %username, error = %msg, "Failed to resolve username");
            Err(ApiResponse::internal_error())
        }
    }
}
