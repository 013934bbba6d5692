use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::{PasswordHasher, UserQuery};
use crate::auth::application::services::TokenIssuer;
use crate::shared::validation::ValidationErrors;

#[derive(Debug, Clone)]
pub struct ObtainTokenInput {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ObtainTokenError {
    #[error("Invalid login data: {0}")]
    InvalidInput(ValidationErrors),

    #[error("Unable to log in with provided credentials")]
    InvalidCredentials,

    #[error("Password verification failed: {0}")]
    VerificationFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

// Interface for ObtainToken use case
#[async_trait]
pub trait IObtainTokenUseCase: Send + Sync {
    /// Exchange credentials for a freshly issued token key.
    async fn execute(&self, input: ObtainTokenInput) -> Result<String, ObtainTokenError>;
}

#[derive(Clone)]
pub struct ObtainTokenUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    token_issuer: TokenIssuer,
}

impl<Q> ObtainTokenUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(
        query: Q,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
        token_issuer: TokenIssuer,
    ) -> Self {
        Self {
            query,
            password_hasher,
            token_issuer,
        }
    }
}

#[async_trait]
impl<Q> IObtainTokenUseCase for ObtainTokenUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, input: ObtainTokenInput) -> Result<String, ObtainTokenError> {
        let username = input.username.trim();

        let mut errors = ValidationErrors::new();
        if username.is_empty() {
            errors.add("username", "This field may not be blank.");
        }
        if input.password.is_empty() {
            errors.add("password", "This field may not be blank.");
        }
        errors.into_result().map_err(ObtainTokenError::InvalidInput)?;

        let user = self
            .query
            .find_by_username(username)
            .await
            .map_err(|e| ObtainTokenError::RepositoryError(e.to_string()))?
            .ok_or(ObtainTokenError::InvalidCredentials)?;

        let matches = self
            .password_hasher
            .verify_password(&input.password, &user.password_hash)
            .await
            .map_err(|e| ObtainTokenError::VerificationFailed(e.to_string()))?;
        if !matches {
            return Err(ObtainTokenError::InvalidCredentials);
        }

        self.token_issuer
            .issue(UserId::from(user.id))
            .await
            .map_err(|e| ObtainTokenError::RepositoryError(e.to_string()))
    }
}
