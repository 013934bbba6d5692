use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::domain::entities::TokenIdentity;
use crate::auth::application::ports::outgoing::TokenRepository;
use crate::auth::application::services::hash::hash_token;

#[derive(Debug, Clone, thiserror::Error)]
pub enum AuthenticateTokenError {
    #[error("Invalid token")]
    InvalidToken,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IAuthenticateTokenUseCase: Send + Sync {
    async fn execute(&self, key: &str) -> Result<TokenIdentity, AuthenticateTokenError>;
}

#[derive(Clone)]
pub struct AuthenticateTokenUseCase {
    repository: Arc<dyn TokenRepository + Send + Sync>,
}

impl AuthenticateTokenUseCase {
    pub fn new(repository: Arc<dyn TokenRepository + Send + Sync>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl IAuthenticateTokenUseCase for AuthenticateTokenUseCase {
    async fn execute(&self, key: &str) -> Result<TokenIdentity, AuthenticateTokenError> {
        let key = key.trim();
        if key.is_empty() {
            return Err(AuthenticateTokenError::InvalidToken);
        }

        self.repository
            .find_identity(&hash_token(key))
            .await
            .map_err(|e| AuthenticateTokenError::RepositoryError(e.to_string()))?
            .ok_or(AuthenticateTokenError::InvalidToken)
    }
}
