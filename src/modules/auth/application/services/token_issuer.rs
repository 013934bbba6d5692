use std::sync::Arc;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::{TokenRepository, TokenRepositoryError};
use crate::auth::application::services::hash::{generate_token_key, hash_token};

/// A freshly generated key and the hash that is stored in its place.
#[derive(Debug, Clone)]
pub struct MintedToken {
    pub key: String,
    pub key_hash: String,
}

impl MintedToken {
    pub fn generate() -> Self {
        let key = generate_token_key();
        let key_hash = hash_token(&key);
        Self { key, key_hash }
    }
}

/// Mints opaque bearer tokens. The raw key is returned to the caller exactly once;
/// only its hash reaches the repository.
#[derive(Clone)]
pub struct TokenIssuer {
    repository: Arc<dyn TokenRepository + Send + Sync>,
}

impl TokenIssuer {
    pub fn new(repository: Arc<dyn TokenRepository + Send + Sync>) -> Self {
        Self { repository }
    }

    pub async fn issue(&self, user_id: UserId) -> Result<String, TokenRepositoryError> {
        let token = MintedToken::generate();
        self.repository.store_token(user_id, token.key_hash).await?;
        Ok(token.key)
    }
}
