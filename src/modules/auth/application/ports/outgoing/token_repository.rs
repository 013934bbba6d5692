use async_trait::async_trait;

use crate::auth::application::domain::entities::{TokenIdentity, UserId};

/// Errors that can occur in token repository operations
#[derive(Debug, Clone, thiserror::Error)]
pub enum TokenRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Token repository port (interface).
///
/// Keys are opaque; adapters only ever see their SHA-256 hex digest.
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Bind a new token hash to a user.
    async fn store_token(&self, user_id: UserId, key_hash: String)
        -> Result<(), TokenRepositoryError>;

    /// Resolve a token hash to its owner, `None` when unknown.
    async fn find_identity(
        &self,
        key_hash: &str,
    ) -> Result<Option<TokenIdentity>, TokenRepositoryError>;
}
