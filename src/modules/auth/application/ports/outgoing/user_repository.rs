use crate::modules::auth::application::domain::entities::User;
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct CreateUserData {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts the user and its first token together; neither row is kept
    /// if either insert fails. Fails with `UsernameTaken` when the unique
    /// index on `username` rejects the row.
    async fn create_user_with_token(
        &self,
        data: CreateUserData,
        key_hash: String,
    ) -> Result<User, UserRepositoryError>;
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("Username already taken")]
    UsernameTaken,

    #[error("Database error: {0}")]
    DatabaseError(String),
}
