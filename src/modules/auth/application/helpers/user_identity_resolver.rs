use std::sync::Arc;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::{UserQuery, UserQueryError};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ResolveUserIdError {
    #[error("User not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Maps a public username to the internal id used by recipe filters.
#[derive(Clone)]
pub struct UserIdentityResolver {
    user_query: Arc<dyn UserQuery + Send + Sync>,
}

impl UserIdentityResolver {
    pub fn new(user_query: Arc<dyn UserQuery + Send + Sync>) -> Self {
        Self { user_query }
    }

    pub async fn by_username(&self, username: &str) -> Result<UserId, ResolveUserIdError> {
        match self.user_query.find_by_username(username).await {
            Ok(Some(user)) => Ok(UserId::from(user.id)),
            Ok(None) => Err(ResolveUserIdError::NotFound),
            Err(UserQueryError::DatabaseError(msg)) => {
                Err(ResolveUserIdError::RepositoryError(msg))
            }
        }
    }
}
