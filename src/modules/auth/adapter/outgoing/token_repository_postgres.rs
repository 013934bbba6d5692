use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use std::sync::Arc;

use super::sea_orm_entity::auth_tokens::{
    ActiveModel as AuthTokenActiveModel, Entity as AuthTokenEntity,
};
use super::sea_orm_entity::users::Entity as UserEntity;
use crate::auth::application::domain::entities::{TokenIdentity, UserId};
use crate::auth::application::ports::outgoing::{TokenRepository, TokenRepositoryError};

#[derive(Clone, Debug)]
pub struct TokenRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TokenRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TokenRepository for TokenRepositoryPostgres {
    async fn store_token(
        &self,
        user_id: UserId,
        key_hash: String,
    ) -> Result<(), TokenRepositoryError> {
        let active = AuthTokenActiveModel {
            key_hash: Set(key_hash),
            user_id: Set(user_id.into()),
            created_at: NotSet,
        };

        active
            .insert(&*self.db)
            .await
            .map_err(|e| TokenRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn find_identity(
        &self,
        key_hash: &str,
    ) -> Result<Option<TokenIdentity>, TokenRepositoryError> {
        let token = AuthTokenEntity::find_by_id(key_hash.to_string())
            .one(&*self.db)
            .await
            .map_err(|e| TokenRepositoryError::DatabaseError(e.to_string()))?;

        let Some(token) = token else {
            return Ok(None);
        };

        // Cascade delete keeps this in step with users; a missing row means the
        // user vanished between the two reads.
        let user = UserEntity::find_by_id(token.user_id)
            .one(&*self.db)
            .await
            .map_err(|e| TokenRepositoryError::DatabaseError(e.to_string()))?;

        Ok(user.map(|u| TokenIdentity {
            user_id: UserId::from(u.id),
            username: u.username,
        }))
    }
}
