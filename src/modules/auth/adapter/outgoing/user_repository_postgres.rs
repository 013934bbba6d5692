use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DatabaseTransaction, DbErr, Set, TransactionTrait};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::User;
use crate::auth::application::ports::outgoing::{
    CreateUserData, UserRepository, UserRepositoryError,
};
use crate::shared::db_error::is_unique_violation;

use super::sea_orm_entity::auth_tokens::ActiveModel as AuthTokenActiveModel;
use super::sea_orm_entity::users::ActiveModel as UserActiveModel;

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn insert_in_txn(
        txn: &DatabaseTransaction,
        data: CreateUserData,
        key_hash: String,
    ) -> Result<User, UserRepositoryError> {
        let active_user = UserActiveModel {
            id: Set(Uuid::new_v4()),
            username: Set(data.username),
            email: Set(data.email),
            password_hash: Set(data.password_hash),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active_user.insert(txn).await.map_err(|e| {
            if is_unique_violation(&e) {
                return UserRepositoryError::UsernameTaken;
            }
            map_db_err(e)
        })?;

        AuthTokenActiveModel {
            key_hash: Set(key_hash),
            user_id: Set(inserted.id),
            created_at: NotSet,
        }
        .insert(txn)
        .await
        .map_err(map_db_err)?;

        Ok(inserted.to_domain())
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user_with_token(
        &self,
        data: CreateUserData,
        key_hash: String,
    ) -> Result<User, UserRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        match Self::insert_in_txn(&txn, data, key_hash).await {
            Ok(user) => {
                txn.commit().await.map_err(map_db_err)?;
                Ok(user)
            }
            Err(e) => {
                let _ = txn.rollback().await;
                Err(e)
            }
        }
    }
}

fn map_db_err(e: DbErr) -> UserRepositoryError {
    UserRepositoryError::DatabaseError(e.to_string())
}
