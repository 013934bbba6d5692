use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::users::{Column as UserColumn, Entity as UserEntity};
use crate::auth::application::ports::outgoing::{UserQuery, UserQueryError, UserQueryResult};

#[derive(Clone, Debug)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<UserQueryResult>, UserQueryError> {
        let user = UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Ok(user.map(|m| m.to_query_result()))
    }

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserQueryResult>, UserQueryError> {
        let user = UserEntity::find()
            .filter(UserColumn::Username.eq(username))
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Ok(user.map(|m| m.to_query_result()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::adapter::outgoing::sea_orm_entity::users::Model as UserModel;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase};

    fn user_model(id: Uuid, username: &str) -> UserModel {
        let now = Utc::now().fixed_offset();
        UserModel {
            id,
            username: username.to_string(),
            email: "cook@example.com".to_string(),
            password_hash: "$argon2id$hash".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_find_by_id_found() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![user_model(id, "alice")]])
            .into_connection();

        let query = UserQueryPostgres::new(Arc::new(db));
        let user = query.find_by_id(id).await.unwrap().unwrap();

        assert_eq!(user.id, id);
        assert_eq!(user.username, "alice");
        assert_eq!(user.password_hash, "$argon2id$hash");
    }

    #[tokio::test]
    async fn test_find_by_id_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<UserModel>::new()])
            .into_connection();

        let query = UserQueryPostgres::new(Arc::new(db));

        assert!(query.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_by_username_found() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![user_model(id, "bob")]])
            .into_connection();

        let query = UserQueryPostgres::new(Arc::new(db));
        let user = query.find_by_username("bob").await.unwrap().unwrap();

        assert_eq!(user.id, id);
    }

    #[tokio::test]
    async fn test_find_by_username_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection refused".to_string())])
            .into_connection();

        let query = UserQueryPostgres::new(Arc::new(db));

        match query.find_by_username("bob").await {
            Err(UserQueryError::DatabaseError(msg)) => assert!(msg.contains("connection refused")),
            other => panic!("Expected DatabaseError, got {:?}", other),
        }
    }
}
