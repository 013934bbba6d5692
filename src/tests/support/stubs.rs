use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::{UserQuery, UserQueryError, UserQueryResult};
use crate::auth::application::use_cases::obtain_token::{
    IObtainTokenUseCase, ObtainTokenError, ObtainTokenInput,
};
use crate::auth::application::use_cases::register_user::{
    IRegisterUserUseCase, RegisterUserError, RegisterUserInput, RegisterUserOutput,
};
use crate::category::application::domain::entities::Category;
use crate::category::application::ports::incoming::use_cases::{
    CreateCategoryCommand, CreateCategoryError, CreateCategoryUseCase, DeleteCategoryError,
    DeleteCategoryUseCase, GetCategoriesError, GetCategoriesUseCase,
};

// ---------------------------------------------------------------------------
// auth
// ---------------------------------------------------------------------------

#[derive(Default, Clone)]
pub struct StubRegisterUserUseCase;

#[async_trait]
impl IRegisterUserUseCase for StubRegisterUserUseCase {
    async fn execute(
        &self,
        input: RegisterUserInput,
    ) -> Result<RegisterUserOutput, RegisterUserError> {
        Ok(RegisterUserOutput {
            user_id: Uuid::new_v4(),
            username: input.username,
            email: input.email.unwrap_or_default(),
            token: "0".repeat(40),
        })
    }
}

#[derive(Default, Clone)]
pub struct StubObtainTokenUseCase;

#[async_trait]
impl IObtainTokenUseCase for StubObtainTokenUseCase {
    async fn execute(&self, _input: ObtainTokenInput) -> Result<String, ObtainTokenError> {
        Err(ObtainTokenError::InvalidCredentials)
    }
}

/// Knows no users. Author filters resolve to nothing.
#[derive(Default, Clone)]
pub struct DummyUserQuery;

#[async_trait]
impl UserQuery for DummyUserQuery {
    async fn find_by_id(&self, _user_id: Uuid) -> Result<Option<UserQueryResult>, UserQueryError> {
        Ok(None)
    }

    async fn find_by_username(
        &self,
        _username: &str,
    ) -> Result<Option<UserQueryResult>, UserQueryError> {
        Ok(None)
    }
}

// ---------------------------------------------------------------------------
// category
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub struct StubGetCategoriesUseCase {
    result: Result<Vec<Category>, GetCategoriesError>,
}

impl StubGetCategoriesUseCase {
    pub fn success(categories: Vec<Category>) -> Self {
        Self {
            result: Ok(categories),
        }
    }

    pub fn failure(message: &str) -> Self {
        Self {
            result: Err(GetCategoriesError::QueryFailed(message.to_string())),
        }
    }
}

#[async_trait]
impl GetCategoriesUseCase for StubGetCategoriesUseCase {
    async fn execute(&self) -> Result<Vec<Category>, GetCategoriesError> {
        self.result.clone()
    }
}

/// Echoes the command back as a freshly created category.
#[derive(Default, Clone)]
pub struct StubCreateCategoryUseCase;

#[async_trait]
impl CreateCategoryUseCase for StubCreateCategoryUseCase {
    async fn execute(
        &self,
        command: CreateCategoryCommand,
    ) -> Result<Category, CreateCategoryError> {
        Ok(Category {
            id: Uuid::new_v4(),
            name: command.name().to_string(),
            description: command.description().to_string(),
            created_at: Utc::now(),
        })
    }
}

#[derive(Clone)]
pub struct StubDeleteCategoryUseCase {
    pub result: Result<(), DeleteCategoryError>,
}

impl Default for StubDeleteCategoryUseCase {
    fn default() -> Self {
        Self { result: Ok(()) }
    }
}

#[async_trait]
impl DeleteCategoryUseCase for StubDeleteCategoryUseCase {
    async fn execute(&self, _category_id: Uuid) -> Result<(), DeleteCategoryError> {
        self.result.clone()
    }
}
