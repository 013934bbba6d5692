use async_trait::async_trait;
use email_address::EmailAddress;
use regex::Regex;
use std::sync::{Arc, OnceLock};
use uuid::Uuid;

use crate::auth::application::ports::outgoing::{
    CreateUserData, PasswordHasher, UserQuery, UserRepository, UserRepositoryError,
};
use crate::auth::application::services::MintedToken;
use crate::shared::validation::ValidationErrors;

const USERNAME_MAX_LEN: usize = 150;
const EMAIL_MAX_LEN: usize = 254;

fn username_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[\w.@+-]+$").expect("valid username regex"))
}

#[derive(Debug, Clone)]
pub struct RegisterUserInput {
    pub username: String,
    pub email: Option<String>,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct RegisterUserOutput {
    pub user_id: Uuid,
    pub username: String,
    pub email: String,
    pub token: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum RegisterUserError {
    #[error("Invalid registration data: {0}")]
    InvalidInput(ValidationErrors),

    #[error("Username already taken")]
    UsernameTaken,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

// Interface for RegisterUser use case
#[async_trait]
pub trait IRegisterUserUseCase: Send + Sync {
    async fn execute(&self, input: RegisterUserInput)
        -> Result<RegisterUserOutput, RegisterUserError>;
}

#[derive(Clone)]
pub struct RegisterUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl<Q, R> RegisterUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(
        query: Q,
        repository: R,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    ) -> Self {
        Self {
            query,
            repository,
            password_hasher,
        }
    }

    /// Normalizes and validates the raw input, returning (username, email).
    fn validate(input: &RegisterUserInput) -> Result<(String, String), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let username = input.username.trim().to_string();
        if username.is_empty() {
            errors.add("username", "This field may not be blank.");
        } else if username.chars().count() > USERNAME_MAX_LEN {
            errors.add(
                "username",
                format!(
                    "Ensure this field has no more than {} characters.",
                    USERNAME_MAX_LEN
                ),
            );
        } else if !username_pattern().is_match(&username) {
            errors.add(
                "username",
                "Enter a valid username. This value may contain only letters, numbers, and @/./+/-/_ characters.",
            );
        }

        let email = input
            .email
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_string();
        if !email.is_empty() {
            if email.len() > EMAIL_MAX_LEN {
                errors.add(
                    "email",
                    format!(
                        "Ensure this field has no more than {} characters.",
                        EMAIL_MAX_LEN
                    ),
                );
            } else if !EmailAddress::is_valid(&email) {
                errors.add("email", "Enter a valid email address.");
            }
        }

        if input.password.trim().is_empty() {
            errors.add("password", "This field may not be blank.");
        }

        errors.into_result()?;
        Ok((username, email))
    }
}

#[async_trait]
impl<Q, R> IRegisterUserUseCase for RegisterUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        input: RegisterUserInput,
    ) -> Result<RegisterUserOutput, RegisterUserError> {
        let (username, email) = Self::validate(&input).map_err(RegisterUserError::InvalidInput)?;

        // 1️⃣ Reject taken usernames before paying for a hash
        let existing = self
            .query
            .find_by_username(&username)
            .await
            .map_err(|e| RegisterUserError::RepositoryError(e.to_string()))?;
        if existing.is_some() {
            return Err(RegisterUserError::UsernameTaken);
        }

        // 2️⃣ Hash password
        let password_hash = self
            .password_hasher
            .hash_password(&input.password)
            .await
            .map_err(|e| RegisterUserError::HashingFailed(e.to_string()))?;

        // 3️⃣ User and first token in one write; the unique index still
        // guards the check-then-insert race
        let token = MintedToken::generate();
        let user = self
            .repository
            .create_user_with_token(
                CreateUserData {
                    username,
                    email,
                    password_hash,
                },
                token.key_hash,
            )
            .await
            .map_err(|e| match e {
                UserRepositoryError::UsernameTaken => RegisterUserError::UsernameTaken,
                UserRepositoryError::DatabaseError(msg) => RegisterUserError::RepositoryError(msg),
            })?;

        Ok(RegisterUserOutput {
            user_id: user.id,
            username: user.username,
            email: user.email,
            token: token.key,
        })
    }
}
