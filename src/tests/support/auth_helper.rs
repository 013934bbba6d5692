use std::collections::HashMap;

use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::{TokenIdentity, UserId};
use crate::auth::application::use_cases::authenticate_token::{
    AuthenticateTokenError, IAuthenticateTokenUseCase,
};

/// Key accepted by the default test state.
pub const TEST_TOKEN: &str = "9944b09199c62bcf9418ad846dd0e4bbdfc6ee4b";

pub fn test_identity() -> TokenIdentity {
    TokenIdentity {
        user_id: UserId::from(Uuid::from_u128(0x5eed_0000_0000_0000_0000_0000_0000_0001)),
        username: "testuser".to_string(),
    }
}

/// Header tuple for `TestRequest::insert_header`.
pub fn token_header(key: &str) -> (&'static str, String) {
    ("Authorization", format!("Token {}", key))
}

/// Resolves a fixed set of keys; anything else is rejected.
#[derive(Clone, Default)]
pub struct StubAuthenticateTokenUseCase {
    tokens: HashMap<String, TokenIdentity>,
}

impl StubAuthenticateTokenUseCase {
    pub fn with_default_token() -> Self {
        Self::default().with_token(TEST_TOKEN, test_identity())
    }

    pub fn with_token(mut self, key: &str, identity: TokenIdentity) -> Self {
        self.tokens.insert(key.to_string(), identity);
        self
    }
}

#[async_trait]
impl IAuthenticateTokenUseCase for StubAuthenticateTokenUseCase {
    async fn execute(&self, key: &str) -> Result<TokenIdentity, AuthenticateTokenError> {
        self.tokens
            .get(key)
            .cloned()
            .ok_or(AuthenticateTokenError::InvalidToken)
    }
}
