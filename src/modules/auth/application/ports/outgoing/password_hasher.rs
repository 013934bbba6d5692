use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum HashError {
    #[error("Password hashing failed")]
    HashFailed,

    #[error("Stored password hash is malformed")]
    MalformedHash,

    #[error("Background task failed")]
    TaskFailed,
}

/// Password hashing port. Implementations must be safe to call from async
/// handlers, so CPU-heavy work belongs on a blocking thread.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash_password(&self, password: &str) -> Result<String, HashError>;

    /// `Ok(false)` for a wrong password, `Err` only when the hash itself is unusable.
    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError>;
}
