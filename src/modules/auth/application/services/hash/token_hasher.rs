use rand::RngCore;
use sha2::{Digest, Sha256};

/// Raw key size in bytes; hex-encoded this gives a 40 character token.
const TOKEN_KEY_BYTES: usize = 20;

/// Generate a fresh opaque token key from the OS-seeded thread RNG.
pub fn generate_token_key() -> String {
    let mut bytes = [0u8; TOKEN_KEY_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Hash a token using SHA-256 for storage
/// Never store raw tokens in the database!
pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}
