mod token_hasher;

pub use token_hasher::{generate_token_key, hash_token};
