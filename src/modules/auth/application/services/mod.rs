pub mod hash;
pub mod token_issuer;

pub use token_issuer::{MintedToken, TokenIssuer};
