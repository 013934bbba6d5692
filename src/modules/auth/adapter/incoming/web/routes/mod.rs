mod obtain_token;
mod register_user;

pub use obtain_token::*;
pub use register_user::*;
