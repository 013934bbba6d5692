pub mod authenticate_token;
pub mod obtain_token;
pub mod register_user;
