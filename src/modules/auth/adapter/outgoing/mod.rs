pub mod sea_orm_entity;
pub mod security;
pub mod token_repository_postgres;
pub mod user_query_postgres;
pub mod user_repository_postgres;

pub use token_repository_postgres::TokenRepositoryPostgres;
pub use user_query_postgres::UserQueryPostgres;
pub use user_repository_postgres::UserRepositoryPostgres;
