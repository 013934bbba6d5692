pub mod sea_orm_entity;
mod category_query_postgres;
mod category_repository_postgres;

pub use category_query_postgres::CategoryQueryPostgres;
pub use category_repository_postgres::CategoryRepositoryPostgres;
