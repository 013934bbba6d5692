pub mod sea_orm_entity;
mod recipe_query_postgres;
mod recipe_repository_postgres;

pub use recipe_query_postgres::RecipeQueryPostgres;
pub use recipe_repository_postgres::RecipeRepositoryPostgres;
