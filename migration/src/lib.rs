pub use sea_orm_migration::prelude::*;

mod m20261001_000001_create_users_table;
mod m20261001_000002_create_auth_tokens_table;
mod m20261001_000003_create_categories_table;
mod m20261001_000004_create_recipes_table;
mod m20261001_000005_create_ingredients_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261001_000001_create_users_table::Migration),
            Box::new(m20261001_000002_create_auth_tokens_table::Migration),
            Box::new(m20261001_000003_create_categories_table::Migration),
            Box::new(m20261001_000004_create_recipes_table::Migration),
            Box::new(m20261001_000005_create_ingredients_table::Migration),
        ]
    }
}
