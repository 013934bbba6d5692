use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create recipes table
        // =====================================================
        manager.create_table(recipes_table()).await?;

        // =====================================================
        // Indexes
        // =====================================================
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_recipes_author_id
                ON recipes (author_id);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_recipes_category_id
                ON recipes (category_id);
                "#,
            )
            .await?;

        // Default listing order
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_recipes_created_at
                ON recipes (created_at DESC);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_recipes_author_id;
                DROP INDEX IF EXISTS idx_recipes_category_id;
                DROP INDEX IF EXISTS idx_recipes_created_at;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Recipes::Table).to_owned())
            .await
    }
}

/// Recipes follow their author out (cascade) but outlive their category (set null).
fn recipes_table() -> TableCreateStatement {
    Table::create()
        .table(Recipes::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(Recipes::Id)
                .uuid()
                .not_null()
                .primary_key()
                .default(Expr::cust("gen_random_uuid()")),
        )
        .col(ColumnDef::new(Recipes::AuthorId).uuid().not_null())
        .col(ColumnDef::new(Recipes::CategoryId).uuid().null())
        .col(ColumnDef::new(Recipes::Title).string_len(200).not_null())
        .col(
            ColumnDef::new(Recipes::Description)
                .text()
                .not_null()
                .default(""),
        )
        .col(
            ColumnDef::new(Recipes::Ingredients)
                .text()
                .not_null()
                .default(""),
        )
        .col(
            ColumnDef::new(Recipes::Instructions)
                .text()
                .not_null()
                .default(""),
        )
        .col(ColumnDef::new(Recipes::PrepTime).integer().not_null())
        // cook_time > 0 is enforced by validation, not here.
        .col(ColumnDef::new(Recipes::CookTime).integer().not_null())
        .col(
            ColumnDef::new(Recipes::Servings)
                .integer()
                .not_null()
                .default(1),
        )
        .col(
            ColumnDef::new(Recipes::CreatedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .col(
            ColumnDef::new(Recipes::UpdatedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_recipes_author_id")
                .from(Recipes::Table, Recipes::AuthorId)
                .to(Users::Table, Users::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .on_update(ForeignKeyAction::Cascade),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_recipes_category_id")
                .from(Recipes::Table, Recipes::CategoryId)
                .to(Categories::Table, Categories::Id)
                .on_delete(ForeignKeyAction::SetNull)
                .on_update(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

#[derive(DeriveIden)]
enum Recipes {
    Table,
    Id,
    AuthorId,
    CategoryId,
    Title,
    Description,
    Ingredients,
    Instructions,
    PrepTime,
    CookTime,
    Servings,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Categories {
    Table,
    Id,
}
