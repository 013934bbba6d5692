use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ingredients::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Ingredients::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Ingredients::RecipeId).uuid().not_null())
                    .col(ColumnDef::new(Ingredients::Name).string_len(100).not_null())
                    .col(
                        ColumnDef::new(Ingredients::Quantity)
                            .string_len(100)
                            .not_null()
                            .default(""),
                    )
                    // Insertion order within one write; reset on every replace.
                    .col(ColumnDef::new(Ingredients::Position).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ingredients_recipe_id")
                            .from(Ingredients::Table, Ingredients::RecipeId)
                            .to(Recipes::Table, Recipes::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_ingredients_recipe_id_position
                ON ingredients (recipe_id, position);
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
                DROP INDEX IF EXISTS idx_ingredients_recipe_id_position;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Ingredients::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Ingredients {
    Table,
    Id,
    RecipeId,
    Name,
    Quantity,
    Position,
}

#[derive(DeriveIden)]
enum Recipes {
    Table,
    Id,
}
