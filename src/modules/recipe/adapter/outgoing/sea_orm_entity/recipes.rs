use sea_orm::entity::prelude::*;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "recipes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub author_id: Uuid,

    pub category_id: Option<Uuid>,

    pub title: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    /// Legacy free-text ingredient list
    #[sea_orm(column_type = "Text")]
    pub ingredients: String,

    #[sea_orm(column_type = "Text")]
    pub instructions: String,

    pub prep_time: i32,
    pub cook_time: i32,
    pub servings: i32,

    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::ingredients::Entity")]
    Ingredients,
}

impl Related<super::ingredients::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ingredients.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
