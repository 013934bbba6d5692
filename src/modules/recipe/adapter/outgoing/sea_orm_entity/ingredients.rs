use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::recipe::application::domain::entities::Ingredient;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "ingredients")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub recipe_id: Uuid,
    pub name: String,
    pub quantity: String,
    pub position: i32,
}

impl Model {
    pub fn to_domain(&self) -> Ingredient {
        Ingredient {
            id: self.id,
            name: self.name.clone(),
            quantity: self.quantity.clone(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::recipes::Entity",
        from = "Column::RecipeId",
        to = "super::recipes::Column::Id",
        on_delete = "Cascade"
    )]
    Recipe,
}

impl Related<super::recipes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Recipe.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
