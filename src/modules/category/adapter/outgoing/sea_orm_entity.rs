use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::category::application::domain::entities::Category;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub name: String,

    pub description: String,

    pub created_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_domain(&self) -> Category {
        Category {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            created_at: self.created_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
