use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "professors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub salutation: Option<String>,
    pub name: String,
    pub area: Option<String>, // area code, see choices::AREAS
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::elective::Entity")]
    Electives,
}

impl Related<super::elective::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Electives.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
