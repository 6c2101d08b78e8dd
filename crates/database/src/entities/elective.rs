use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "electives")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub area: Option<String>, // area code, see choices::AREAS
    pub course_code: String,
    pub course_name: String,
    pub instructor_id: Option<i32>,
    #[sea_orm(column_type = "Double", nullable)]
    pub credits: Option<f64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::professor::Entity",
        from = "Column::InstructorId",
        to = "super::professor::Column::Id"
    )]
    Instructor,
    #[sea_orm(has_many = "super::elective_offering::Entity")]
    ElectiveOfferings,
}

impl Related<super::professor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Instructor.def()
    }
}

impl Related<super::elective_offering::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ElectiveOfferings.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
