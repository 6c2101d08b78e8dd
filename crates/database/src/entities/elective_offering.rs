use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "elective_offerings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub epgp_batch: i32,
    pub term: i32, // quarter number
    pub course_id: i32,
    pub track: Option<i32>,
    pub section: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::elective::Entity",
        from = "Column::CourseId",
        to = "super::elective::Column::Id"
    )]
    Course,
    #[sea_orm(has_many = "super::elective_enrollment::Entity")]
    ElectiveEnrollments,
}

impl Related<super::elective::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::elective_enrollment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ElectiveEnrollments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
