use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "study_centers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub state: String, // state code, see choices::STUDY_CENTER_STATES
    pub city: String,
    pub location: String,
    pub address: String,
    pub pin: Option<i32>,
    pub geo: Option<String>, // maps link
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::study_centre_poc::Entity")]
    Pocs,
    #[sea_orm(has_one = "super::batch_info::Entity")]
    BatchInfo,
}

impl Related<super::study_centre_poc::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pocs.def()
    }
}

impl Related<super::batch_info::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BatchInfo.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
