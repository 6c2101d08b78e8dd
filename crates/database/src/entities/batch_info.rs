use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "batch_info")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub user_id: i32,
    pub epgp_batch: i32,
    pub epgp_group: String, // A-F
    pub roll_number: Option<String>,
    pub home_state: Option<String>, // state code, see choices::STATES
    pub home_town: Option<String>,
    pub current_city: Option<String>,
    pub study_center_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::study_center::Entity",
        from = "Column::StudyCenterId",
        to = "super::study_center::Column::Id"
    )]
    StudyCenter,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::study_center::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudyCenter.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
