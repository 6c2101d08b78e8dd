use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub is_staff: bool,
    pub date_joined: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::auth_token::Entity")]
    AuthTokens,
    #[sea_orm(has_one = "super::batch_info::Entity")]
    BatchInfo,
    #[sea_orm(has_one = "super::social_links::Entity")]
    SocialLinks,
    #[sea_orm(has_many = "super::employment::Entity")]
    Employment,
    #[sea_orm(has_many = "super::elective_enrollment::Entity")]
    ElectiveEnrollments,
}

impl Related<super::auth_token::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AuthTokens.def()
    }
}

impl Related<super::batch_info::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BatchInfo.def()
    }
}

impl Related<super::social_links::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SocialLinks.def()
    }
}

impl Related<super::employment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employment.def()
    }
}

impl Related<super::elective_enrollment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ElectiveEnrollments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
