use database::entities::{study_center, study_centre_poc};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct CentreResponse {
    pub id: i32,
    pub state: String,
    pub city: String,
    pub location: String,
    pub address: String,
    pub pin: Option<i32>,
    pub geo: Option<String>,
}

impl From<study_center::Model> for CentreResponse {
    fn from(row: study_center::Model) -> Self {
        Self {
            id: row.id,
            state: row.state,
            city: row.city,
            location: row.location,
            address: row.address,
            pin: row.pin,
            geo: row.geo,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PocResponse {
    pub id: i32,
    pub person: String,
    pub number: String,
}

impl From<study_centre_poc::Model> for PocResponse {
    fn from(row: study_centre_poc::Model) -> Self {
        Self {
            id: row.id,
            person: row.person,
            number: row.number,
        }
    }
}
