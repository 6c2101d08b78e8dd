use database::choices;
use database::entities::{batch_info, employment, social_links};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct BatchInfoResponse {
    pub id: i32,
    pub epgp_batch: i32,
    pub epgp_group: String,
    pub roll_number: Option<String>,
    pub home_state: Option<String>,
    pub home_state_name: Option<String>,
    pub home_town: Option<String>,
    pub current_city: Option<String>,
    pub study_center_id: Option<i32>,
}

impl From<batch_info::Model> for BatchInfoResponse {
    fn from(row: batch_info::Model) -> Self {
        Self {
            id: row.id,
            epgp_batch: row.epgp_batch,
            epgp_group: row.epgp_group,
            roll_number: row.roll_number,
            home_state_name: row
                .home_state
                .as_deref()
                .and_then(choices::state_label)
                .map(str::to_string),
            home_state: row.home_state,
            home_town: row.home_town,
            current_city: row.current_city,
            study_center_id: row.study_center_id,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SocialLinksResponse {
    pub id: i32,
    pub personal_email: Option<String>,
    pub phone: Option<String>,
    pub whatsapp: Option<String>,
    pub telegram: Option<String>,
    pub linkedin: Option<String>,
    pub facebook: Option<String>,
    pub twitter: Option<String>,
    pub instagram: Option<String>,
    pub github: Option<String>,
    pub website: Option<String>,
    pub youtube: Option<String>,
    pub other: Option<String>,
    pub bio: Option<String>,
}

impl From<social_links::Model> for SocialLinksResponse {
    fn from(row: social_links::Model) -> Self {
        Self {
            id: row.id,
            personal_email: row.personal_email,
            phone: row.phone,
            whatsapp: row.whatsapp,
            telegram: row.telegram,
            linkedin: row.linkedin,
            facebook: row.facebook,
            twitter: row.twitter,
            instagram: row.instagram,
            github: row.github,
            website: row.website,
            youtube: row.youtube,
            other: row.other,
            bio: row.bio,
        }
    }
}

/// Upsert envelope; `created` distinguishes first write from update.
#[derive(Debug, Serialize, ToSchema)]
pub struct BatchInfoUpsertResponse {
    pub created: bool,
    #[serde(flatten)]
    pub batch_info: BatchInfoResponse,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SocialLinksUpsertResponse {
    pub created: bool,
    #[serde(flatten)]
    pub social_links: SocialLinksResponse,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EmploymentResponse {
    pub id: i32,
    pub employer: String,
    pub city: Option<String>,
    pub country: Option<String>,
    pub start_date: Option<chrono::NaiveDate>,
    pub end_date: Option<chrono::NaiveDate>,
    pub position: Option<String>,
    pub description: Option<String>,
}

impl From<employment::Model> for EmploymentResponse {
    fn from(row: employment::Model) -> Self {
        Self {
            id: row.id,
            employer: row.employer,
            city: row.city,
            country: row.country,
            start_date: row.start_date,
            end_date: row.end_date,
            position: row.position,
            description: row.description,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_batch_info_response_resolves_state_name() {
        let response = BatchInfoResponse::from(batch_info::Model {
            id: 1,
            user_id: 3,
            epgp_batch: 17,
            epgp_group: "A".to_string(),
            roll_number: None,
            home_state: Some("KL".to_string()),
            home_town: None,
            current_city: None,
            study_center_id: None,
        });
        assert_eq!(response.home_state.as_deref(), Some("KL"));
        assert_eq!(response.home_state_name.as_deref(), Some("Kerala"));
    }
}
