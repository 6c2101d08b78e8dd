use crate::choices;
use crate::entities::{batch_info, employment, social_links, study_center};
use crate::error::{FieldErrors, ServiceError};
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use serde::Deserialize;

/// Partial batch-info write; absent fields are left untouched.
#[derive(Debug, Default, Deserialize)]
pub struct BatchInfoPatch {
    pub epgp_batch: Option<i32>,
    pub epgp_group: Option<String>,
    pub roll_number: Option<String>,
    pub home_state: Option<String>,
    pub home_town: Option<String>,
    pub current_city: Option<String>,
    pub study_center_id: Option<i32>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SocialLinksPatch {
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

#[derive(Debug, Deserialize)]
pub struct NewEmployment {
    pub employer: String,
    pub city: Option<String>,
    pub country: Option<String>,
    pub start_date: Option<chrono::NaiveDate>,
    pub end_date: Option<chrono::NaiveDate>,
    pub position: Option<String>,
    pub description: Option<String>,
}

impl BatchInfoPatch {
    /// Field-level checks. All failures are collected before anything is
    /// written, so a bad patch never persists partially.
    fn validate(&self) -> FieldErrors {
        let mut fields = FieldErrors::new();
        if let Some(group) = self.epgp_group.as_deref()
            && !choices::is_group(group)
        {
            fields.insert(
                "epgp_group".into(),
                format!("\"{group}\" is not a valid choice"),
            );
        }
        if let Some(state) = self.home_state.as_deref()
            && !choices::is_state(state)
        {
            fields.insert(
                "home_state".into(),
                format!("\"{state}\" is not a valid choice"),
            );
        }
        fields
    }

    fn apply(self, active: &mut batch_info::ActiveModel) {
        if let Some(batch) = self.epgp_batch {
            active.epgp_batch = Set(batch);
        }
        if let Some(group) = self.epgp_group {
            active.epgp_group = Set(group);
        }
        if let Some(roll_number) = self.roll_number {
            active.roll_number = Set(Some(roll_number));
        }
        if let Some(state) = self.home_state {
            active.home_state = Set(Some(state));
        }
        if let Some(town) = self.home_town {
            active.home_town = Set(Some(town));
        }
        if let Some(city) = self.current_city {
            active.current_city = Set(Some(city));
        }
        if let Some(centre) = self.study_center_id {
            active.study_center_id = Set(Some(centre));
        }
    }
}

impl SocialLinksPatch {
    fn validate(&self) -> FieldErrors {
        let mut fields = FieldErrors::new();
        if let Some(email) = self.personal_email.as_deref()
            && !email.is_empty()
            && !email.contains('@')
        {
            fields.insert(
                "personal_email".into(),
                "enter a valid email address".into(),
            );
        }
        fields
    }

    fn apply(self, active: &mut social_links::ActiveModel) {
        if let Some(value) = self.personal_email {
            active.personal_email = Set(Some(value));
        }
        if let Some(value) = self.phone {
            active.phone = Set(Some(value));
        }
        if let Some(value) = self.whatsapp {
            active.whatsapp = Set(Some(value));
        }
        if let Some(value) = self.telegram {
            active.telegram = Set(Some(value));
        }
        if let Some(value) = self.linkedin {
            active.linkedin = Set(Some(value));
        }
        if let Some(value) = self.facebook {
            active.facebook = Set(Some(value));
        }
        if let Some(value) = self.twitter {
            active.twitter = Set(Some(value));
        }
        if let Some(value) = self.instagram {
            active.instagram = Set(Some(value));
        }
        if let Some(value) = self.github {
            active.github = Set(Some(value));
        }
        if let Some(value) = self.website {
            active.website = Set(Some(value));
        }
        if let Some(value) = self.youtube {
            active.youtube = Set(Some(value));
        }
        if let Some(value) = self.other {
            active.other = Set(Some(value));
        }
        if let Some(value) = self.bio {
            active.bio = Set(Some(value));
        }
    }
}

pub struct ProfileService;

impl ProfileService {
    const DEFAULT_BATCH: i32 = 17;
    const DEFAULT_GROUP: &'static str = "A";

    pub async fn batch_info(
        db: &DatabaseConnection,
        user_id: i32,
    ) -> Result<batch_info::Model, ServiceError> {
        batch_info::Entity::find()
            .filter(batch_info::Column::UserId.eq(user_id))
            .one(db)
            .await?
            .ok_or_else(|| {
                ServiceError::not_found(format!("No BatchInfo found for user {user_id}"))
            })
    }

    /// Find-or-default, apply patch, persist. The returned flag is true when
    /// a new row was created.
    pub async fn upsert_batch_info(
        db: &DatabaseConnection,
        user_id: i32,
        patch: BatchInfoPatch,
    ) -> Result<(batch_info::Model, bool), ServiceError> {
        let mut fields = patch.validate();
        if let Some(centre_id) = patch.study_center_id
            && study_center::Entity::find_by_id(centre_id)
                .one(db)
                .await?
                .is_none()
        {
            fields.insert(
                "study_center_id".into(),
                format!("StudyCenter with id {centre_id} does not exist"),
            );
        }
        if !fields.is_empty() {
            return Err(ServiceError::Validation(fields));
        }

        let existing = batch_info::Entity::find()
            .filter(batch_info::Column::UserId.eq(user_id))
            .one(db)
            .await?;

        match existing {
            Some(row) => {
                let mut active: batch_info::ActiveModel = row.into();
                patch.apply(&mut active);
                Ok((active.update(db).await?, false))
            }
            None => {
                let mut active = batch_info::ActiveModel {
                    user_id: Set(user_id),
                    epgp_batch: Set(Self::DEFAULT_BATCH),
                    epgp_group: Set(Self::DEFAULT_GROUP.to_string()),
                    ..Default::default()
                };
                patch.apply(&mut active);
                Ok((active.insert(db).await?, true))
            }
        }
    }

    pub async fn social_links(
        db: &DatabaseConnection,
        user_id: i32,
    ) -> Result<social_links::Model, ServiceError> {
        social_links::Entity::find()
            .filter(social_links::Column::UserId.eq(user_id))
            .one(db)
            .await?
            .ok_or_else(|| {
                ServiceError::not_found(format!("No SocialLinks found for user {user_id}"))
            })
    }

    pub async fn upsert_social_links(
        db: &DatabaseConnection,
        user_id: i32,
        patch: SocialLinksPatch,
    ) -> Result<(social_links::Model, bool), ServiceError> {
        let fields = patch.validate();
        if !fields.is_empty() {
            return Err(ServiceError::Validation(fields));
        }

        let existing = social_links::Entity::find()
            .filter(social_links::Column::UserId.eq(user_id))
            .one(db)
            .await?;

        match existing {
            Some(row) => {
                let mut active: social_links::ActiveModel = row.into();
                patch.apply(&mut active);
                Ok((active.update(db).await?, false))
            }
            None => {
                let mut active = social_links::ActiveModel {
                    user_id: Set(user_id),
                    ..Default::default()
                };
                patch.apply(&mut active);
                Ok((active.insert(db).await?, true))
            }
        }
    }

    pub async fn employment(
        db: &DatabaseConnection,
        user_id: i32,
    ) -> Result<Vec<employment::Model>, ServiceError> {
        Ok(employment::Entity::find()
            .filter(employment::Column::UserId.eq(user_id))
            .order_by_desc(employment::Column::StartDate)
            .all(db)
            .await?)
    }

    pub async fn add_employment(
        db: &DatabaseConnection,
        user_id: i32,
        new: NewEmployment,
    ) -> Result<employment::Model, ServiceError> {
        if new.employer.trim().is_empty() {
            return Err(ServiceError::field("employer", "this field is required"));
        }
        Ok(employment::ActiveModel {
            user_id: Set(user_id),
            employer: Set(new.employer),
            city: Set(new.city),
            country: Set(new.country),
            start_date: Set(new.start_date),
            end_date: Set(new.end_date),
            position: Set(new.position),
            description: Set(new.description),
            ..Default::default()
        }
        .insert(db)
        .await?)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn sample_batch_info(user_id: i32) -> batch_info::Model {
        batch_info::Model {
            id: 1,
            user_id,
            epgp_batch: 17,
            epgp_group: "A".to_string(),
            roll_number: None,
            home_state: None,
            home_town: None,
            current_city: None,
            study_center_id: None,
        }
    }

    #[test]
    fn test_batch_patch_rejects_unknown_group() {
        let patch = BatchInfoPatch {
            epgp_group: Some("Z".to_string()),
            home_state: Some("XX".to_string()),
            ..Default::default()
        };
        let fields = patch.validate();
        assert!(fields.contains_key("epgp_group"));
        assert!(fields.contains_key("home_state"));
    }

    #[test]
    fn test_batch_patch_leaves_unset_fields_untouched() {
        let mut active: batch_info::ActiveModel = sample_batch_info(3).into();
        let patch = BatchInfoPatch {
            epgp_group: Some("B".to_string()),
            ..Default::default()
        };
        patch.apply(&mut active);

        // only epgp_group moved to a new value
        assert_eq!(active.epgp_group.clone().unwrap(), "B");
        assert_eq!(active.epgp_batch.clone().unwrap(), 17);
        assert_eq!(active.roll_number.clone().unwrap(), None);
    }

    #[tokio::test]
    async fn test_upsert_creates_on_first_write() {
        let created = batch_info::Model {
            epgp_batch: 18,
            ..sample_batch_info(3)
        };
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            // lookup finds nothing, then the insert returns the new row
            .append_query_results([Vec::<batch_info::Model>::new()])
            .append_query_results([vec![created.clone()]])
            .append_exec_results([MockExecResult {
                last_insert_id: 1,
                rows_affected: 1,
            }])
            .into_connection();

        let patch = BatchInfoPatch {
            epgp_batch: Some(18),
            ..Default::default()
        };
        let (row, was_created) = ProfileService::upsert_batch_info(&db, 3, patch).await.unwrap();
        assert!(was_created);
        assert_eq!(row.epgp_batch, 18);
        assert_eq!(row.epgp_group, "A");
    }

    #[tokio::test]
    async fn test_upsert_updates_existing_row() {
        let existing = batch_info::Model {
            epgp_batch: 18,
            ..sample_batch_info(3)
        };
        let updated = batch_info::Model {
            epgp_group: "B".to_string(),
            ..existing.clone()
        };
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![existing]])
            .append_query_results([vec![updated.clone()]])
            .append_exec_results([MockExecResult {
                last_insert_id: 1,
                rows_affected: 1,
            }])
            .into_connection();

        let patch = BatchInfoPatch {
            epgp_group: Some("B".to_string()),
            ..Default::default()
        };
        let (row, was_created) = ProfileService::upsert_batch_info(&db, 3, patch).await.unwrap();
        assert!(!was_created);
        assert_eq!(row.epgp_batch, 18);
        assert_eq!(row.epgp_group, "B");
    }

    #[tokio::test]
    async fn test_upsert_aborts_before_any_write_on_bad_choice() {
        // No query results queued: a validation failure must not touch the db.
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let patch = BatchInfoPatch {
            epgp_group: Some("Q".to_string()),
            ..Default::default()
        };
        let result = ProfileService::upsert_batch_info(&db, 3, patch).await;
        assert!(matches!(result, Err(ServiceError::Validation(_))));
    }
}
