use crate::entities::{study_center, study_centre_poc};
use crate::error::ServiceError;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

pub struct CentreService;

impl CentreService {
    pub async fn list(db: &DatabaseConnection) -> Result<Vec<study_center::Model>, ServiceError> {
        Ok(study_center::Entity::find()
            .order_by_asc(study_center::Column::State)
            .order_by_asc(study_center::Column::City)
            .all(db)
            .await?)
    }

    /// POCs filtered by centre id. An unknown centre yields an empty list;
    /// the directory exposes no existence check.
    pub async fn pocs(
        db: &DatabaseConnection,
        centre_id: i32,
    ) -> Result<Vec<study_centre_poc::Model>, ServiceError> {
        Ok(study_centre_poc::Entity::find()
            .filter(study_centre_poc::Column::CentreId.eq(centre_id))
            .order_by_asc(study_centre_poc::Column::Id)
            .all(db)
            .await?)
    }
}
