use crate::entities::{elective, elective_enrollment, elective_offering, professor, user};
use crate::error::ServiceError;
use crate::services::profile::ProfileService;
use crate::services::user::UserService;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use std::collections::HashMap;

/// Course together with its instructor.
pub type CourseRow = (elective::Model, Option<professor::Model>);

/// Offering together with its course; the course row is present unless the
/// catalog is mid-delete.
pub type OfferingRow = (elective_offering::Model, Option<CourseRow>);

/// Enrollment joined out to the offering and its course.
pub type EnrollmentRow = (
    elective_enrollment::Model,
    elective_offering::Model,
    Option<CourseRow>,
);

/// Non-mutating membership report for one (user, offering) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrollmentStatus {
    pub user: String,
    pub offering_id: i32,
    pub course_label: String,
    pub enrolled: bool,
}

/// Human-readable course tag used by the small offering projection, e.g.
/// "EIS-001 - Artificial Intelligence for Business - Prof. M P Sebastian".
pub fn course_label(course: &elective::Model, instructor: Option<&professor::Model>) -> String {
    match instructor {
        Some(instructor) => match instructor.salutation.as_deref() {
            Some(salutation) => format!(
                "{} - {} - {} {}",
                course.course_code, course.course_name, salutation, instructor.name
            ),
            None => format!(
                "{} - {} - {}",
                course.course_code, course.course_name, instructor.name
            ),
        },
        None => format!("{} - {}", course.course_code, course.course_name),
    }
}

pub struct ElectiveService;

impl ElectiveService {
    fn offering_not_found(id: i32) -> ServiceError {
        ServiceError::not_found(format!("ElectiveOffering with id {id} does not exist"))
    }

    /// Full course catalog with instructors, ordered by (area, course_code).
    pub async fn catalog(
        db: &DatabaseConnection,
    ) -> Result<Vec<(elective::Model, Option<professor::Model>)>, ServiceError> {
        Ok(elective::Entity::find()
            .find_also_related(professor::Entity)
            .order_by_asc(elective::Column::Area)
            .order_by_asc(elective::Column::CourseCode)
            .all(db)
            .await?)
    }

    /// Offerings for the caller's own batch, resolved through their
    /// BatchInfo. Fails with NotFound when the caller has no BatchInfo yet.
    pub async fn offerings_for_caller(
        db: &DatabaseConnection,
        user_id: i32,
    ) -> Result<Vec<OfferingRow>, ServiceError> {
        let batch = ProfileService::batch_info(db, user_id).await?.epgp_batch;
        Self::offerings_for_batch(db, batch).await
    }

    pub async fn offerings_for_batch(
        db: &DatabaseConnection,
        epgp_batch: i32,
    ) -> Result<Vec<OfferingRow>, ServiceError> {
        let rows = elective_offering::Entity::find()
            .filter(elective_offering::Column::EpgpBatch.eq(epgp_batch))
            .find_also_related(elective::Entity)
            .order_by_asc(elective::Column::Area)
            .order_by_asc(elective::Column::CourseCode)
            .order_by_asc(elective_offering::Column::Section)
            .all(db)
            .await?;

        let instructors =
            Self::instructors_for(db, rows.iter().filter_map(|(_, course)| course.as_ref()))
                .await?;

        Ok(rows
            .into_iter()
            .map(|(offering, course)| {
                let course = course.map(|course| Self::with_instructor(course, &instructors));
                (offering, course)
            })
            .collect())
    }

    /// One batched lookup for the instructors of a set of courses, keyed by
    /// professor id.
    async fn instructors_for<'a>(
        db: &DatabaseConnection,
        courses: impl Iterator<Item = &'a elective::Model>,
    ) -> Result<HashMap<i32, professor::Model>, ServiceError> {
        let ids: Vec<i32> = courses.filter_map(|course| course.instructor_id).collect();
        if ids.is_empty() {
            return Ok(HashMap::new());
        }
        Ok(professor::Entity::find()
            .filter(professor::Column::Id.is_in(ids))
            .all(db)
            .await?
            .into_iter()
            .map(|instructor| (instructor.id, instructor))
            .collect())
    }

    fn with_instructor(
        course: elective::Model,
        instructors: &HashMap<i32, professor::Model>,
    ) -> CourseRow {
        let instructor = course
            .instructor_id
            .and_then(|id| instructors.get(&id).cloned());
        (course, instructor)
    }

    /// Offering with its course and the course's instructor embedded.
    pub async fn offering_detail(
        db: &DatabaseConnection,
        offering_id: i32,
    ) -> Result<(elective_offering::Model, Option<CourseRow>), ServiceError> {
        let offering = elective_offering::Entity::find_by_id(offering_id)
            .one(db)
            .await?
            .ok_or_else(|| Self::offering_not_found(offering_id))?;

        let course = elective::Entity::find_by_id(offering.course_id)
            .find_also_related(professor::Entity)
            .one(db)
            .await?;

        Ok((offering, course))
    }

    /// Every user holding an enrollment for the offering. An offering with
    /// zero enrollments yields an empty list, not an error.
    pub async fn takers(
        db: &DatabaseConnection,
        offering_id: i32,
    ) -> Result<Vec<user::Model>, ServiceError> {
        let exists = elective_offering::Entity::find_by_id(offering_id)
            .one(db)
            .await?
            .is_some();
        if !exists {
            return Err(Self::offering_not_found(offering_id));
        }

        let rows = elective_enrollment::Entity::find()
            .filter(elective_enrollment::Column::OfferingId.eq(offering_id))
            .find_also_related(user::Entity)
            .all(db)
            .await?;

        Ok(rows.into_iter().filter_map(|(_, taker)| taker).collect())
    }

    /// A user's enrollments with offering and course embedded. The target
    /// user must exist; an unknown id is a lookup error rather than an
    /// empty list.
    pub async fn enrollments_for_user(
        db: &DatabaseConnection,
        user_id: i32,
    ) -> Result<Vec<EnrollmentRow>, ServiceError> {
        UserService::get(db, user_id).await?;

        let rows = elective_enrollment::Entity::find()
            .filter(elective_enrollment::Column::UserId.eq(user_id))
            .find_also_related(elective_offering::Entity)
            .all(db)
            .await?;

        let course_ids: Vec<i32> = rows
            .iter()
            .filter_map(|(_, offering)| offering.as_ref().map(|o| o.course_id))
            .collect();
        // Keyed maps rather than a consuming join: several offerings of the
        // same course may appear in one listing.
        let courses: HashMap<i32, elective::Model> = elective::Entity::find()
            .filter(elective::Column::Id.is_in(course_ids))
            .all(db)
            .await?
            .into_iter()
            .map(|course| (course.id, course))
            .collect();
        let instructors = Self::instructors_for(db, courses.values()).await?;

        Ok(rows
            .into_iter()
            .filter_map(|(enrollment, offering)| {
                let offering = offering?;
                let course = courses
                    .get(&offering.course_id)
                    .cloned()
                    .map(|course| Self::with_instructor(course, &instructors));
                Some((enrollment, offering, course))
            })
            .collect())
    }

    /// Creates the enrollment row for (user, offering). Exactly one row may
    /// exist per pair; a repeat call reports Conflict and leaves the count
    /// at one. The unique index on (user_id, offering_id) closes the
    /// check-then-insert race.
    pub async fn enroll(
        db: &DatabaseConnection,
        user_id: i32,
        offering_id: i32,
    ) -> Result<elective_enrollment::Model, ServiceError> {
        let exists = elective_offering::Entity::find_by_id(offering_id)
            .one(db)
            .await?
            .is_some();
        if !exists {
            return Err(Self::offering_not_found(offering_id));
        }

        let already = elective_enrollment::Entity::find()
            .filter(elective_enrollment::Column::UserId.eq(user_id))
            .filter(elective_enrollment::Column::OfferingId.eq(offering_id))
            .one(db)
            .await?
            .is_some();
        if already {
            return Err(ServiceError::conflict(
                "User is already enrolled in this elective offering",
            ));
        }

        let inserted = elective_enrollment::ActiveModel {
            user_id: Set(user_id),
            offering_id: Set(offering_id),
            ..Default::default()
        }
        .insert(db)
        .await;

        inserted.map_err(|err| {
            if ServiceError::is_unique_violation(&err) {
                ServiceError::conflict("User is already enrolled in this elective offering")
            } else {
                err.into()
            }
        })
    }

    /// Reports membership without mutating state.
    pub async fn enrollment_status(
        db: &DatabaseConnection,
        caller: &user::Model,
        offering_id: i32,
    ) -> Result<EnrollmentStatus, ServiceError> {
        let (offering, course) = Self::offering_detail(db, offering_id).await?;

        let course_label = course
            .map(|(course, instructor)| course_label(&course, instructor.as_ref()))
            .unwrap_or_default();

        let enrolled = elective_enrollment::Entity::find()
            .filter(elective_enrollment::Column::UserId.eq(caller.id))
            .filter(elective_enrollment::Column::OfferingId.eq(offering.id))
            .one(db)
            .await?
            .is_some();

        Ok(EnrollmentStatus {
            user: caller.username.clone(),
            offering_id: offering.id,
            course_label,
            enrolled,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn sample_offering(id: i32) -> elective_offering::Model {
        elective_offering::Model {
            id,
            epgp_batch: 17,
            term: 5,
            course_id: 10,
            track: Some(1),
            section: Some("A".to_string()),
        }
    }

    fn sample_course(id: i32) -> elective::Model {
        elective::Model {
            id,
            area: Some("IS".to_string()),
            course_code: "EIS-001".to_string(),
            course_name: "Artificial Intelligence for Business".to_string(),
            instructor_id: None,
            credits: Some(1.0),
        }
    }

    fn sample_user(id: i32) -> user::Model {
        user::Model {
            id,
            username: "asha".to_string(),
            email: "asha@example.com".to_string(),
            password_hash: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            is_staff: false,
            date_joined: Utc::now().naive_utc(),
        }
    }

    #[test]
    fn test_course_label_without_instructor() {
        let label = course_label(&sample_course(10), None);
        assert_eq!(label, "EIS-001 - Artificial Intelligence for Business");
    }

    #[test]
    fn test_course_label_with_instructor() {
        let instructor = professor::Model {
            id: 1,
            salutation: Some("Prof.".to_string()),
            name: "M P Sebastian".to_string(),
            area: Some("IS".to_string()),
            email: None,
            phone: None,
        };
        let label = course_label(&sample_course(10), Some(&instructor));
        assert_eq!(
            label,
            "EIS-001 - Artificial Intelligence for Business - Prof. M P Sebastian"
        );
    }

    #[tokio::test]
    async fn test_enroll_unknown_offering_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<elective_offering::Model>::new()])
            .into_connection();

        let result = ElectiveService::enroll(&db, 1, 99).await;
        match result {
            Err(ServiceError::NotFound(message)) => assert!(message.contains("99")),
            other => panic!("expected not found, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_enroll_twice_reports_conflict() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![sample_offering(5)]])
            .append_query_results([vec![elective_enrollment::Model {
                id: 1,
                user_id: 1,
                offering_id: 5,
            }]])
            .into_connection();

        let result = ElectiveService::enroll(&db, 1, 5).await;
        assert!(matches!(result, Err(ServiceError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_enroll_inserts_once() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![sample_offering(5)]])
            .append_query_results([Vec::<elective_enrollment::Model>::new()])
            .append_query_results([vec![elective_enrollment::Model {
                id: 1,
                user_id: 1,
                offering_id: 5,
            }]])
            .append_exec_results([MockExecResult {
                last_insert_id: 1,
                rows_affected: 1,
            }])
            .into_connection();

        let enrollment = ElectiveService::enroll(&db, 1, 5).await.unwrap();
        assert_eq!(enrollment.user_id, 1);
        assert_eq!(enrollment.offering_id, 5);
    }

    #[tokio::test]
    async fn test_status_reports_membership_without_mutation() {
        let caller = sample_user(1);
        let instructor = professor::Model {
            id: 1,
            salutation: Some("Prof.".to_string()),
            name: "M P Sebastian".to_string(),
            area: Some("IS".to_string()),
            email: None,
            phone: None,
        };
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            // offering lookup, course join, membership probe
            .append_query_results([vec![sample_offering(5)]])
            .append_query_results([vec![(sample_course(10), instructor)]])
            .append_query_results([Vec::<elective_enrollment::Model>::new()])
            .into_connection();

        let status = ElectiveService::enrollment_status(&db, &caller, 5).await.unwrap();
        assert_eq!(status.offering_id, 5);
        assert!(!status.enrolled);
        assert_eq!(
            status.course_label,
            "EIS-001 - Artificial Intelligence for Business - Prof. M P Sebastian"
        );
    }

    #[tokio::test]
    async fn test_enrollments_keep_course_for_repeated_elective() {
        // Two offerings of the same course; both rows must carry the course
        // after the join.
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![sample_user(1)]])
            .append_query_results([vec![
                (
                    elective_enrollment::Model {
                        id: 1,
                        user_id: 1,
                        offering_id: 5,
                    },
                    sample_offering(5),
                ),
                (
                    elective_enrollment::Model {
                        id: 2,
                        user_id: 1,
                        offering_id: 6,
                    },
                    sample_offering(6),
                ),
            ]])
            .append_query_results([vec![sample_course(10)]])
            .into_connection();

        let rows = ElectiveService::enrollments_for_user(&db, 1).await.unwrap();
        assert_eq!(rows.len(), 2);
        for (_, offering, course) in &rows {
            let (course, _) = course
                .as_ref()
                .unwrap_or_else(|| panic!("offering {} lost its course", offering.id));
            assert_eq!(course.course_code, "EIS-001");
        }
    }

    #[tokio::test]
    async fn test_takers_empty_offering_is_ok() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![sample_offering(5)]])
            .append_query_results([Vec::<(elective_enrollment::Model, user::Model)>::new()])
            .into_connection();

        let takers = ElectiveService::takers(&db, 5).await.unwrap();
        assert!(takers.is_empty());
    }
}
