//! Idempotent catalog seeding from versioned data files.
//!
//! Seed entries come from JSON files shipped with the seeder binary. Every
//! load is get-or-create, so re-running a seed leaves existing rows alone
//! and reports them as such.

use crate::choices;
use crate::entities::{elective, professor, study_center, study_centre_poc};
use crate::error::ServiceError;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use serde::Deserialize;
use std::collections::HashMap;

/// One elective catalog entry as it appears in `electives.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct ElectiveEntry {
    pub course: String,
    pub code: String,
    #[serde(default)]
    pub faculty: Option<String>,
    #[serde(default)]
    pub area: Option<String>,
    #[serde(default)]
    pub credits: Option<f64>,
}

/// One study centre entry as it appears in `study_centres.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct CentreEntry {
    pub state: String,
    pub city: String,
    pub location: String,
    pub address: String,
    #[serde(default)]
    pub pin: Option<i32>,
    #[serde(default)]
    pub geo: Option<String>,
    #[serde(default)]
    pub pocs: Vec<PocEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PocEntry {
    pub person: String,
    pub number: String,
}

#[derive(Debug, Default)]
pub struct SeedReport {
    pub created: usize,
    pub existing: usize,
    pub skipped: Vec<String>,
}

/// Splits a leading salutation ("Prof. Deepa Sethi" -> ("Prof.", "Deepa
/// Sethi")) so professors land with the salutation in its own column.
fn split_salutation(full_name: &str) -> (Option<&str>, &str) {
    match full_name.split_once(' ') {
        Some((first, rest)) if choices::is_salutation(first) => (Some(first), rest.trim()),
        _ => (None, full_name),
    }
}

pub struct SeedService;

impl SeedService {
    /// Loads the elective catalog. Professors are deduplicated by name,
    /// electives by the (course_code, course_name) pair.
    pub async fn load_electives(
        db: &DatabaseConnection,
        entries: &[ElectiveEntry],
    ) -> Result<SeedReport, ServiceError> {
        let mut report = SeedReport::default();
        let mut professor_cache: HashMap<String, i32> = HashMap::new();

        for entry in entries {
            let course_name = entry.course.trim();
            let course_code = entry.code.trim();
            if course_name.is_empty() || course_code.is_empty() {
                report
                    .skipped
                    .push(format!("{entry:?}: missing course name or code"));
                continue;
            }

            let instructor_id = match entry.faculty.as_deref().map(str::trim) {
                Some(name) if !name.is_empty() => {
                    Some(Self::professor_id(db, &mut professor_cache, name).await?)
                }
                _ => None,
            };

            let existing = elective::Entity::find()
                .filter(elective::Column::CourseCode.eq(course_code))
                .filter(elective::Column::CourseName.eq(course_name))
                .one(db)
                .await?;

            if existing.is_some() {
                report.existing += 1;
                continue;
            }

            elective::ActiveModel {
                area: Set(entry.area.clone()),
                course_code: Set(course_code.to_string()),
                course_name: Set(course_name.to_string()),
                instructor_id: Set(instructor_id),
                credits: Set(entry.credits),
                ..Default::default()
            }
            .insert(db)
            .await?;
            report.created += 1;
        }

        Ok(report)
    }

    async fn professor_id(
        db: &DatabaseConnection,
        cache: &mut HashMap<String, i32>,
        full_name: &str,
    ) -> Result<i32, ServiceError> {
        if let Some(&id) = cache.get(full_name) {
            return Ok(id);
        }

        let (salutation, name) = split_salutation(full_name);
        let found = professor::Entity::find()
            .filter(professor::Column::Name.eq(name))
            .one(db)
            .await?;
        let id = match found {
            Some(row) => row.id,
            None => {
                professor::ActiveModel {
                    salutation: Set(salutation.map(str::to_string)),
                    name: Set(name.to_string()),
                    ..Default::default()
                }
                .insert(db)
                .await?
                .id
            }
        };

        cache.insert(full_name.to_string(), id);
        Ok(id)
    }

    /// Loads study centres and their POCs, deduplicated by
    /// (state, city, location) and (centre, person) respectively.
    pub async fn load_centres(
        db: &DatabaseConnection,
        entries: &[CentreEntry],
    ) -> Result<SeedReport, ServiceError> {
        let mut report = SeedReport::default();

        for entry in entries {
            if !choices::is_study_center_state(&entry.state) {
                report.skipped.push(format!(
                    "{} ({}): unknown study centre state code",
                    entry.city, entry.state
                ));
                continue;
            }

            let existing = study_center::Entity::find()
                .filter(study_center::Column::State.eq(&entry.state))
                .filter(study_center::Column::City.eq(&entry.city))
                .filter(study_center::Column::Location.eq(&entry.location))
                .one(db)
                .await?;

            let (centre_id, created) = match existing {
                Some(row) => (row.id, false),
                None => {
                    let inserted = study_center::ActiveModel {
                        state: Set(entry.state.clone()),
                        city: Set(entry.city.clone()),
                        location: Set(entry.location.clone()),
                        address: Set(entry.address.clone()),
                        pin: Set(entry.pin),
                        geo: Set(entry.geo.clone()),
                        ..Default::default()
                    }
                    .insert(db)
                    .await?;
                    (inserted.id, true)
                }
            };
            if created {
                report.created += 1;
            } else {
                report.existing += 1;
            }

            for poc in &entry.pocs {
                let poc_exists = study_centre_poc::Entity::find()
                    .filter(study_centre_poc::Column::CentreId.eq(centre_id))
                    .filter(study_centre_poc::Column::Person.eq(&poc.person))
                    .one(db)
                    .await?
                    .is_some();
                if poc_exists {
                    continue;
                }
                study_centre_poc::ActiveModel {
                    centre_id: Set(centre_id),
                    person: Set(poc.person.clone()),
                    number: Set(poc.number.clone()),
                    ..Default::default()
                }
                .insert(db)
                .await?;
            }
        }

        Ok(report)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[test]
    fn test_elective_entry_parses_minimal_json() {
        let entry: ElectiveEntry =
            serde_json::from_str(r#"{"course": "Game Theory", "code": "EECO-003"}"#).unwrap();
        assert_eq!(entry.course, "Game Theory");
        assert_eq!(entry.code, "EECO-003");
        assert!(entry.faculty.is_none());
        assert!(entry.credits.is_none());
    }

    #[test]
    fn test_split_salutation() {
        assert_eq!(
            split_salutation("Prof. Deepa Sethi"),
            (Some("Prof."), "Deepa Sethi")
        );
        assert_eq!(
            split_salutation("Dr. Pramukh Nanjundaswamy Vasist"),
            (Some("Dr."), "Pramukh Nanjundaswamy Vasist")
        );
        assert_eq!(split_salutation("Venkatesh Bangaruswamy"), (None, "Venkatesh Bangaruswamy"));
    }

    #[tokio::test]
    async fn test_load_centres_skips_unknown_state_code() {
        // No query results queued: the bad entry must be rejected before any
        // database work.
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let entries = vec![CentreEntry {
            state: "ZZ".to_string(),
            city: "Nowhere".to_string(),
            location: "Main".to_string(),
            address: "1 Main St".to_string(),
            pin: None,
            geo: None,
            pocs: vec![],
        }];

        let report = SeedService::load_centres(&db, &entries).await.unwrap();
        assert_eq!(report.created, 0);
        assert_eq!(report.skipped.len(), 1);
    }

    #[tokio::test]
    async fn test_load_skips_entries_without_code() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let entries = vec![ElectiveEntry {
            course: "Game Theory".to_string(),
            code: "  ".to_string(),
            faculty: None,
            area: None,
            credits: None,
        }];

        let report = SeedService::load_electives(&db, &entries).await.unwrap();
        assert_eq!(report.created, 0);
        assert_eq!(report.existing, 0);
        assert_eq!(report.skipped.len(), 1);
    }

    #[tokio::test]
    async fn test_load_counts_existing_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![elective::Model {
                id: 1,
                area: None,
                course_code: "EECO-003".to_string(),
                course_name: "Game Theory".to_string(),
                instructor_id: None,
                credits: None,
            }]])
            .into_connection();

        let entries = vec![ElectiveEntry {
            course: "Game Theory".to_string(),
            code: "EECO-003".to_string(),
            faculty: None,
            area: None,
            credits: None,
        }];

        let report = SeedService::load_electives(&db, &entries).await.unwrap();
        assert_eq!(report.created, 0);
        assert_eq!(report.existing, 1);
    }
}
