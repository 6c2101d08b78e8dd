use database::choices;
use database::entities::{elective, elective_enrollment, elective_offering, professor};
use database::services::elective::{CourseRow, EnrollmentStatus, course_label};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct InstructorResponse {
    pub salutation: Option<String>,
    pub name: String,
    pub area: Option<String>,
}

impl From<professor::Model> for InstructorResponse {
    fn from(row: professor::Model) -> Self {
        Self {
            salutation: row.salutation,
            name: row.name,
            area: row.area,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ElectiveResponse {
    pub id: i32,
    pub area: Option<String>,
    pub area_name: Option<String>,
    pub course_code: String,
    pub course_name: String,
    pub credits: Option<f64>,
    pub instructor: Option<InstructorResponse>,
}

impl ElectiveResponse {
    pub fn new(course: elective::Model, instructor: Option<professor::Model>) -> Self {
        Self {
            id: course.id,
            area_name: course
                .area
                .as_deref()
                .and_then(choices::area_label)
                .map(str::to_string),
            area: course.area,
            course_code: course.course_code,
            course_name: course.course_name,
            credits: course.credits,
            instructor: instructor.map(Into::into),
        }
    }
}

/// Listing projection: the course collapses to its label string.
#[derive(Debug, Serialize, ToSchema)]
pub struct OfferingSummary {
    pub id: i32,
    pub course: String,
    pub track: Option<i32>,
    pub section: Option<String>,
}

impl OfferingSummary {
    pub fn new(offering: elective_offering::Model, course: Option<&CourseRow>) -> Self {
        Self {
            id: offering.id,
            course: course
                .map(|(course, instructor)| course_label(course, instructor.as_ref()))
                .unwrap_or_default(),
            track: offering.track,
            section: offering.section,
        }
    }
}

/// Detail projection with the full course and instructor embedded.
#[derive(Debug, Serialize, ToSchema)]
pub struct OfferingDetail {
    pub id: i32,
    pub epgp_batch: i32,
    pub term: i32,
    pub track: Option<i32>,
    pub section: Option<String>,
    pub course: Option<ElectiveResponse>,
}

impl OfferingDetail {
    pub fn new(offering: elective_offering::Model, course: Option<CourseRow>) -> Self {
        Self {
            id: offering.id,
            epgp_batch: offering.epgp_batch,
            term: offering.term,
            track: offering.track,
            section: offering.section,
            course: course.map(|(course, instructor)| ElectiveResponse::new(course, instructor)),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EnrollmentResponse {
    pub id: i32,
    pub elective_offering: OfferingSummary,
}

impl EnrollmentResponse {
    pub fn new(
        enrollment: elective_enrollment::Model,
        offering: elective_offering::Model,
        course: Option<&CourseRow>,
    ) -> Self {
        Self {
            id: enrollment.id,
            elective_offering: OfferingSummary::new(offering, course),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EnrollmentStatusResponse {
    pub user: String,
    pub elective_offering_id: i32,
    pub elective: String,
    pub enrolled: bool,
}

impl From<EnrollmentStatus> for EnrollmentStatusResponse {
    fn from(status: EnrollmentStatus) -> Self {
        Self {
            user: status.user,
            elective_offering_id: status.offering_id,
            elective: status.course_label,
            enrolled: status.enrolled,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn sample_course() -> elective::Model {
        elective::Model {
            id: 10,
            area: Some("IS".to_string()),
            course_code: "EIS-001".to_string(),
            course_name: "Artificial Intelligence for Business".to_string(),
            instructor_id: Some(1),
            credits: Some(1.0),
        }
    }

    fn sample_instructor() -> professor::Model {
        professor::Model {
            id: 1,
            salutation: Some("Prof.".to_string()),
            name: "M P Sebastian".to_string(),
            area: Some("IS".to_string()),
            email: None,
            phone: None,
        }
    }

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

    #[test]
    fn test_offering_summary_label_includes_instructor() {
        let row: CourseRow = (sample_course(), Some(sample_instructor()));
        let summary = OfferingSummary::new(sample_offering(5), Some(&row));
        assert_eq!(
            summary.course,
            "EIS-001 - Artificial Intelligence for Business - Prof. M P Sebastian"
        );
    }

    #[test]
    fn test_elective_response_resolves_area_name() {
        let response = ElectiveResponse::new(sample_course(), Some(sample_instructor()));
        assert_eq!(response.area.as_deref(), Some("IS"));
        assert_eq!(response.area_name.as_deref(), Some("Information Systems"));
    }
}
