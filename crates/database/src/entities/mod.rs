pub mod auth_token;
pub mod batch_info;
pub mod elective;
pub mod elective_enrollment;
pub mod elective_offering;
pub mod employment;
pub mod professor;
pub mod social_links;
pub mod study_center;
pub mod study_centre_poc;
pub mod user;
