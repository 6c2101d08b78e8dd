pub mod centre;
pub mod elective;
pub mod profile;
pub mod user;
