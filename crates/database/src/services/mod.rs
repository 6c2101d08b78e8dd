pub mod centre;
pub mod elective;
pub mod profile;
pub mod seed;
pub mod user;
