pub mod auth;
pub mod centres;
pub mod electives;
pub mod health;
pub mod profile;
pub mod root;
pub mod users;
