use crate::routes::{auth, centres, electives, health, profile, root, users};
use utoipa::{
    Modify, OpenApi,
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.as_mut().unwrap();
        components.add_security_scheme(
            "token",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("Token")
                    .build(),
            ),
        );
    }
}

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        root::root,
        health::health,
        auth::obtain_token,
        users::list_users,
        users::create_user,
        users::userinfo,
        users::user_detail,
        users::update_user_self,
        users::update_user_admin,
        users::change_password,
        profile::own_batch_info,
        profile::upsert_own_batch_info,
        profile::batch_info_by_id,
        profile::own_social_links,
        profile::upsert_own_social_links,
        profile::social_links_by_id,
        profile::own_employment,
        profile::add_employment,
        profile::employment_by_id,
        electives::catalog,
        electives::offerings,
        electives::offering_detail,
        electives::takers,
        electives::own_enrollments,
        electives::enrollments_by_user,
        electives::enrollment_status,
        electives::enroll,
        centres::list_centres,
        centres::list_poc
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Token exchange"),
        (name = "Users", description = "Accounts and identity"),
        (name = "Profile", description = "Batch info, social links and employment"),
        (name = "Electives", description = "Catalog, offerings and enrollments"),
        (name = "Centres", description = "Study centres and contacts"),
    ),
    info(
        title = "EPGP Student API",
        version = "1.0.0",
        description = "Student information backend for the EPGP programme",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;
