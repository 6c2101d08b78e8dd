use crate::doc::ApiDoc;
use crate::middleware::auth::{authenticate, require_admin};
use crate::state::AppState;
use crate::utils::shutdown::shutdown_signal;
use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post, put},
};
use database::db::create_connection;
use log::info;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod doc;
mod dtos;
mod error;
mod middleware;
mod routes;
mod state;
mod utils;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    let db = create_connection()
        .await
        .expect("Failed to connect to the database");
    let state = AppState { db };

    // Admin-only surface, gated twice: token auth below, staff flag here.
    let admin_routes = Router::new()
        .route("/users", get(routes::users::list_users))
        .route("/users/create", post(routes::users::create_user))
        .route(
            "/users/{id}/update",
            put(routes::users::update_user_admin).patch(routes::users::update_user_admin),
        )
        .route_layer(axum_middleware::from_fn(require_admin));

    let authed_routes = Router::new()
        .route("/user", get(routes::users::userinfo))
        .route("/user/change-pwd", put(routes::users::change_password))
        .route(
            "/user/batch",
            get(routes::profile::own_batch_info).post(routes::profile::upsert_own_batch_info),
        )
        .route(
            "/user/social",
            get(routes::profile::own_social_links).post(routes::profile::upsert_own_social_links),
        )
        .route(
            "/user/employment",
            get(routes::profile::own_employment).post(routes::profile::add_employment),
        )
        .route(
            "/users/update",
            put(routes::users::update_user_self).patch(routes::users::update_user_self),
        )
        .route("/users/{id}", get(routes::users::user_detail))
        .route("/users/{id}/batch", get(routes::profile::batch_info_by_id))
        .route(
            "/users/{id}/social",
            get(routes::profile::social_links_by_id),
        )
        .route(
            "/users/{id}/employment",
            get(routes::profile::employment_by_id),
        )
        .route(
            "/users/{id}/electives",
            get(routes::electives::enrollments_by_user),
        )
        .route("/electives", get(routes::electives::offerings))
        .route("/electives/all", get(routes::electives::catalog))
        .route("/electives/enrolled", get(routes::electives::own_enrollments))
        .route(
            "/electives/enroll/{id}",
            get(routes::electives::enrollment_status).post(routes::electives::enroll),
        )
        .route("/electives/{id}", get(routes::electives::offering_detail))
        .route("/electives/{id}/takers", get(routes::electives::takers))
        .route("/centres", get(routes::centres::list_centres))
        .route("/centres/{id}/poc", get(routes::centres::list_poc))
        .merge(admin_routes)
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            authenticate,
        ));

    let app = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/", get(routes::root::root))
        .route("/health", get(routes::health::health))
        .route("/auth/token", post(routes::auth::obtain_token))
        .merge(authed_routes)
        .layer(ServiceBuilder::new().layer(CompressionLayer::new()))
        .with_state(state);

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("Failed to bind listener");
    info!("Running axum on http://localhost:{port}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}
