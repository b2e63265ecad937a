//! certa-server
//!
//! Local HTTP/JSON host for a single review desk.

pub mod config;
pub mod error;
pub mod logging;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{delete, get, post, put};
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        // Catalog
        .route("/diseases", get(routes::diseases::list_diseases))
        .route("/diseases/{id}", get(routes::diseases::get_disease))
        // Live session
        .route("/session", get(routes::session::get_session))
        .route("/session/reset", post(routes::session::reset_session))
        .route("/session/disease", put(routes::session::select_disease))
        .route("/session/disease", delete(routes::session::clear_disease))
        .route(
            "/session/criteria/{id}/toggle",
            post(routes::session::toggle_criterion),
        )
        .route("/session/applicant", put(routes::session::update_applicant))
        .route("/session/notes", put(routes::session::update_notes))
        .route("/session/documents", post(routes::session::attach_document))
        .route(
            "/session/documents/{id}",
            delete(routes::session::remove_document),
        )
        .route("/session/analysis", post(routes::analysis::start_analysis))
        .route(
            "/session/suggestions/apply",
            post(routes::analysis::apply_suggestions),
        )
        .route("/session/submit", post(routes::records::submit))
        // Audit trail
        .route("/records", get(routes::records::list_records))
        .route("/records/{id}", get(routes::records::get_record))
        .layer(axum_mw::from_fn(middleware::log_request))
        .layer(cors)
        .with_state(state)
}
