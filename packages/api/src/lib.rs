//! HTTP front end for the kodeks structural parser.
//!
//! Accepts a plain text legal code as a multipart upload or a raw body and
//! answers with the parsed records, SQL statements and CSV tables as JSON,
//! or with the per-level spreadsheet workbook.

pub mod config;
pub mod error;
pub mod handlers;
pub mod state;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use config::AppConfig;
pub use error::ApiError;
pub use state::AppState;

pub fn app(state: AppState) -> Router {
    let body_limit = state.config.body_limit();

    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .route("/api/parse", post(handlers::parse_upload))
        .route("/api/parse/text", post(handlers::parse_text))
        .route("/api/parse/xlsx", post(handlers::parse_workbook))
        .with_state(state)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
