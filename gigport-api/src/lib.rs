use axum::{http::Method, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod auth;
pub mod base_info;
pub mod error;
pub mod middleware;
pub mod offers;
pub mod orders;
pub mod profiles;
pub mod reviews;
pub mod state;
pub mod uploads;

pub use state::AppState;

pub fn app(state: AppState) -> Router {
    // CORS Middleware
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
            axum::http::header::USER_AGENT,
        ]);

    Router::new()
        .merge(auth::routes())
        .merge(profiles::routes())
        .merge(offers::routes())
        .merge(orders::routes())
        .merge(reviews::routes())
        .merge(base_info::routes())
        .merge(uploads::routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
