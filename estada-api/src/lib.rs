use axum::{
    middleware::{from_fn, from_fn_with_state},
    routing::get,
    Router,
};
use tower_http::trace::TraceLayer;

pub mod auth;
pub mod error;
pub mod guest;
pub mod home;
pub mod middleware;
pub mod reservations;
pub mod rooms;
pub mod session;
pub mod state;
pub mod theme;

pub use state::{AppState, AuthConfig};

pub fn app(state: AppState) -> Router {
    // Profile guards sit on each route group; the login guard wraps them all.
    let protected = Router::new()
        .route("/logout", get(auth::logout))
        .merge(home::routes())
        .merge(theme::routes())
        .merge(reservations::routes())
        .merge(rooms::routes())
        .merge(guest::routes())
        .route_layer(from_fn(middleware::require_login));

    Router::new()
        .merge(auth::routes())
        .merge(protected)
        .layer(from_fn_with_state(state.clone(), middleware::session_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
