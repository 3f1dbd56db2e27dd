use axum::{routing::get, Json, Router};
use axum_extra::extract::cookie::CookieJar;
use serde::Serialize;

use crate::session::{Flash, Session};
use crate::state::AppState;
use crate::theme::current_theme;

#[derive(Debug, Serialize)]
pub struct HomePage {
    pub user_name: String,
    pub user_profile: String,
    pub theme: String,
    pub flashes: Vec<Flash>,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(home))
}

/// GET /
async fn home(session: Session, jar: CookieJar) -> Json<HomePage> {
    let data = session.data().await;
    Json(HomePage {
        user_name: data.user_name.unwrap_or_else(|| "User".to_string()),
        user_profile: data.user_profile.unwrap_or_else(|| "Unknown".to_string()),
        theme: current_theme(&jar),
        flashes: session.take_flashes().await,
    })
}
