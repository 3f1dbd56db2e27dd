use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Form, Json, Router,
};
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::user_message;
use crate::session::{Flash, FlashCategory, Session};
use crate::state::AppState;
use crate::theme::current_theme;

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginPage {
    pub theme: String,
    pub flashes: Vec<Flash>,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/login", get(login_page).post(login))
}

/// GET /login
async fn login_page(session: Session, jar: CookieJar) -> Json<LoginPage> {
    Json(LoginPage {
        theme: current_theme(&jar),
        flashes: session.take_flashes().await,
    })
}

/// POST /login
async fn login(
    State(state): State<AppState>,
    session: Session,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Response {
    match state.authenticator.authenticate(&form.email, &form.password).await {
        Ok(Some(user)) => {
            session.update(|data| data.log_in(&user)).await;
            info!("User {} logged in as {}", user.id, user.profile_name());
            session
                .flash(
                    FlashCategory::Success,
                    format!("Welcome, {} ({})!", user.name, user.profile_name()),
                )
                .await;
            return Redirect::to("/").into_response();
        }
        Ok(None) => {
            info!("Failed login attempt for {}", form.email);
            session
                .flash(FlashCategory::Danger, "Login failed. Check your email and password.")
                .await;
        }
        Err(e) => {
            session
                .flash(
                    FlashCategory::Danger,
                    user_message(&e, "An unexpected error occurred while logging in."),
                )
                .await;
        }
    }

    login_page(session, jar).await.into_response()
}

/// GET /logout
pub async fn logout(session: Session) -> Redirect {
    session.update(|data| data.log_out()).await;
    session
        .flash(FlashCategory::Info, "You have been logged out successfully.")
        .await;
    Redirect::to("/login")
}
