use axum::{
    extract::Path,
    http::{header, HeaderMap},
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar};

use crate::session::{FlashCategory, Session};
use crate::state::AppState;

pub const THEME_COOKIE: &str = "theme";
pub const DEFAULT_THEME: &str = "light";
const THEME_MAX_AGE_DAYS: i64 = 30;

pub fn routes() -> Router<AppState> {
    Router::new().route("/set_theme/{theme}", get(set_theme))
}

pub fn current_theme(jar: &CookieJar) -> String {
    jar.get(THEME_COOKIE)
        .map(|c| c.value().to_owned())
        .unwrap_or_else(|| DEFAULT_THEME.to_owned())
}

/// Theme names end up verbatim in a cookie value.
fn is_valid_theme(theme: &str) -> bool {
    !theme.is_empty()
        && theme.len() <= 32
        && theme.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// GET /set_theme/{theme}
async fn set_theme(
    session: Session,
    jar: CookieJar,
    headers: HeaderMap,
    Path(theme): Path<String>,
) -> Response {
    let target = headers
        .get(header::REFERER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("/")
        .to_owned();

    if !is_valid_theme(&theme) {
        session.flash(FlashCategory::Warning, "Unknown theme.").await;
        return Redirect::to(&target).into_response();
    }

    let cookie = Cookie::build((THEME_COOKIE, theme))
        .path("/")
        .max_age(time::Duration::days(THEME_MAX_AGE_DAYS))
        .build();

    (jar.add(cookie), Redirect::to(&target)).into_response()
}
