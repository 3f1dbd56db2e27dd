use axum::{
    extract::{Request, State},
    http::{header, HeaderValue},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::error::AppError;
use crate::session::SESSION_COOKIE;
use crate::state::AppState;

/// Resumes the session named by the cookie, or hands out an unsaved one, and
/// makes it available to guards and handlers through the request extensions.
/// The cookie is only issued once the session has been stored.
pub async fn session_middleware(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let jar = CookieJar::from_headers(req.headers());

    let resumed = match jar.get(SESSION_COOKIE) {
        Some(cookie) => state.sessions.resolve(cookie.value()).await,
        None => None,
    };
    let session = resumed.unwrap_or_else(|| state.sessions.start());

    req.extensions_mut().insert(session.clone());
    let mut response = next.run(req).await;

    if let Some(token) = state.sessions.issue_token(&session).await? {
        tracing::debug!("Started session {}", session.id());
        let cookie = Cookie::build((SESSION_COOKIE, token))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .build();
        response
            .headers_mut()
            .append(header::SET_COOKIE, HeaderValue::from_str(&cookie.to_string())?);
    }

    Ok(response)
}
