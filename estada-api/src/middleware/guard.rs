use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use estada_core::Profile;

use crate::session::{FlashCategory, Session, SessionData};

pub const FRONT_DESK: &[Profile] = &[Profile::Administrator, Profile::Receptionist];
pub const HOUSEKEEPING: &[Profile] = &[Profile::Housekeeper];
pub const GUESTS: &[Profile] = &[Profile::Guest];

pub fn is_logged_in(data: &SessionData) -> bool {
    data.logged_in
}

pub fn profile_allowed(data: &SessionData, allowed: &[Profile]) -> bool {
    data.profile_id
        .is_some_and(|id| allowed.iter().any(|profile| profile.id() == id))
}

// ============================================================================
// Login Guard
// ============================================================================

pub async fn require_login(session: Session, req: Request, next: Next) -> Response {
    if is_logged_in(&session.data().await) {
        return next.run(req).await;
    }

    session
        .flash(FlashCategory::Warning, "You need to be logged in to access this page.")
        .await;
    Redirect::to("/login").into_response()
}

// ============================================================================
// Profile Guard
// ============================================================================

/// Lets the request through only when the session's profile is in `allowed`.
/// Layered per route group with `middleware::from_fn`.
pub async fn require_profiles(
    allowed: &'static [Profile],
    session: Session,
    req: Request,
    next: Next,
) -> Response {
    let data = session.data().await;
    if profile_allowed(&data, allowed) {
        return next.run(req).await;
    }

    tracing::info!(
        "Access denied to {} for profile {:?}",
        req.uri().path(),
        data.profile_id
    );
    session
        .flash(
            FlashCategory::Danger,
            "Access denied. Your profile does not have permission for this action.",
        )
        .await;
    Redirect::to("/").into_response()
}
