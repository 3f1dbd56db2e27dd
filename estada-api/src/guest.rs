use axum::{
    extract::{Request, State},
    middleware::{self, Next},
    routing::get,
    Json, Router,
};
use axum_extra::extract::cookie::CookieJar;
use estada_core::Reservation;
use serde::Serialize;

use crate::error::AppError;
use crate::middleware::guard::{require_profiles, GUESTS};
use crate::session::{Flash, Session};
use crate::state::AppState;
use crate::theme::current_theme;

#[derive(Debug, Serialize)]
pub struct GuestReservationsPage {
    pub reservations: Vec<Reservation>,
    pub theme: String,
    pub flashes: Vec<Flash>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/minhas_reservas", get(my_reservations))
        .route_layer(middleware::from_fn(
            |session: Session, req: Request, next: Next| {
                require_profiles(GUESTS, session, req, next)
            },
        ))
}

/// GET /minhas_reservas
///
/// Reservations are matched on the guest name typed at the front desk, which
/// must equal the account's display name.
async fn my_reservations(
    State(state): State<AppState>,
    session: Session,
    jar: CookieJar,
) -> Result<Json<GuestReservationsPage>, AppError> {
    let guest_name = session.data().await.user_name.unwrap_or_default();
    let reservations = state.desk.for_guest(&guest_name).await?;

    Ok(Json(GuestReservationsPage {
        reservations,
        theme: current_theme(&jar),
        flashes: session.take_flashes().await,
    }))
}
