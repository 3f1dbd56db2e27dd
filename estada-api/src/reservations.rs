use axum::{
    extract::{Path, Query, Request, State},
    middleware::{self, Next},
    response::Redirect,
    routing::{get, post},
    Form, Json, Router,
};
use axum_extra::extract::cookie::CookieJar;
use chrono::{Duration, Local};
use estada_core::desk::ReservationRequest;
use estada_core::reservation::DATE_FORMAT;
use estada_core::{Reservation, Room};
use serde::{Deserialize, Serialize};

use crate::error::{user_message, AppError};
use crate::middleware::guard::{require_profiles, FRONT_DESK};
use crate::session::{Flash, FlashCategory, Session};
use crate::state::AppState;
use crate::theme::current_theme;

#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    pub checkin: Option<String>,
    pub checkout: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ReservationsPage {
    pub reservations: Vec<Reservation>,
    pub available_rooms: Vec<Room>,
    pub default_checkin: String,
    pub default_checkout: String,
    pub search_checkin: String,
    pub search_checkout: String,
    pub theme: String,
    pub flashes: Vec<Flash>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/reservar", get(reservations_page).post(create_reservation))
        .route("/reservar/delete/{id}", post(delete_reservation))
        .route_layer(middleware::from_fn(
            |session: Session, req: Request, next: Next| {
                require_profiles(FRONT_DESK, session, req, next)
            },
        ))
}

/// GET /reservar
///
/// Lists every reservation and runs the availability search for the
/// requested stay, today to tomorrow when no dates are given.
async fn reservations_page(
    State(state): State<AppState>,
    session: Session,
    jar: CookieJar,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<ReservationsPage>, AppError> {
    let today = Local::now().date_naive();
    let default_checkin = today.format(DATE_FORMAT).to_string();
    let default_checkout = (today + Duration::days(1)).format(DATE_FORMAT).to_string();

    let search_checkin = query.checkin.unwrap_or_else(|| default_checkin.clone());
    let search_checkout = query.checkout.unwrap_or_else(|| default_checkout.clone());

    let mut flashes = session.take_flashes().await;

    let available_rooms = match state.desk.availability(&search_checkin, &search_checkout).await {
        Ok(rooms) => rooms,
        Err(e) => {
            flashes.push(Flash::new(
                FlashCategory::Warning,
                user_message(&e, "Could not check room availability."),
            ));
            Vec::new()
        }
    };

    let reservations = state.desk.list().await?;

    Ok(Json(ReservationsPage {
        reservations,
        available_rooms,
        default_checkin,
        default_checkout,
        search_checkin,
        search_checkout,
        theme: current_theme(&jar),
        flashes,
    }))
}

/// POST /reservar
async fn create_reservation(
    State(state): State<AppState>,
    session: Session,
    Form(request): Form<ReservationRequest>,
) -> Redirect {
    match state.desk.create(&request).await {
        Ok(_) => {
            session
                .flash(FlashCategory::Success, "Reservation created successfully!")
                .await
        }
        Err(e) => {
            session
                .flash(
                    FlashCategory::Danger,
                    user_message(
                        &e,
                        "An unexpected error occurred while processing the reservation.",
                    ),
                )
                .await
        }
    }
    Redirect::to("/reservar")
}

/// POST /reservar/delete/{id}
async fn delete_reservation(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i64>,
) -> Redirect {
    match state.desk.delete(id).await {
        Ok(()) => {
            session
                .flash(FlashCategory::Success, "Reservation deleted successfully.")
                .await
        }
        Err(e) => {
            session
                .flash(
                    FlashCategory::Danger,
                    user_message(
                        &e,
                        "An unexpected error occurred while deleting the reservation.",
                    ),
                )
                .await
        }
    }
    Redirect::to("/reservar")
}
