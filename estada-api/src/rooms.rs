use axum::{
    extract::{Request, State},
    middleware::{self, Next},
    response::Redirect,
    routing::get,
    Form, Json, Router,
};
use axum_extra::extract::cookie::CookieJar;
use estada_core::Room;
use serde::{Deserialize, Serialize};

use crate::error::{user_message, AppError};
use crate::middleware::guard::{require_profiles, HOUSEKEEPING};
use crate::session::{Flash, FlashCategory, Session};
use crate::state::AppState;
use crate::theme::current_theme;

#[derive(Debug, Deserialize)]
pub struct RoomStatusForm {
    #[serde(default)]
    pub room_number: String,
    #[serde(default)]
    pub cleanliness_status: String,
}

#[derive(Debug, Serialize)]
pub struct RoomsPage {
    pub rooms: Vec<Room>,
    pub theme: String,
    pub flashes: Vec<Flash>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/quartos", get(rooms_page).post(update_room_status))
        .route_layer(middleware::from_fn(
            |session: Session, req: Request, next: Next| {
                require_profiles(HOUSEKEEPING, session, req, next)
            },
        ))
}

/// GET /quartos
async fn rooms_page(
    State(state): State<AppState>,
    session: Session,
    jar: CookieJar,
) -> Result<Json<RoomsPage>, AppError> {
    let rooms = state.housekeeping.rooms().await?;
    Ok(Json(RoomsPage {
        rooms,
        theme: current_theme(&jar),
        flashes: session.take_flashes().await,
    }))
}

/// POST /quartos
async fn update_room_status(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<RoomStatusForm>,
) -> Redirect {
    match state
        .housekeeping
        .update_status(&form.room_number, &form.cleanliness_status)
        .await
    {
        Ok(_) => session.flash(FlashCategory::Success, "Status updated successfully!").await,
        Err(e) => {
            session
                .flash(
                    FlashCategory::Danger,
                    user_message(&e, "Error updating the room status."),
                )
                .await
        }
    }
    Redirect::to("/quartos")
}
