use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, warn};

use crate::repository::{ReservationRepository, RoomRepository};
use crate::{
    CoreError, CoreResult, NewReservation, Reservation, ReservationStatus, Room, StayDates,
};

/// Reservation request as submitted by the front desk. Dates are raw
/// `YYYY-MM-DD` strings so format problems surface as `FormatError`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReservationRequest {
    #[serde(default)]
    pub room_number: String,
    #[serde(default)]
    pub guest_name: String,
    #[serde(default)]
    pub checkin: String,
    #[serde(default)]
    pub checkout: String,
}

/// Availability search and reservation lifecycle.
///
/// Creation does not re-check availability: two requests for the same room
/// and overlapping dates both succeed. Callers are expected to run
/// [`ReservationDesk::availability`] first.
#[derive(Clone)]
pub struct ReservationDesk {
    rooms: Arc<dyn RoomRepository>,
    reservations: Arc<dyn ReservationRepository>,
}

impl ReservationDesk {
    pub fn new(
        rooms: Arc<dyn RoomRepository>,
        reservations: Arc<dyn ReservationRepository>,
    ) -> Self {
        Self { rooms, reservations }
    }

    pub async fn availability(&self, checkin: &str, checkout: &str) -> CoreResult<Vec<Room>> {
        let stay = StayDates::parse(checkin, checkout)?;
        self.rooms.available_rooms(&stay).await
    }

    pub async fn create(&self, request: &ReservationRequest) -> CoreResult<Reservation> {
        let room_number = request.room_number.trim();
        let guest_name = request.guest_name.trim();
        if room_number.is_empty() || guest_name.is_empty() {
            return Err(CoreError::ValidationError(
                "Room number and guest name are required.".to_string(),
            ));
        }

        let stay = StayDates::parse(&request.checkin, &request.checkout)?;

        let room = self.rooms.get_room(room_number).await?.ok_or_else(|| {
            CoreError::NotFoundError("Room not found or nightly rate not set.".to_string())
        })?;

        let new = NewReservation {
            room_number: room.number,
            guest_name: guest_name.to_string(),
            stay,
            status: ReservationStatus::Confirmed,
            total: stay.total_for_rate(room.rate),
        };

        let id = self.reservations.insert_reservation(&new).await?;
        info!(
            "Reservation {} created for room {} ({} nights, total {:.2})",
            id,
            new.room_number,
            stay.nights(),
            new.total
        );

        Ok(new.into_reservation(id))
    }

    /// Hard delete. A missing id is reported as `NotFoundError`.
    pub async fn delete(&self, id: i64) -> CoreResult<()> {
        if self.reservations.delete_reservation(id).await? {
            info!("Reservation {} deleted", id);
            Ok(())
        } else {
            warn!("Delete requested for unknown reservation {}", id);
            Err(CoreError::NotFoundError(
                "Reservation not found or could not be deleted.".to_string(),
            ))
        }
    }

    pub async fn list(&self) -> CoreResult<Vec<Reservation>> {
        self.reservations.list_reservations().await
    }

    pub async fn for_guest(&self, guest_name: &str) -> CoreResult<Vec<Reservation>> {
        self.reservations.list_reservations_for_guest(guest_name).await
    }
}
