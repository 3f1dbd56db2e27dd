use async_trait::async_trait;

use crate::{CleanlinessStatus, CoreResult, NewReservation, Reservation, Room, StayDates, User};

/// Repository trait for the room inventory
#[async_trait]
pub trait RoomRepository: Send + Sync {
    async fn list_rooms(&self) -> CoreResult<Vec<Room>>;

    async fn get_room(&self, number: &str) -> CoreResult<Option<Room>>;

    /// Rooms with no non-cancelled reservation overlapping `stay`.
    async fn available_rooms(&self, stay: &StayDates) -> CoreResult<Vec<Room>>;

    /// Returns false when no room has this number.
    async fn update_cleanliness(
        &self,
        number: &str,
        status: CleanlinessStatus,
    ) -> CoreResult<bool>;
}

/// Repository trait for reservation rows
#[async_trait]
pub trait ReservationRepository: Send + Sync {
    async fn insert_reservation(&self, reservation: &NewReservation) -> CoreResult<i64>;

    /// Newest check-in first.
    async fn list_reservations(&self) -> CoreResult<Vec<Reservation>>;

    async fn list_reservations_for_guest(&self, guest_name: &str) -> CoreResult<Vec<Reservation>>;

    /// Returns false when no row had this id.
    async fn delete_reservation(&self, id: i64) -> CoreResult<bool>;
}

/// Repository trait for staff and guest accounts
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> CoreResult<Option<User>>;
}
