//! In-memory repositories used by the service tests.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::repository::{ReservationRepository, RoomRepository, UserRepository};
use crate::{
    CleanlinessStatus, CoreResult, NewReservation, Reservation, ReservationStatus, Room,
    StayDates, User,
};

#[derive(Default)]
pub struct MemoryStore {
    rooms: Mutex<Vec<Room>>,
    reservations: Mutex<Vec<Reservation>>,
    users: Mutex<Vec<User>>,
}

impl MemoryStore {
    pub fn with_default_rooms() -> Self {
        let room = |number: &str, capacity, rate, status| Room {
            number: number.to_string(),
            capacity,
            rate,
            cleanliness_status: status,
        };
        let store = Self::default();
        *store.rooms.lock().unwrap() = vec![
            room("101", 2, 150.0, CleanlinessStatus::Clean),
            room("102", 2, 150.0, CleanlinessStatus::Clean),
            room("201", 4, 250.0, CleanlinessStatus::Clean),
            room("305", 1, 100.0, CleanlinessStatus::Dirty),
        ];
        store
    }

    pub fn add_user(&self, user: User) {
        self.users.lock().unwrap().push(user);
    }

    pub fn reservation_count(&self) -> usize {
        self.reservations.lock().unwrap().len()
    }
}

#[async_trait]
impl RoomRepository for MemoryStore {
    async fn list_rooms(&self) -> CoreResult<Vec<Room>> {
        Ok(self.rooms.lock().unwrap().clone())
    }

    async fn get_room(&self, number: &str) -> CoreResult<Option<Room>> {
        Ok(self.rooms.lock().unwrap().iter().find(|r| r.number == number).cloned())
    }

    async fn available_rooms(&self, stay: &StayDates) -> CoreResult<Vec<Room>> {
        let reservations = self.reservations.lock().unwrap();
        let booked: Vec<&str> = reservations
            .iter()
            .filter(|r| r.status != ReservationStatus::Cancelled)
            .filter(|r| {
                StayDates::new(r.checkin, r.checkout)
                    .map(|s| s.overlaps(stay))
                    .unwrap_or(false)
            })
            .map(|r| r.room_number.as_str())
            .collect();

        Ok(self
            .rooms
            .lock()
            .unwrap()
            .iter()
            .filter(|room| !booked.contains(&room.number.as_str()))
            .cloned()
            .collect())
    }

    async fn update_cleanliness(
        &self,
        number: &str,
        status: CleanlinessStatus,
    ) -> CoreResult<bool> {
        let mut rooms = self.rooms.lock().unwrap();
        match rooms.iter_mut().find(|r| r.number == number) {
            Some(room) => {
                room.cleanliness_status = status;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[async_trait]
impl ReservationRepository for MemoryStore {
    async fn insert_reservation(&self, reservation: &NewReservation) -> CoreResult<i64> {
        let mut reservations = self.reservations.lock().unwrap();
        let id = reservations.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        reservations.push(reservation.clone().into_reservation(id));
        Ok(id)
    }

    async fn list_reservations(&self) -> CoreResult<Vec<Reservation>> {
        let mut all = self.reservations.lock().unwrap().clone();
        all.sort_by(|a, b| b.checkin.cmp(&a.checkin));
        Ok(all)
    }

    async fn list_reservations_for_guest(&self, guest_name: &str) -> CoreResult<Vec<Reservation>> {
        let mut mine: Vec<Reservation> = self
            .reservations
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.guest_name == guest_name)
            .cloned()
            .collect();
        mine.sort_by(|a, b| b.checkin.cmp(&a.checkin));
        Ok(mine)
    }

    async fn delete_reservation(&self, id: i64) -> CoreResult<bool> {
        let mut reservations = self.reservations.lock().unwrap();
        let before = reservations.len();
        reservations.retain(|r| r.id != id);
        Ok(reservations.len() < before)
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_by_email(&self, email: &str) -> CoreResult<Option<User>> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.email == email).cloned())
    }
}
