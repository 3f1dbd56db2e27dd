use estada_core::{Authenticator, Housekeeping, ReservationDesk};
use estada_store::{DbClient, StoreReservationRepository, StoreRoomRepository, StoreUserRepository};
use std::sync::Arc;

use crate::session::SessionStore;

#[derive(Clone)]
pub struct AuthConfig {
    pub session_secret: String,
    pub session_ttl_seconds: u64,
}

#[derive(Clone)]
pub struct AppState {
    pub desk: ReservationDesk,
    pub housekeeping: Housekeeping,
    pub authenticator: Authenticator,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(db: &DbClient, auth: &AuthConfig) -> Self {
        let rooms = Arc::new(StoreRoomRepository::new(db.pool.clone()));
        let reservations = Arc::new(StoreReservationRepository::new(db.pool.clone()));
        let users = Arc::new(StoreUserRepository::new(db.pool.clone()));

        Self {
            desk: ReservationDesk::new(rooms.clone(), reservations),
            housekeeping: Housekeeping::new(rooms),
            authenticator: Authenticator::new(users),
            sessions: SessionStore::new(&auth.session_secret, auth.session_ttl_seconds),
        }
    }
}
