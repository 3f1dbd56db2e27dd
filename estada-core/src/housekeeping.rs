use std::sync::Arc;
use tracing::info;

use crate::repository::RoomRepository;
use crate::{CleanlinessStatus, CoreError, CoreResult, Room};

/// Room listing and cleanliness updates for the housekeeping staff.
#[derive(Clone)]
pub struct Housekeeping {
    rooms: Arc<dyn RoomRepository>,
}

impl Housekeeping {
    pub fn new(rooms: Arc<dyn RoomRepository>) -> Self {
        Self { rooms }
    }

    pub async fn rooms(&self) -> CoreResult<Vec<Room>> {
        self.rooms.list_rooms().await
    }

    pub async fn update_status(
        &self,
        room_number: &str,
        status: &str,
    ) -> CoreResult<CleanlinessStatus> {
        let status: CleanlinessStatus = status.parse()?;
        let room_number = room_number.trim();

        if !self.rooms.update_cleanliness(room_number, status).await? {
            return Err(CoreError::NotFoundError(format!("Room {} not found.", room_number)));
        }

        info!("Room {} marked {}", room_number, status);
        Ok(status)
    }
}
