use async_trait::async_trait;
use estada_core::repository::RoomRepository;
use estada_core::{CleanlinessStatus, CoreError, CoreResult, Room, StayDates};
use sqlx::SqlitePool;

use crate::database::map_db_error;

pub struct StoreRoomRepository {
    pool: SqlitePool,
}

impl StoreRoomRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct RoomRow {
    number: String,
    capacity: i64,
    rate: f64,
    cleanliness_status: String,
}

impl TryFrom<RoomRow> for Room {
    type Error = CoreError;

    fn try_from(row: RoomRow) -> Result<Self, Self::Error> {
        let cleanliness_status = row.cleanliness_status.parse::<CleanlinessStatus>().map_err(|_| {
            CoreError::InternalError(format!(
                "Room {} has unknown cleanliness status '{}'",
                row.number, row.cleanliness_status
            ))
        })?;

        Ok(Room {
            number: row.number,
            capacity: row.capacity,
            rate: row.rate,
            cleanliness_status,
        })
    }
}

fn into_rooms(rows: Vec<RoomRow>) -> CoreResult<Vec<Room>> {
    rows.into_iter().map(Room::try_from).collect()
}

#[async_trait]
impl RoomRepository for StoreRoomRepository {
    async fn list_rooms(&self) -> CoreResult<Vec<Room>> {
        let rows = sqlx::query_as::<_, RoomRow>(
            "SELECT number, capacity, rate, cleanliness_status FROM rooms ORDER BY number",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        into_rooms(rows)
    }

    async fn get_room(&self, number: &str) -> CoreResult<Option<Room>> {
        let row = sqlx::query_as::<_, RoomRow>(
            "SELECT number, capacity, rate, cleanliness_status FROM rooms WHERE number = ?",
        )
        .bind(number)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        row.map(Room::try_from).transpose()
    }

    async fn available_rooms(&self, stay: &StayDates) -> CoreResult<Vec<Room>> {
        // existing.checkin < new.checkout AND existing.checkout > new.checkin
        let rows = sqlx::query_as::<_, RoomRow>(
            r#"
            SELECT number, capacity, rate, cleanliness_status FROM rooms
            WHERE number NOT IN (
                SELECT DISTINCT room_number FROM reservations
                WHERE status <> 'Cancelled'
                AND checkin < ?
                AND checkout > ?
            )
            ORDER BY number
            "#,
        )
        .bind(stay.checkout())
        .bind(stay.checkin())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        into_rooms(rows)
    }

    async fn update_cleanliness(
        &self,
        number: &str,
        status: CleanlinessStatus,
    ) -> CoreResult<bool> {
        let result = sqlx::query("UPDATE rooms SET cleanliness_status = ? WHERE number = ?")
            .bind(status.as_str())
            .bind(number)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}
