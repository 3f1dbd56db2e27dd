use async_trait::async_trait;
use chrono::NaiveDate;
use estada_core::repository::ReservationRepository;
use estada_core::{CoreError, CoreResult, NewReservation, Reservation, ReservationStatus};
use sqlx::SqlitePool;

use crate::database::map_db_error;

pub struct StoreReservationRepository {
    pool: SqlitePool,
}

impl StoreReservationRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ReservationRow {
    id: i64,
    room_number: String,
    guest_name: String,
    checkin: NaiveDate,
    checkout: NaiveDate,
    status: String,
    total: f64,
}

impl TryFrom<ReservationRow> for Reservation {
    type Error = CoreError;

    fn try_from(row: ReservationRow) -> Result<Self, Self::Error> {
        Ok(Reservation {
            id: row.id,
            room_number: row.room_number,
            guest_name: row.guest_name,
            checkin: row.checkin,
            checkout: row.checkout,
            status: row.status.parse::<ReservationStatus>()?,
            total: row.total,
        })
    }
}

const SELECT_RESERVATION: &str =
    "SELECT id, room_number, guest_name, checkin, checkout, status, total FROM reservations";

#[async_trait]
impl ReservationRepository for StoreReservationRepository {
    async fn insert_reservation(&self, reservation: &NewReservation) -> CoreResult<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO reservations (room_number, guest_name, checkin, checkout, status, total)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&reservation.room_number)
        .bind(&reservation.guest_name)
        .bind(reservation.stay.checkin())
        .bind(reservation.stay.checkout())
        .bind(reservation.status.as_str())
        .bind(reservation.total)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.last_insert_rowid())
    }

    async fn list_reservations(&self) -> CoreResult<Vec<Reservation>> {
        let rows = sqlx::query_as::<_, ReservationRow>(&format!(
            "{} ORDER BY checkin DESC, id DESC",
            SELECT_RESERVATION
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(Reservation::try_from).collect()
    }

    async fn list_reservations_for_guest(&self, guest_name: &str) -> CoreResult<Vec<Reservation>> {
        let rows = sqlx::query_as::<_, ReservationRow>(&format!(
            "{} WHERE guest_name = ? ORDER BY checkin DESC, id DESC",
            SELECT_RESERVATION
        ))
        .bind(guest_name)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(Reservation::try_from).collect()
    }

    async fn delete_reservation(&self, id: i64) -> CoreResult<bool> {
        let result = sqlx::query("DELETE FROM reservations WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}
