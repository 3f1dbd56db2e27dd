pub mod app_config;
pub mod database;
pub mod reservation_repo;
pub mod room_repo;
pub mod seed;
pub mod user_repo;

pub use database::DbClient;
pub use reservation_repo::StoreReservationRepository;
pub use room_repo::StoreRoomRepository;
pub use user_repo::StoreUserRepository;

#[cfg(test)]
pub(crate) mod test_support {
    use crate::app_config::SeedConfig;
    use crate::DbClient;

    pub fn test_seed_config() -> SeedConfig {
        SeedConfig { enabled: true, bcrypt_cost: 4 }
    }

    pub async fn seeded_db() -> DbClient {
        let db = DbClient::in_memory().await.expect("in-memory database");
        db.migrate().await.expect("migrations");
        crate::seed::seed(&db.pool, &test_seed_config()).await.expect("seed");
        db
    }
}
