use async_trait::async_trait;
use estada_core::repository::UserRepository;
use estada_core::{CoreResult, User};
use sqlx::SqlitePool;

use crate::database::map_db_error;

pub struct StoreUserRepository {
    pool: SqlitePool,
}

impl StoreUserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    name: String,
    email: String,
    password_hash: String,
    profile_id: i64,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            name: row.name,
            email: row.email,
            password_hash: row.password_hash,
            profile_id: row.profile_id,
        }
    }
}

#[async_trait]
impl UserRepository for StoreUserRepository {
    async fn find_by_email(&self, email: &str) -> CoreResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT u.id, u.name, u.email, u.password_hash, u.profile_id
            FROM users u JOIN profiles p ON u.profile_id = p.id
            WHERE u.email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(row.map(User::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::seeded_db;

    #[tokio::test]
    async fn test_find_seeded_users() {
        let db = seeded_db().await;
        let repo = StoreUserRepository::new(db.pool.clone());

        let admin = repo.find_by_email("admin@hotel.com").await.unwrap().unwrap();
        assert_eq!(admin.profile_id, 1);
        assert_eq!(admin.profile_name(), "Administrator");
        assert!(admin.password_hash.starts_with("$2"));

        let housekeeper = repo.find_by_email("housekeeper@hotel.com").await.unwrap().unwrap();
        assert_eq!(housekeeper.profile_id, 3);

        assert!(repo.find_by_email("ghost@hotel.com").await.unwrap().is_none());
    }
}
