use estada_core::auth::hash_password;
use estada_core::{CleanlinessStatus, Profile};
use sqlx::SqlitePool;
use tracing::info;

use crate::app_config::SeedConfig;

struct SeedUser {
    name: &'static str,
    email: &'static str,
    password: &'static str,
    profile: Profile,
}

const USERS: [SeedUser; 4] = [
    SeedUser {
        name: "Admin Hotel",
        email: "admin@hotel.com",
        password: "admin123",
        profile: Profile::Administrator,
    },
    SeedUser {
        name: "Reception",
        email: "receptionist@hotel.com",
        password: "receptionist123",
        profile: Profile::Receptionist,
    },
    SeedUser {
        name: "Housekeeper",
        email: "housekeeper@hotel.com",
        password: "housekeeper123",
        profile: Profile::Housekeeper,
    },
    SeedUser {
        name: "Guest",
        email: "guest@hotel.com",
        password: "guest123",
        profile: Profile::Guest,
    },
];

const ROOMS: [(&str, i64, f64, CleanlinessStatus); 4] = [
    ("101", 2, 150.00, CleanlinessStatus::Clean),
    ("102", 2, 150.00, CleanlinessStatus::Clean),
    ("201", 4, 250.00, CleanlinessStatus::Clean),
    ("305", 1, 100.00, CleanlinessStatus::Dirty),
];

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("database error while seeding: {0}")]
    Database(#[from] sqlx::Error),
    #[error("could not hash seed password: {0}")]
    Hash(#[from] bcrypt::BcryptError),
}

/// Inserts profiles, users and rooms. Rows that already exist are left alone,
/// so running this on every start is safe.
pub async fn seed(pool: &SqlitePool, config: &SeedConfig) -> Result<(), SeedError> {
    if !config.enabled {
        info!("Seeding disabled");
        return Ok(());
    }

    for profile in Profile::ALL {
        sqlx::query("INSERT OR IGNORE INTO profiles (id, name) VALUES (?, ?)")
            .bind(profile.id())
            .bind(profile.name())
            .execute(pool)
            .await?;
    }

    for user in &USERS {
        let exists: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = ?")
            .bind(user.email)
            .fetch_one(pool)
            .await?;
        if exists > 0 {
            continue;
        }

        let password_hash = hash_password(user.password, config.bcrypt_cost)?;
        sqlx::query(
            "INSERT INTO users (name, email, password_hash, profile_id) VALUES (?, ?, ?, ?)",
        )
        .bind(user.name)
        .bind(user.email)
        .bind(password_hash)
        .bind(user.profile.id())
        .execute(pool)
        .await?;
        info!("Seeded user {} ({})", user.email, user.profile);
    }

    for (number, capacity, rate, status) in ROOMS {
        sqlx::query(
            r#"
            INSERT OR IGNORE INTO rooms (number, capacity, rate, cleanliness_status)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(number)
        .bind(capacity)
        .bind(rate)
        .bind(status.as_str())
        .execute(pool)
        .await?;
    }

    Ok(())
}
