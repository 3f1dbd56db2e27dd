use bcrypt::{hash, verify};
use std::sync::Arc;
use tracing::warn;

use crate::repository::UserRepository;
use crate::{CoreResult, User};

pub use bcrypt::DEFAULT_COST;

pub fn hash_password(password: &str, cost: u32) -> Result<String, bcrypt::BcryptError> {
    hash(password, cost)
}

pub fn verify_password(password: &str, hash: &str) -> Result<bool, bcrypt::BcryptError> {
    verify(password, hash)
}

/// Email/password login against the user repository.
#[derive(Clone)]
pub struct Authenticator {
    users: Arc<dyn UserRepository>,
}

impl Authenticator {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// `Ok(None)` covers both an unknown email and a wrong password.
    pub async fn authenticate(&self, email: &str, password: &str) -> CoreResult<Option<User>> {
        let Some(user) = self.users.find_by_email(email.trim()).await? else {
            return Ok(None);
        };

        match verify_password(password, &user.password_hash) {
            Ok(true) => Ok(Some(user)),
            Ok(false) => Ok(None),
            Err(e) => {
                warn!("Password check for user {} failed: {}", user.id, e);
                Ok(None)
            }
        }
    }
}
