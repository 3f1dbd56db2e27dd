use axum::{extract::FromRequestParts, http::request::Parts};
use chrono::{DateTime, Duration, Utc};
use estada_core::User;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use uuid::Uuid;

use crate::error::AppError;

pub const SESSION_COOKIE: &str = "estada_session";

// ============================================================================
// Flash messages
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashCategory {
    Success,
    Danger,
    Warning,
    Info,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Flash {
    pub category: FlashCategory,
    pub message: String,
}

impl Flash {
    pub fn new(category: FlashCategory, message: impl Into<String>) -> Self {
        Self { category, message: message.into() }
    }
}

// ============================================================================
// Session data
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct SessionData {
    pub logged_in: bool,
    pub user_id: Option<i64>,
    pub user_email: Option<String>,
    pub user_name: Option<String>,
    pub user_profile: Option<String>,
    pub profile_id: Option<i64>,
    pub flashes: Vec<Flash>,
}

impl SessionData {
    pub fn log_in(&mut self, user: &User) {
        self.logged_in = true;
        self.user_id = Some(user.id);
        self.user_email = Some(user.email.clone());
        self.user_name = Some(user.name.clone());
        self.user_profile = Some(user.profile_name().to_string());
        self.profile_id = Some(user.profile_id);
    }

    /// Drops the user fields. Pending flashes survive so the logout notice
    /// reaches the login page.
    pub fn log_out(&mut self) {
        self.logged_in = false;
        self.user_id = None;
        self.user_email = None;
        self.user_name = None;
        self.user_profile = None;
        self.profile_id = None;
    }
}

// ============================================================================
// Store
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
struct SessionClaims {
    sid: String,
    exp: usize,
}

struct SessionEntry {
    data: SessionData,
    expires_at: DateTime<Utc>,
}

/// Server-side sessions keyed by id. The browser only holds a signed token
/// naming its session.
#[derive(Clone)]
pub struct SessionStore {
    entries: Arc<RwLock<HashMap<Uuid, SessionEntry>>>,
    secret: Arc<String>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(secret: &str, ttl_seconds: u64) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            secret: Arc::new(secret.to_owned()),
            ttl: Duration::seconds(ttl_seconds as i64),
        }
    }

    /// Hands out a session that is not stored until something is written to it.
    pub fn start(&self) -> Session {
        Session {
            id: Uuid::new_v4(),
            store: self.clone(),
            saved_here: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Looks up the session named by a cookie token. Tampered, unknown and
    /// expired sessions all resolve to `None`.
    pub async fn resolve(&self, token: &str) -> Option<Session> {
        let id = self.verify(token)?;
        let entries = self.entries.read().await;
        let entry = entries.get(&id)?;
        if entry.expires_at <= Utc::now() {
            return None;
        }
        Some(Session {
            id,
            store: self.clone(),
            saved_here: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Cookie token for a session first stored during this request, if any.
    pub async fn issue_token(
        &self,
        session: &Session,
    ) -> Result<Option<String>, jsonwebtoken::errors::Error> {
        if !session.saved_here.load(Ordering::Acquire) {
            return Ok(None);
        }
        let expires_at = match self.entries.read().await.get(&session.id) {
            Some(entry) => entry.expires_at,
            None => return Ok(None),
        };
        self.sign(session.id, expires_at).map(Some)
    }

    /// Drops expired entries and returns how many were removed.
    pub async fn sweep_expired(&self) -> usize {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        let now = Utc::now();
        entries.retain(|_, entry| entry.expires_at > now);
        before - entries.len()
    }

    /// Runs [`SessionStore::sweep_expired`] every `period` on the runtime.
    pub fn spawn_sweeper(&self, period: std::time::Duration) -> JoinHandle<()> {
        let store = self.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                let removed = store.sweep_expired().await;
                if removed > 0 {
                    tracing::debug!("Swept {} expired sessions", removed);
                }
            }
        })
    }

    pub async fn session_count(&self) -> usize {
        self.entries.read().await.len()
    }

    fn sign(
        &self,
        id: Uuid,
        expires_at: DateTime<Utc>,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let claims = SessionClaims {
            sid: id.to_string(),
            exp: expires_at.timestamp() as usize,
        };
        encode(&Header::default(), &claims, &EncodingKey::from_secret(self.secret.as_bytes()))
    }

    fn verify(&self, token: &str) -> Option<Uuid> {
        let token_data = decode::<SessionClaims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .ok()?;
        Uuid::parse_str(&token_data.claims.sid).ok()
    }
}

// ============================================================================
// Per-request handle
// ============================================================================

/// Handle to the current request's session, inserted by the session layer.
#[derive(Clone)]
pub struct Session {
    id: Uuid,
    store: SessionStore,
    saved_here: Arc<AtomicBool>,
}

impl Session {
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Snapshot of the session. An unsaved or evicted session reads as empty.
    pub async fn data(&self) -> SessionData {
        let entries = self.store.entries.read().await;
        entries.get(&self.id).map(|e| e.data.clone()).unwrap_or_default()
    }

    /// Applies `f` to the session data, storing the session first if needed.
    pub async fn update<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut SessionData) -> R,
    {
        let mut entries = self.store.entries.write().await;
        let entry = entries.entry(self.id).or_insert_with(|| {
            self.saved_here.store(true, Ordering::Release);
            SessionEntry {
                data: SessionData::default(),
                expires_at: Utc::now() + self.store.ttl,
            }
        });
        f(&mut entry.data)
    }

    pub async fn flash(&self, category: FlashCategory, message: impl Into<String>) {
        let flash = Flash::new(category, message);
        self.update(|data| data.flashes.push(flash)).await;
    }

    /// Removes and returns the pending flashes without storing an unsaved session.
    pub async fn take_flashes(&self) -> Vec<Flash> {
        let mut entries = self.store.entries.write().await;
        entries
            .get_mut(&self.id)
            .map(|e| std::mem::take(&mut e.data.flashes))
            .unwrap_or_default()
    }
}

impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Session>()
            .cloned()
            .ok_or_else(|| {
                AppError::InternalServerError("Session layer is not installed".to_string())
            })
    }
}
