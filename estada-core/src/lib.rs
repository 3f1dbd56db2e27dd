pub mod auth;
pub mod desk;
pub mod housekeeping;
#[cfg(test)]
mod memory;
pub mod profile;
pub mod repository;
pub mod reservation;
pub mod room;
pub mod user;

pub use auth::Authenticator;
pub use desk::ReservationDesk;
pub use housekeeping::Housekeeping;
pub use profile::Profile;
pub use reservation::{NewReservation, Reservation, ReservationStatus, StayDates};
pub use room::{CleanlinessStatus, Room};
pub use user::User;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{0}")]
    ValidationError(String),
    #[error("{0}")]
    FormatError(String),
    #[error("{0}")]
    NotFoundError(String),
    #[error("Integrity violation: {0}")]
    IntegrityError(String),
    #[error("Internal service error: {0}")]
    InternalError(String),
}

impl CoreError {
    /// True for failures the user cannot fix by changing their input.
    pub fn is_internal(&self) -> bool {
        matches!(self, CoreError::InternalError(_))
    }
}

pub type CoreResult<T> = Result<T, CoreError>;
