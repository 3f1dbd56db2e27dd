pub mod guard;
pub mod session;

pub use guard::{require_login, require_profiles};
pub use session::session_middleware;
