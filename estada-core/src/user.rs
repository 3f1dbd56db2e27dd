use serde::Serialize;

use crate::Profile;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub profile_id: i64,
}

impl User {
    pub fn profile_name(&self) -> &'static str {
        Profile::name_for_id(self.profile_id)
    }
}
