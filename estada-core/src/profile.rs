use serde::{Deserialize, Serialize};

/// User category gating route access. Ids match the `profiles` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Profile {
    Administrator,
    Receptionist,
    Housekeeper,
    Guest,
}

impl Profile {
    pub const ALL: [Profile; 4] = [
        Profile::Administrator,
        Profile::Receptionist,
        Profile::Housekeeper,
        Profile::Guest,
    ];

    pub fn id(self) -> i64 {
        match self {
            Profile::Administrator => 1,
            Profile::Receptionist => 2,
            Profile::Housekeeper => 3,
            Profile::Guest => 4,
        }
    }

    pub fn from_id(id: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.id() == id)
    }

    pub fn name(self) -> &'static str {
        match self {
            Profile::Administrator => "Administrator",
            Profile::Receptionist => "Receptionist",
            Profile::Housekeeper => "Housekeeper",
            Profile::Guest => "Guest",
        }
    }

    /// Display name for a raw profile id, `"Unknown"` when the id is not mapped.
    pub fn name_for_id(id: i64) -> &'static str {
        Self::from_id(id).map(Profile::name).unwrap_or("Unknown")
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
