use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::CoreError;

/// Housekeeping state of a room. Independent of any reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CleanlinessStatus {
    Clean,
    Dirty,
    Cleaning,
}

impl CleanlinessStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            CleanlinessStatus::Clean => "Clean",
            CleanlinessStatus::Dirty => "Dirty",
            CleanlinessStatus::Cleaning => "Cleaning",
        }
    }
}

impl std::fmt::Display for CleanlinessStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CleanlinessStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "clean" => Ok(CleanlinessStatus::Clean),
            "dirty" => Ok(CleanlinessStatus::Dirty),
            "cleaning" => Ok(CleanlinessStatus::Cleaning),
            other => Err(CoreError::ValidationError(format!(
                "Unknown cleanliness status: '{}'.",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub number: String,
    pub capacity: i64,
    pub rate: f64,
    pub cleanliness_status: CleanlinessStatus,
}
