//! Save-file shaped record exchanged with the host's persistence layer.
//!
//! The engine only produces and consumes the record. Where and how it is stored is
//! up to the host; JSON helpers are provided for convenience.

use serde::{Deserialize, Serialize};

use crate::api::error::LevelError;

/// Player progress as `(current, maximum)` pairs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveRecord {
    pub name: String,
    pub life: (i32, i32),
    pub energy: (i32, i32),
    /// `(coins, wallet capacity)`.
    pub coins: (u32, u32),
}

impl SaveRecord {
    pub fn from_json(json: &str) -> Result<Self, LevelError> {
        serde_json::from_str(json).map_err(LevelError::Save)
    }

    pub fn to_json(&self) -> Result<String, LevelError> {
        serde_json::to_string(self).map_err(LevelError::Save)
    }
}
