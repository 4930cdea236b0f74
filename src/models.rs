//! Frontend Models
//!
//! Data structures shared by the store, the renderer and local storage.

use serde::{Deserialize, Serialize};

/// A food entry. Serialized as `{"id","name","calories"}` in local storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub name: String,
    pub calories: i64,
}

impl Item {
    pub fn new(id: u32, name: impl Into<String>, calories: i64) -> Self {
        Self {
            id,
            name: name.into(),
            calories,
        }
    }
}

/// Raw form-field values, exactly as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemInput {
    pub name: String,
    pub calories: String,
}

impl ItemInput {
    pub fn new(name: impl Into<String>, calories: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            calories: calories.into(),
        }
    }

    /// Both fields filled in
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.calories.is_empty()
    }
}
