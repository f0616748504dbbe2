//! Form input for create and update
//!
//! Browsers send a checked checkbox as the literal string `"on"` and omit an
//! unchecked one entirely, so the ready flag arrives as an optional string
//! and is coerced before anything is written.

use serde::Deserialize;

use super::model::NewFruit;

/// Fields a client may set on a fruit
///
/// Any other submitted field (including `_method`) is dropped during
/// deserialization and never reaches the store.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FruitForm {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub color: String,

    #[serde(rename = "isReadyToEat", default)]
    pub is_ready_to_eat: Option<String>,
}

impl FruitForm {
    /// Coerce the ready flag and produce the document to write
    pub fn into_record(self) -> NewFruit {
        NewFruit {
            is_ready_to_eat: coerce_ready_flag(self.is_ready_to_eat.as_deref()),
            name: self.name,
            color: self.color,
        }
    }
}

/// `true` only for the exact checkbox value `"on"`
pub fn coerce_ready_flag(raw: Option<&str>) -> bool {
    matches!(raw, Some("on"))
}
