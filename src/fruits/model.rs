//! Fruit records and their identifiers

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::store::StoreError;

/// Opaque identifier assigned by the store when a fruit is inserted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FruitId(Uuid);

impl FruitId {
    /// Mint a fresh identifier
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an identifier taken from a request path
    pub fn parse(raw: &str) -> Result<Self, StoreError> {
        Uuid::parse_str(raw)
            .map(Self)
            .map_err(|_| StoreError::InvalidId(raw.to_string()))
    }
}

impl Default for FruitId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FruitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

/// A stored fruit document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fruit {
    #[serde(rename = "_id")]
    pub id: FruitId,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub color: String,

    /// Defaults to `false` when the stored document has no flag
    #[serde(rename = "isReadyToEat", default)]
    pub is_ready_to_eat: bool,
}

impl Fruit {
    /// Replace every client-settable field with the given document
    pub fn overwrite(&mut self, doc: NewFruit) {
        self.name = doc.name;
        self.color = doc.color;
        self.is_ready_to_eat = doc.is_ready_to_eat;
    }
}

/// Full fruit document without an id, written by insert and update
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewFruit {
    pub name: String,
    pub color: String,
    pub is_ready_to_eat: bool,
}

impl NewFruit {
    pub fn new(name: impl Into<String>, color: impl Into<String>, is_ready_to_eat: bool) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            is_ready_to_eat,
        }
    }

    /// Attach the id the store assigned
    pub fn with_id(self, id: FruitId) -> Fruit {
        Fruit {
            id,
            name: self.name,
            color: self.color,
            is_ready_to_eat: self.is_ready_to_eat,
        }
    }
}
