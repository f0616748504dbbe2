//! # Fruits
//!
//! The single domain entity and the form shape clients submit to create or
//! overwrite it.

mod form;
mod model;

pub use form::{coerce_ready_flag, FruitForm};
pub use model::{Fruit, FruitId, NewFruit};
