//! fruitstand - a server-rendered CRUD web application for fruit records
//!
//! Pages are rendered on the server and every write redirects back to the
//! fruit list. Records live in a pluggable document store selected by a
//! connection URI at startup.

pub mod cli;
pub mod fruits;
pub mod http_server;
pub mod observability;
pub mod store;
pub mod views;
