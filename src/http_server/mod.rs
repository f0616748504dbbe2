//! # HTTP Server
//!
//! Server-rendered pages for browsing and editing fruits.
//!
//! # Endpoints
//!
//! - `GET /` - landing page
//! - `GET /fruits`, `POST /fruits` - list, create
//! - `GET /fruits/new` - creation form
//! - `GET /fruits/:id`, `PUT /fruits/:id`, `DELETE /fruits/:id` - show, update, delete
//! - `GET /fruits/:id/edit` - edit form
//! - `GET /health` - health check
//!
//! PUT and DELETE arrive from browsers as POST plus a method override.

pub mod config;
pub mod errors;
pub mod fruit_routes;
pub mod method_override;
pub mod observability_routes;
pub mod server;

pub use config::ServerConfig;
pub use errors::{AppError, AppResult};
pub use fruit_routes::AppState;
pub use server::HttpServer;
