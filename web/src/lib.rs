//! Axum HTTP surface for the Podium event catalog.
//!
//! The imperative shell over `podium-core`: request parsing, response
//! serialization, logging. Handlers are thin: every business rule lives
//! in the core crate, and the server deliberately knows nothing about
//! ticket arithmetic (clients compute post-reservation records through the
//! ledger and submit them whole; see `podium_core::protocol`).
//!
//! # Endpoints
//!
//! - `POST /update`: store an encoded record under a composite name
//! - `GET /fetch?name=...`: retrieve one stored record
//! - `GET /names`: the full catalog as parallel name/record arrays
//! - `GET /health`: liveness probe

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use error::AppError;
pub use middleware::{request_id_layer, REQUEST_ID_HEADER};
pub use routes::build_router;
pub use state::AppState;

/// Result type alias for web handlers.
pub type WebResult<T> = Result<T, AppError>;
