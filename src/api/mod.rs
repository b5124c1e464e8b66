//! HTTP transport for the screening engine.
//!
//! Routes are nested under `/api/`. The router is composable:
//! `api_router()` returns a `Router` that can be mounted on any axum
//! server instance, and `start_server_on()` runs it on its own task.

pub mod endpoints;
pub mod error;
pub mod middleware;
pub mod router;
pub mod server;
pub mod store;
pub mod types;

pub use router::api_router;
pub use server::{start_server_on, ApiServer, ApiSession, ServerError};
pub use store::ScreeningLog;
pub use types::{ApiContext, ScreeningRecord, ScreeningReport};
