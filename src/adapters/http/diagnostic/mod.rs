//! HTTP adapter for the diagnostic endpoints.

mod dto;
mod handlers;
mod routes;

pub use handlers::DiagnosticAppState;
pub use routes::diagnostic_router;
