//! Application layer - use case handlers composing domain operations.

pub mod handlers;
