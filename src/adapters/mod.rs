//! Adapters - serialization formats and the HTTP surface.

pub mod export;
pub mod http;
