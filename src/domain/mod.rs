//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (validation errors)
//! - `profile` - Client profile record and its closed vocabularies
//! - `swot` - SWOT observations and the classification rule engine
//! - `needs` - Need records and the need derivation rule engine
//! - `catalog` - Internal department reference data (keys, labels, contacts, offers)

pub mod catalog;
pub mod foundation;
pub mod needs;
pub mod profile;
pub mod swot;
