//! Client profile record and its closed vocabularies.
//!
//! Every categorical attribute of a profile belongs to a fixed vocabulary;
//! the enum types make out-of-vocabulary states unrepresentable. Label
//! parsing (the reverse direction) is a construction-time concern and is
//! the only fallible operation in this module.

mod profile;
mod values;

pub use profile::ClientProfile;
pub use values::{
    ClientDependency, DigitalMaturity, EnvironmentalImpact, GrowthTrend, InternationalExposure,
    MarginLevel, RetirementHorizon, Sector, SizeBand,
};
