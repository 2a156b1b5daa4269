//! Need records and the need derivation rule engine.

mod deriver;
mod need;

pub use deriver::{dedupe_needs, derive_needs};
pub use need::{DeadlineBucket, ImpactScore, Need, Priority, ReviewedNeed};
