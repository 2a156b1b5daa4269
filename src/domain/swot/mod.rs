//! SWOT observations and the classification rule engine.
//!
//! The classifier is a fixed, ordered list of independent predicate rules
//! over the client profile. Evaluation order is an observable contract:
//! both the need deriver and the display layer rely on first-seen order.

mod classification;
mod classifier;
mod observation;
pub mod texts;

pub use classification::SwotClassification;
pub use classifier::classify;
pub use observation::{Observation, SwotCategory};
