//! SWOT observation - a tagged diagnostic fact.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four SWOT categories, in display and evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwotCategory {
    Strength,
    Weakness,
    Opportunity,
    Threat,
}

impl SwotCategory {
    pub const ALL: &'static [SwotCategory] = &[
        SwotCategory::Strength,
        SwotCategory::Weakness,
        SwotCategory::Opportunity,
        SwotCategory::Threat,
    ];

    /// French display label used in the Markdown synthesis.
    pub fn label(&self) -> &'static str {
        match self {
            SwotCategory::Strength => "Forces",
            SwotCategory::Weakness => "Faiblesses",
            SwotCategory::Opportunity => "Opportunités",
            SwotCategory::Threat => "Menaces",
        }
    }
}

impl fmt::Display for SwotCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A single tagged observation derived from the profile.
///
/// The text is drawn from the closed set in [`super::texts`]; observations
/// carry no reference back to the profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    pub category: SwotCategory,
    pub text: String,
}

impl Observation {
    pub fn new(category: SwotCategory, text: impl Into<String>) -> Self {
        Self {
            category,
            text: text.into(),
        }
    }
}
