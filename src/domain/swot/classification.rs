//! SWOT classification - four ordered observation sequences.

use serde::{Deserialize, Serialize};

use super::observation::{Observation, SwotCategory};

/// Result of classifying one profile: four ordered sequences of
/// observations, insertion order = rule evaluation order.
///
/// An empty category is a valid state, not an error; the display layer
/// shows a neutral placeholder for it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwotClassification {
    pub strengths: Vec<Observation>,
    pub weaknesses: Vec<Observation>,
    pub opportunities: Vec<Observation>,
    pub threats: Vec<Observation>,
}

impl SwotClassification {
    /// Returns the observations of one category, preserving order.
    pub fn category(&self, category: SwotCategory) -> &[Observation] {
        match category {
            SwotCategory::Strength => &self.strengths,
            SwotCategory::Weakness => &self.weaknesses,
            SwotCategory::Opportunity => &self.opportunities,
            SwotCategory::Threat => &self.threats,
        }
    }

    pub(crate) fn push(&mut self, observation: Observation) {
        match observation.category {
            SwotCategory::Strength => self.strengths.push(observation),
            SwotCategory::Weakness => self.weaknesses.push(observation),
            SwotCategory::Opportunity => self.opportunities.push(observation),
            SwotCategory::Threat => self.threats.push(observation),
        }
    }

    /// Exact-text membership in the weaknesses sequence.
    pub fn has_weakness(&self, text: &str) -> bool {
        self.weaknesses.iter().any(|o| o.text == text)
    }

    /// Exact-text membership in the threats sequence.
    pub fn has_threat(&self, text: &str) -> bool {
        self.threats.iter().any(|o| o.text == text)
    }

    /// Substring membership in the opportunities sequence.
    ///
    /// Opportunity-backed need rules match on fragments rather than whole
    /// texts; kept that way for behavioral compatibility.
    pub fn has_opportunity_containing(&self, fragment: &str) -> bool {
        self.opportunities.iter().any(|o| o.text.contains(fragment))
    }

    /// Total number of observations across categories.
    pub fn observation_count(&self) -> usize {
        self.strengths.len() + self.weaknesses.len() + self.opportunities.len() + self.threats.len()
    }
}
