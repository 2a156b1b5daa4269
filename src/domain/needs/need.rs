//! Need - a derived, department-routed action item.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::catalog::Department;
use crate::domain::foundation::ValidationError;

/// Priority attached to a need.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "Haute",
            Priority::Medium => "Moyenne",
            Priority::Low => "Basse",
        }
    }

    /// Parses the French display label back into a priority.
    pub fn from_label(label: &str) -> Result<Self, ValidationError> {
        match label {
            "Haute" => Ok(Priority::High),
            "Moyenne" => Ok(Priority::Medium),
            "Basse" => Ok(Priority::Low),
            other => Err(ValidationError::unknown_label("priorite", other)),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Deadline bucket for taking a need in charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeadlineBucket {
    Immediate,
    SixToTwelveMonths,
    BeyondTwelveMonths,
}

impl DeadlineBucket {
    pub fn label(&self) -> &'static str {
        match self {
            DeadlineBucket::Immediate => "Immédiat (≤ 3 mois)",
            DeadlineBucket::SixToTwelveMonths => "6-12 mois",
            DeadlineBucket::BeyondTwelveMonths => "> 12 mois",
        }
    }

    /// Parses the French display label back into a bucket.
    pub fn from_label(label: &str) -> Result<Self, ValidationError> {
        match label {
            "Immédiat (≤ 3 mois)" => Ok(DeadlineBucket::Immediate),
            "6-12 mois" => Ok(DeadlineBucket::SixToTwelveMonths),
            "> 12 mois" => Ok(DeadlineBucket::BeyondTwelveMonths),
            other => Err(ValidationError::unknown_label("echeance", other)),
        }
    }
}

impl fmt::Display for DeadlineBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Impact score on a 1-5 scale.
///
/// Deserialization enforces the bounds, so out-of-range scores are
/// rejected at every wire boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ImpactScore(u8);

impl ImpactScore {
    pub const MIN: Self = Self(1);
    pub const MAX: Self = Self(5);

    /// Creates an ImpactScore, clamping to the 1-5 range.
    pub fn new(value: u8) -> Self {
        Self(value.clamp(1, 5))
    }

    /// Creates an ImpactScore, returning an error if out of range.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if !(1..=5).contains(&value) {
            return Err(ValidationError::out_of_range("impact", 1, 5, value as i32));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for ImpactScore {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<ImpactScore> for u8 {
    fn from(score: ImpactScore) -> Self {
        score.0
    }
}

impl fmt::Display for ImpactScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/5", self.0)
    }
}

/// A derived need: what to do, which department handles it, and how
/// urgent it is. Needs are produced by the rule engine, never authored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Need {
    pub description: String,
    pub department: Department,
    pub priority: Priority,
    pub deadline: DeadlineBucket,
    pub impact: ImpactScore,
    pub rationale: String,
}

/// One row of the editable need table handed to the export and
/// notification layers.
///
/// The department travels as its display name here: downstream edits are
/// free-form, and contact routing does a reverse lookup with a fallback
/// address for names it no longer recognizes. The `send` flag is added by
/// the editing layer and defaults to true; the core never produces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewedNeed {
    pub description: String,
    pub department: String,
    pub priority: Priority,
    pub deadline: DeadlineBucket,
    pub impact: ImpactScore,
    pub rationale: String,
    pub send: bool,
}

impl From<Need> for ReviewedNeed {
    fn from(need: Need) -> Self {
        Self {
            description: need.description,
            department: need.department.display_name().to_string(),
            priority: need.priority,
            deadline: need.deadline,
            impact: need.impact,
            rationale: need.rationale,
            send: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_labels_round_trip() {
        for priority in [Priority::High, Priority::Medium, Priority::Low] {
            assert_eq!(Priority::from_label(priority.label()), Ok(priority));
        }
    }

    #[test]
    fn priority_rejects_unknown_label() {
        assert!(Priority::from_label("Urgente").is_err());
    }

    #[test]
    fn deadline_labels_round_trip() {
        for deadline in [
            DeadlineBucket::Immediate,
            DeadlineBucket::SixToTwelveMonths,
            DeadlineBucket::BeyondTwelveMonths,
        ] {
            assert_eq!(DeadlineBucket::from_label(deadline.label()), Ok(deadline));
        }
    }

    #[test]
    fn deadline_rejects_unknown_label() {
        assert!(DeadlineBucket::from_label("3-6 mois").is_err());
    }

    #[test]
    fn impact_new_clamps_to_range() {
        assert_eq!(ImpactScore::new(0).value(), 1);
        assert_eq!(ImpactScore::new(3).value(), 3);
        assert_eq!(ImpactScore::new(9).value(), 5);
    }

    #[test]
    fn impact_try_new_rejects_out_of_range() {
        assert!(ImpactScore::try_new(0).is_err());
        assert!(ImpactScore::try_new(6).is_err());
        assert_eq!(ImpactScore::try_new(5).unwrap(), ImpactScore::MAX);
    }

    #[test]
    fn impact_displays_over_five() {
        assert_eq!(format!("{}", ImpactScore::new(4)), "4/5");
    }

    #[test]
    fn reviewed_need_resolves_display_name_and_defaults_send() {
        let need = Need {
            description: "Prévisionnel & cash management".to_string(),
            department: Department::Gestion,
            priority: Priority::High,
            deadline: DeadlineBucket::Immediate,
            impact: ImpactScore::new(5),
            rationale: "Tension de trésorerie".to_string(),
        };

        let row = ReviewedNeed::from(need);
        assert_eq!(row.department, "Pôle Gestion / Contrôle de gestion");
        assert!(row.send);
    }

    #[test]
    fn need_serializes_department_as_key() {
        let need = Need {
            description: "Revue fiscale ciblée (TVA, prix de transfert simplifiés)".to_string(),
            department: Department::Fiscal,
            priority: Priority::Medium,
            deadline: DeadlineBucket::SixToTwelveMonths,
            impact: ImpactScore::new(3),
            rationale: "Flux e-commerce/internationaux".to_string(),
        };

        let json = serde_json::to_string(&need).unwrap();
        assert!(json.contains("\"department\":\"fiscal\""));
        assert!(json.contains("\"impact\":3"));
    }
}
