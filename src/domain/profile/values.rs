//! Closed vocabularies for the categorical profile attributes.
//!
//! Wire form (serde) is `snake_case`; `label()` returns the French display
//! string used in exports and email drafts.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Business sector of the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sector {
    Btp,
    Commerce,
    Services,
    Industrie,
    Agricole,
    ProfessionsLiberales,
    Ecommerce,
    Sante,
    TechSaas,
    Autre,
}

impl Sector {
    pub const ALL: &'static [Sector] = &[
        Sector::Btp,
        Sector::Commerce,
        Sector::Services,
        Sector::Industrie,
        Sector::Agricole,
        Sector::ProfessionsLiberales,
        Sector::Ecommerce,
        Sector::Sante,
        Sector::TechSaas,
        Sector::Autre,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Sector::Btp => "BTP",
            Sector::Commerce => "Commerce",
            Sector::Services => "Services",
            Sector::Industrie => "Industrie",
            Sector::Agricole => "Agricole",
            Sector::ProfessionsLiberales => "Professions libérales",
            Sector::Ecommerce => "E-commerce",
            Sector::Sante => "Santé",
            Sector::TechSaas => "Tech/SaaS",
            Sector::Autre => "Autre",
        }
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Headcount band, ordered from solo to large.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeBand {
    Solo,
    OneToTen,
    ElevenToFortyNine,
    FiftyToTwoFortyNine,
    TwoFiftyPlus,
}

impl SizeBand {
    pub fn label(&self) -> &'static str {
        match self {
            SizeBand::Solo => "0 salarié",
            SizeBand::OneToTen => "1-10",
            SizeBand::ElevenToFortyNine => "11-49",
            SizeBand::FiftyToTwoFortyNine => "50-249",
            SizeBand::TwoFiftyPlus => "250+",
        }
    }

    /// Bands from 11 employees upward carry the reinforced social
    /// obligations tested by the HR rules (CSE, DUERP...).
    pub fn has_payroll_obligations(&self) -> bool {
        *self >= SizeBand::ElevenToFortyNine
    }
}

impl fmt::Display for SizeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Digital maturity of the client's tooling, ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DigitalMaturity {
    NoIt,
    Basic,
    Advanced,
}

impl DigitalMaturity {
    pub fn label(&self) -> &'static str {
        match self {
            DigitalMaturity::NoIt => "Pas informatique",
            DigitalMaturity::Basic => "Informatique rudimentaire",
            DigitalMaturity::Advanced => "Informatique avancée",
        }
    }
}

impl fmt::Display for DigitalMaturity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Environmental footprint of the activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvironmentalImpact {
    Low,
    Medium,
    High,
}

impl EnvironmentalImpact {
    pub fn label(&self) -> &'static str {
        match self {
            EnvironmentalImpact::Low => "Faible/Non",
            EnvironmentalImpact::Medium => "Moyenne",
            EnvironmentalImpact::High => "Importante",
        }
    }
}

impl fmt::Display for EnvironmentalImpact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Exposure to cross-border flows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InternationalExposure {
    None,
    Occasional,
    Structured,
}

impl InternationalExposure {
    pub fn label(&self) -> &'static str {
        match self {
            InternationalExposure::None => "Aucune",
            InternationalExposure::Occasional => "Occasionnelle",
            InternationalExposure::Structured => "Régulière/Structurée",
        }
    }
}

impl fmt::Display for InternationalExposure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Share of revenue carried by the largest client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientDependency {
    Low,
    Medium,
    High,
}

impl ClientDependency {
    pub fn label(&self) -> &'static str {
        match self {
            ClientDependency::Low => "Faible (<20%)",
            ClientDependency::Medium => "Moyenne (20-40%)",
            ClientDependency::High => "Forte (>40%)",
        }
    }
}

impl fmt::Display for ClientDependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Revenue trend over the recent period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrowthTrend {
    Declining,
    Stable,
    Growing,
}

impl GrowthTrend {
    pub fn label(&self) -> &'static str {
        match self {
            GrowthTrend::Declining => "En baisse",
            GrowthTrend::Stable => "Stable",
            GrowthTrend::Growing => "En croissance",
        }
    }
}

impl fmt::Display for GrowthTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Margin level relative to the sector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarginLevel {
    Low,
    Adequate,
    Comfortable,
}

impl MarginLevel {
    pub fn label(&self) -> &'static str {
        match self {
            MarginLevel::Low => "Faible",
            MarginLevel::Adequate => "Correcte",
            MarginLevel::Comfortable => "Confortable",
        }
    }
}

impl fmt::Display for MarginLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Time left before the owner's planned retirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RetirementHorizon {
    Distant,
    WithinFiveYears,
    UnderTwoYears,
}

impl RetirementHorizon {
    pub fn label(&self) -> &'static str {
        match self {
            RetirementHorizon::Distant => "Loin (> 5 ans)",
            RetirementHorizon::WithinFiveYears => "À 5 ans",
            RetirementHorizon::UnderTwoYears => "< 2 ans",
        }
    }

    /// Transmission becomes an opportunity once retirement is five years
    /// out or closer.
    pub fn is_near(&self) -> bool {
        matches!(
            self,
            RetirementHorizon::WithinFiveYears | RetirementHorizon::UnderTwoYears
        )
    }
}

impl fmt::Display for RetirementHorizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
