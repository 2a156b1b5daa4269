//! The immutable client profile record, input of one diagnostic run.

use serde::{Deserialize, Serialize};

use super::values::{
    ClientDependency, DigitalMaturity, EnvironmentalImpact, GrowthTrend, InternationalExposure,
    MarginLevel, RetirementHorizon, Sector, SizeBand,
};

/// Complete client profile for one diagnostic run.
///
/// All fields are populated at construction; the rule engines never see a
/// partial profile. Profiles are snapshots: the diagnostic is re-run from
/// scratch whenever the profile changes, and nothing is mutated inside the
/// core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientProfile {
    /// Client or file name.
    pub name: String,
    pub sector: Sector,
    pub size: SizeBand,
    pub digital: DigitalMaturity,
    pub environmental_impact: EnvironmentalImpact,
    /// Client has expressed RSE/CSRD sensitivity.
    pub rse_sensitive: bool,
    /// Managers present / structured HR function.
    pub structured_hr: bool,
    pub international_exposure: InternationalExposure,
    pub client_dependency: ClientDependency,
    pub growth: GrowthTrend,
    pub margin: MarginLevel,
    pub cash_flow_strained: bool,
    pub monthly_reporting: bool,
    /// Number of active bank relationships.
    pub bank_count: u8,
    pub retirement_horizon: RetirementHorizon,
    pub succession_planned: bool,
    pub significant_owner_wealth: bool,
    /// Construction-sector specifics (retainage, progress billing, DGD).
    pub btp_specific: bool,
    /// Sells through e-commerce marketplaces.
    pub marketplace_sales: bool,
    pub legal_risk: bool,
    /// Free-form notes, never consulted by the rules.
    #[serde(default)]
    pub notes: String,
}

impl ClientProfile {
    /// Creates a profile with the neutral defaults of the intake form.
    ///
    /// `btp_specific` defaults to true for construction-sector clients, so
    /// a bare BTP profile already triggers the sector-specific rules.
    pub fn new(name: impl Into<String>, sector: Sector) -> Self {
        Self {
            name: name.into(),
            sector,
            size: SizeBand::OneToTen,
            digital: DigitalMaturity::Basic,
            environmental_impact: EnvironmentalImpact::Low,
            rse_sensitive: false,
            structured_hr: false,
            international_exposure: InternationalExposure::None,
            client_dependency: ClientDependency::Low,
            growth: GrowthTrend::Stable,
            margin: MarginLevel::Adequate,
            cash_flow_strained: false,
            monthly_reporting: false,
            bank_count: 1,
            retirement_horizon: RetirementHorizon::Distant,
            succession_planned: false,
            significant_owner_wealth: false,
            btp_specific: sector == Sector::Btp,
            marketplace_sales: false,
            legal_risk: false,
            notes: String::new(),
        }
    }

    /// File-name-safe form of the client name (spaces become underscores),
    /// used for export attachment names.
    pub fn file_slug(&self) -> String {
        self.name.replace(' ', "_")
    }
}
