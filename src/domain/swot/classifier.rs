//! SWOT classification rule engine.
//!
//! A fixed, ordered table of (predicate, category, text) rules evaluated
//! top-to-bottom. Rules are independent: no rule disables another, none
//! fires more than once per run, and a profile satisfying zero rules in a
//! category simply yields an empty sequence.

use crate::domain::profile::{
    ClientDependency, ClientProfile, DigitalMaturity, EnvironmentalImpact, GrowthTrend,
    InternationalExposure, MarginLevel, Sector,
};

use super::classification::SwotClassification;
use super::observation::{Observation, SwotCategory};
use super::texts;

/// One classification rule: an independent predicate over profile fields.
struct ClassificationRule {
    category: SwotCategory,
    text: &'static str,
    applies: fn(&ClientProfile) -> bool,
}

/// The classification rule table.
///
/// Declaration order is the contract: strengths, weaknesses,
/// opportunities, threats, each block in its fixed evaluation order.
static CLASSIFICATION_RULES: &[ClassificationRule] = &[
    // Strengths
    ClassificationRule {
        category: SwotCategory::Strength,
        text: texts::ADVANCED_DIGITAL,
        applies: |p| p.digital == DigitalMaturity::Advanced,
    },
    ClassificationRule {
        category: SwotCategory::Strength,
        text: texts::MONTHLY_REPORTING,
        applies: |p| p.monthly_reporting,
    },
    ClassificationRule {
        category: SwotCategory::Strength,
        text: texts::COMFORTABLE_MARGIN,
        applies: |p| p.margin == MarginLevel::Comfortable,
    },
    ClassificationRule {
        category: SwotCategory::Strength,
        text: texts::REVENUE_GROWTH,
        applies: |p| p.growth == GrowthTrend::Growing,
    },
    // Weaknesses
    ClassificationRule {
        category: SwotCategory::Weakness,
        text: texts::LOW_DIGITAL_MATURITY,
        applies: |p| p.digital == DigitalMaturity::NoIt,
    },
    ClassificationRule {
        category: SwotCategory::Weakness,
        text: texts::NO_REPORTING,
        applies: |p| !p.monthly_reporting,
    },
    ClassificationRule {
        category: SwotCategory::Weakness,
        text: texts::INSUFFICIENT_MARGIN,
        applies: |p| p.margin == MarginLevel::Low,
    },
    ClassificationRule {
        category: SwotCategory::Weakness,
        text: texts::STRAINED_CASH,
        applies: |p| p.cash_flow_strained,
    },
    // Opportunities
    ClassificationRule {
        category: SwotCategory::Opportunity,
        text: texts::PREPARE_TRANSMISSION,
        applies: |p| p.retirement_horizon.is_near(),
    },
    ClassificationRule {
        category: SwotCategory::Opportunity,
        text: texts::WEALTH_OPTIMIZATION,
        applies: |p| p.significant_owner_wealth,
    },
    ClassificationRule {
        category: SwotCategory::Opportunity,
        text: texts::RSE_VALORIZATION,
        applies: |p| p.rse_sensitive,
    },
    ClassificationRule {
        category: SwotCategory::Opportunity,
        text: texts::EXPORT_DEVELOPMENT,
        applies: |p| p.international_exposure != InternationalExposure::None,
    },
    // Threats
    ClassificationRule {
        category: SwotCategory::Threat,
        text: texts::ENVIRONMENTAL_EXPOSURE,
        applies: |p| p.environmental_impact == EnvironmentalImpact::High,
    },
    // Only the strong-dependency tier is a threat; the medium tier is a
    // deliberate materiality cutoff.
    ClassificationRule {
        category: SwotCategory::Threat,
        text: texts::MAJOR_CLIENT_DEPENDENCY,
        applies: |p| p.client_dependency == ClientDependency::High,
    },
    ClassificationRule {
        category: SwotCategory::Threat,
        text: texts::LEGAL_RISKS,
        applies: |p| p.legal_risk,
    },
    ClassificationRule {
        category: SwotCategory::Threat,
        text: texts::REINFORCED_SOCIAL_OBLIGATIONS,
        applies: |p| p.size.has_payroll_obligations() && !p.structured_hr,
    },
    ClassificationRule {
        category: SwotCategory::Threat,
        text: texts::BTP_COMPLEXITY,
        applies: |p| p.sector == Sector::Btp || p.btp_specific,
    },
    ClassificationRule {
        category: SwotCategory::Threat,
        text: texts::MARKETPLACE_VAT,
        applies: |p| p.marketplace_sales,
    },
];

/// Derives the SWOT classification of a profile.
///
/// Pure, total, and deterministic: identical profiles always produce
/// identical classifications in identical order.
pub fn classify(profile: &ClientProfile) -> SwotClassification {
    let mut swot = SwotClassification::default();
    for rule in CLASSIFICATION_RULES {
        if (rule.applies)(profile) {
            swot.push(Observation::new(rule.category, rule.text));
        }
    }
    swot
}
