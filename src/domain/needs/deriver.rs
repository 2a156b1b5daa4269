//! Need derivation rule engine.
//!
//! A second fixed, ordered rule table. Each rule tests either membership
//! of an observation text in the SWOT classification or a direct profile
//! predicate, and appends exactly one need with fixed literals. The
//! output order before deduplication is the declaration order.

use std::collections::HashSet;

use crate::domain::catalog::Department;
use crate::domain::profile::{ClientProfile, GrowthTrend, InternationalExposure, MarginLevel};
use crate::domain::swot::{texts, SwotClassification};

use super::need::{DeadlineBucket, ImpactScore, Need, Priority};

/// One derivation rule: a predicate plus the fixed need it emits.
struct NeedRule {
    applies: fn(&ClientProfile, &SwotClassification) -> bool,
    description: &'static str,
    department: Department,
    priority: Priority,
    deadline: DeadlineBucket,
    impact: u8,
    rationale: &'static str,
}

/// The need derivation rule table, in evaluation order.
///
/// Some conditions are backed by a SWOT text, some by raw profile fields,
/// and rule 5 deliberately tests both (the threat text OR the raw RSE
/// flag). That duplication mirrors the advisory playbook and is the
/// compatibility target; do not unify it.
static NEED_RULES: &[NeedRule] = &[
    // From weaknesses
    NeedRule {
        applies: |_, swot| swot.has_weakness(texts::LOW_DIGITAL_MATURITY),
        description: "Cartographie & plan de digitalisation",
        department: Department::Digital,
        priority: Priority::Medium,
        deadline: DeadlineBucket::SixToTwelveMonths,
        impact: 3,
        rationale: "Digitalisation faible détectée",
    },
    NeedRule {
        applies: |_, swot| swot.has_weakness(texts::NO_REPORTING),
        description: "Mise en place de tableaux de bord mensuels",
        department: Department::Gestion,
        priority: Priority::High,
        deadline: DeadlineBucket::Immediate,
        impact: 4,
        rationale: "Absence de pilotage mensuel",
    },
    NeedRule {
        applies: |_, swot| swot.has_weakness(texts::INSUFFICIENT_MARGIN),
        description: "Étude prix de revient & politique de pricing",
        department: Department::EcoStrat,
        priority: Priority::High,
        deadline: DeadlineBucket::Immediate,
        impact: 5,
        rationale: "Marge insuffisante",
    },
    NeedRule {
        applies: |_, swot| swot.has_weakness(texts::STRAINED_CASH),
        description: "Prévisionnel & cash management",
        department: Department::Gestion,
        priority: Priority::High,
        deadline: DeadlineBucket::Immediate,
        impact: 5,
        rationale: "Tension de trésorerie",
    },
    // From threats
    NeedRule {
        applies: |p, swot| swot.has_threat(texts::ENVIRONMENTAL_EXPOSURE) || p.rse_sensitive,
        description: "Diagnostic RSE & plan d'actions",
        department: Department::Rse,
        priority: Priority::Medium,
        deadline: DeadlineBucket::SixToTwelveMonths,
        impact: 3,
        rationale: "Enjeux RSE / environnementaux",
    },
    NeedRule {
        applies: |_, swot| swot.has_threat(texts::MAJOR_CLIENT_DEPENDENCY),
        description: "Plan de diversification commerciale",
        department: Department::EcoStrat,
        priority: Priority::Medium,
        deadline: DeadlineBucket::SixToTwelveMonths,
        impact: 4,
        rationale: "Risque de dépendance client",
    },
    NeedRule {
        applies: |_, swot| swot.has_threat(texts::BTP_COMPLEXITY),
        description: "Mise en place suivi chantiers / DGD",
        department: Department::Btp,
        priority: Priority::Medium,
        deadline: DeadlineBucket::SixToTwelveMonths,
        impact: 3,
        rationale: "Spécificités BTP",
    },
    NeedRule {
        applies: |_, swot| swot.has_threat(texts::MARKETPLACE_VAT),
        description: "Revue TVA (OSS/IOSS) & procédures",
        department: Department::International,
        priority: Priority::High,
        deadline: DeadlineBucket::Immediate,
        impact: 4,
        rationale: "Risque TVA marketplaces",
    },
    // From opportunities (fragment matches)
    NeedRule {
        applies: |_, swot| swot.has_opportunity_containing(texts::PREPARE_TRANSMISSION),
        description: "Bilan retraite & pré-étude de transmission",
        department: Department::Patrimonial,
        priority: Priority::Medium,
        deadline: DeadlineBucket::SixToTwelveMonths,
        impact: 3,
        rationale: "Fenêtre d'opportunité transmission",
    },
    NeedRule {
        applies: |_, swot| swot.has_opportunity_containing("Optimisation patrimoniale"),
        description: "Bilan patrimonial dirigeant",
        department: Department::Patrimonial,
        priority: Priority::Medium,
        deadline: DeadlineBucket::SixToTwelveMonths,
        impact: 3,
        rationale: "Patrimoine dirigeant important",
    },
    NeedRule {
        applies: |_, swot| swot.has_opportunity_containing("Développement export"),
        description: "Diagnostic international (TVA / flux / implantations)",
        department: Department::International,
        priority: Priority::Medium,
        deadline: DeadlineBucket::SixToTwelveMonths,
        impact: 3,
        rationale: "Opportunité export",
    },
    NeedRule {
        applies: |_, swot| swot.has_opportunity_containing("Valorisation via la démarche RSE"),
        description: "Reporting extra-financier simplifié",
        department: Department::Rse,
        priority: Priority::Low,
        deadline: DeadlineBucket::BeyondTwelveMonths,
        impact: 2,
        rationale: "Créer de la valeur via RSE",
    },
    // Social / HR, driven by headcount
    NeedRule {
        applies: |p, _| p.size.has_payroll_obligations() && !p.structured_hr,
        description: "Audit social & mise en conformité (CSE, DUERP...)",
        department: Department::Social,
        priority: Priority::High,
        deadline: DeadlineBucket::Immediate,
        impact: 4,
        rationale: "Obligations sociales renforcées",
    },
    NeedRule {
        applies: |p, _| p.size.has_payroll_obligations() && p.structured_hr,
        description: "Optimisation processus paie/RH",
        department: Department::Social,
        priority: Priority::Medium,
        deadline: DeadlineBucket::SixToTwelveMonths,
        impact: 3,
        rationale: "Effectif significatif",
    },
    // Fiscal, driven by e-commerce/international flows
    NeedRule {
        applies: |p, _| {
            p.marketplace_sales || p.international_exposure != InternationalExposure::None
        },
        description: "Revue fiscale ciblée (TVA, prix de transfert simplifiés)",
        department: Department::Fiscal,
        priority: Priority::Medium,
        deadline: DeadlineBucket::SixToTwelveMonths,
        impact: 3,
        rationale: "Flux e-commerce/internationaux",
    },
    // Banking process, driven by bank count and reporting
    NeedRule {
        applies: |p, _| (p.bank_count > 1 && !p.monthly_reporting) || p.cash_flow_strained,
        description: "Centralisation banques & rapprochements automatiques",
        department: Department::Digital,
        priority: Priority::Medium,
        deadline: DeadlineBucket::SixToTwelveMonths,
        impact: 3,
        rationale: "Multiples banques sans process outillé",
    },
    // Strategy, driven by growth and margin
    NeedRule {
        applies: |p, _| {
            matches!(p.growth, GrowthTrend::Declining | GrowthTrend::Stable)
                && p.margin != MarginLevel::Comfortable
        },
        description: "Diagnostic stratégique (marché/offre/organisation)",
        department: Department::EcoStrat,
        priority: Priority::Medium,
        deadline: DeadlineBucket::SixToTwelveMonths,
        impact: 4,
        rationale: "Performance perfectible",
    },
];

/// Derives the deduplicated, ordered need list for a profile and its SWOT
/// classification. Pure, total, deterministic.
pub fn derive_needs(profile: &ClientProfile, swot: &SwotClassification) -> Vec<Need> {
    let mut needs = Vec::new();
    for rule in NEED_RULES {
        if (rule.applies)(profile, swot) {
            needs.push(Need {
                description: rule.description.to_string(),
                department: rule.department,
                priority: rule.priority,
                deadline: rule.deadline,
                impact: ImpactScore::new(rule.impact),
                rationale: rule.rationale.to_string(),
            });
        }
    }
    dedupe_needs(needs)
}

/// Collapses entries with identical (description, department) pairs,
/// keeping the first occurrence. Stable and idempotent.
pub fn dedupe_needs(needs: Vec<Need>) -> Vec<Need> {
    let mut seen = HashSet::new();
    needs
        .into_iter()
        .filter(|n| seen.insert((n.description.clone(), n.department)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::{DigitalMaturity, Sector, SizeBand};
    use crate::domain::swot::classify;

    fn neutral_profile() -> ClientProfile {
        ClientProfile::new("Client DEMO", Sector::Services)
    }

    fn run(profile: &ClientProfile) -> Vec<Need> {
        derive_needs(profile, &classify(profile))
    }

    fn descriptions(needs: &[Need]) -> Vec<&str> {
        needs.iter().map(|n| n.description.as_str()).collect()
    }

    #[test]
    fn struggling_profile_yields_recovery_needs_in_order() {
        let mut profile = neutral_profile();
        profile.digital = DigitalMaturity::NoIt;
        profile.monthly_reporting = false;
        profile.margin = MarginLevel::Low;
        profile.cash_flow_strained = true;

        let needs = run(&profile);
        let descs = descriptions(&needs);

        // The four weakness-backed needs, in evaluation order.
        assert_eq!(descs[0], "Cartographie & plan de digitalisation");
        assert_eq!(descs[1], "Mise en place de tableaux de bord mensuels");
        assert_eq!(descs[2], "Étude prix de revient & politique de pricing");
        assert_eq!(descs[3], "Prévisionnel & cash management");

        // Pricing study and cash management are both High/Immediate/5.
        for need in &needs[2..4] {
            assert_eq!(need.priority, Priority::High);
            assert_eq!(need.deadline, DeadlineBucket::Immediate);
            assert_eq!(need.impact.value(), 5);
        }

        // Strained cash also triggers the banking-process rule.
        assert!(descs.contains(&"Centralisation banques & rapprochements automatiques"));
    }

    #[test]
    fn hr_audit_fires_once_for_unstructured_midsize() {
        let mut profile = neutral_profile();
        profile.size = SizeBand::FiftyToTwoFortyNine;
        profile.structured_hr = false;

        let needs = run(&profile);
        let social: Vec<&Need> = needs
            .iter()
            .filter(|n| n.department == Department::Social)
            .collect();

        assert_eq!(social.len(), 1);
        let audit = social[0];
        assert_eq!(
            audit.description,
            "Audit social & mise en conformité (CSE, DUERP...)"
        );
        assert_eq!(audit.priority, Priority::High);
        assert_eq!(audit.deadline, DeadlineBucket::Immediate);
        assert_eq!(audit.impact.value(), 4);
    }

    #[test]
    fn structured_hr_gets_process_optimization_instead() {
        let mut profile = neutral_profile();
        profile.size = SizeBand::ElevenToFortyNine;
        profile.structured_hr = true;

        let needs = run(&profile);
        let social: Vec<&Need> = needs
            .iter()
            .filter(|n| n.department == Department::Social)
            .collect();

        assert_eq!(social.len(), 1);
        assert_eq!(social[0].description, "Optimisation processus paie/RH");
        assert_eq!(social[0].priority, Priority::Medium);
    }

    #[test]
    fn btp_profile_yields_one_btp_need() {
        let profile = ClientProfile::new("Maçonnerie Durand", Sector::Btp);

        let needs = run(&profile);
        let btp: Vec<&Need> = needs
            .iter()
            .filter(|n| n.department == Department::Btp)
            .collect();

        assert_eq!(btp.len(), 1);
        assert_eq!(btp[0].description, "Mise en place suivi chantiers / DGD");
        assert_eq!(btp[0].priority, Priority::Medium);
        assert_eq!(btp[0].deadline, DeadlineBucket::SixToTwelveMonths);
        assert_eq!(btp[0].impact.value(), 3);
    }

    #[test]
    fn rse_flag_triggers_rse_diagnostic_without_threat() {
        let mut profile = neutral_profile();
        profile.rse_sensitive = true;

        let needs = run(&profile);
        assert!(descriptions(&needs).contains(&"Diagnostic RSE & plan d'actions"));
        // And the opportunity-backed extra-financial reporting need too.
        assert!(descriptions(&needs).contains(&"Reporting extra-financier simplifié"));
    }

    #[test]
    fn marketplace_sales_trigger_vat_and_fiscal_review() {
        let mut profile = neutral_profile();
        profile.marketplace_sales = true;

        let needs = run(&profile);
        let descs = descriptions(&needs);
        assert!(descs.contains(&"Revue TVA (OSS/IOSS) & procédures"));
        assert!(descs.contains(&"Revue fiscale ciblée (TVA, prix de transfert simplifiés)"));
    }

    #[test]
    fn no_threats_means_no_threat_sourced_needs() {
        let mut profile = neutral_profile();
        profile.monthly_reporting = true;
        profile.growth = GrowthTrend::Growing;

        let swot = classify(&profile);
        assert!(swot.threats.is_empty());

        let needs = derive_needs(&profile, &swot);
        assert!(needs.is_empty());
    }

    #[test]
    fn no_duplicate_description_department_pairs() {
        let mut profile = ClientProfile::new("Client DEMO", Sector::Btp);
        profile.rse_sensitive = true;
        profile.environmental_impact = crate::domain::profile::EnvironmentalImpact::High;
        profile.cash_flow_strained = true;
        profile.marketplace_sales = true;
        profile.size = SizeBand::TwoFiftyPlus;

        let needs = run(&profile);
        let mut seen = HashSet::new();
        for need in &needs {
            assert!(
                seen.insert((need.description.clone(), need.department)),
                "duplicate need: {}",
                need.description
            );
        }
    }

    #[test]
    fn dedupe_keeps_first_occurrence_and_is_idempotent() {
        let make = |rationale: &str| Need {
            description: "Diagnostic RSE & plan d'actions".to_string(),
            department: Department::Rse,
            priority: Priority::Medium,
            deadline: DeadlineBucket::SixToTwelveMonths,
            impact: ImpactScore::new(3),
            rationale: rationale.to_string(),
        };

        let deduped = dedupe_needs(vec![make("first"), make("second")]);
        assert_eq!(deduped.len(), 1);
        assert_eq!(deduped[0].rationale, "first");

        let again = dedupe_needs(deduped.clone());
        assert_eq!(again, deduped);
    }

    #[test]
    fn derive_is_deterministic() {
        let mut profile = neutral_profile();
        profile.cash_flow_strained = true;
        profile.bank_count = 3;

        let swot = classify(&profile);
        assert_eq!(derive_needs(&profile, &swot), derive_needs(&profile, &swot));
    }

    #[test]
    fn every_need_stays_within_vocabularies() {
        let mut profile = ClientProfile::new("Client DEMO", Sector::Ecommerce);
        profile.marketplace_sales = true;
        profile.cash_flow_strained = true;
        profile.significant_owner_wealth = true;

        for need in run(&profile) {
            assert!(Department::ALL.contains(&need.department));
            assert!((1..=5).contains(&need.impact.value()));
        }
    }
}
