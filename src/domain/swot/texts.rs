//! The closed set of observation texts.
//!
//! These literals are matched verbatim by the need derivation rules, so
//! they live in one place. Changing a string here changes rule matching.

// Strengths
pub const ADVANCED_DIGITAL: &str = "Digitalisation avancée (intégrations possibles)";
pub const MONTHLY_REPORTING: &str = "Reporting financier mensuel déjà en place";
pub const COMFORTABLE_MARGIN: &str = "Marge confortable";
pub const REVENUE_GROWTH: &str = "Croissance du CA";

// Weaknesses
pub const LOW_DIGITAL_MATURITY: &str = "Maturité digitale faible (risque d'erreurs/coûts)";
pub const NO_REPORTING: &str = "Absence de reporting/indicateurs réguliers";
pub const INSUFFICIENT_MARGIN: &str = "Marge insuffisante / prix de revient non maîtrisé";
pub const STRAINED_CASH: &str = "Trésorerie tendue / pas de prévisionnel";

// Opportunities
pub const PREPARE_TRANSMISSION: &str = "Préparer la transmission / retraite dirigeant";
pub const WEALTH_OPTIMIZATION: &str = "Optimisation patrimoniale (holding/SCI/PEA-PME, etc.)";
pub const RSE_VALORIZATION: &str = "Valorisation via la démarche RSE / CSRD adaptée";
pub const EXPORT_DEVELOPMENT: &str = "Développement export / structuration internationale";

// Threats
pub const ENVIRONMENTAL_EXPOSURE: &str = "Exposition réglementaire environnementale élevée";
pub const MAJOR_CLIENT_DEPENDENCY: &str = "Dépendance à un client majeur";
pub const LEGAL_RISKS: &str = "Litiges / risques juridiques non traités";
pub const REINFORCED_SOCIAL_OBLIGATIONS: &str =
    "Obligations sociales renforcées sans structuration RH";
pub const BTP_COMPLEXITY: &str = "Complexité BTP (retenues, situations, DGD)";
pub const MARKETPLACE_VAT: &str = "TVA plateformes / marketplace (OSS/IOSS)";
