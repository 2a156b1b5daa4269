//! Department catalog - the firm's internal service lines.
//!
//! Each department has a short internal key (used in rule tables, contact
//! routing, and the wire format), a display name (used in exports and
//! email bodies), a default contact address, and an indicative offer
//! catalog. The key/display-name duality is owned here; nothing else in
//! the crate duplicates these literals.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Internal service line handling a detected need.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Department {
    Social,
    Fiscal,
    Patrimonial,
    Rse,
    EcoStrat,
    Gestion,
    Digital,
    International,
    Btp,
}

static DISPLAY_NAME_INDEX: Lazy<HashMap<&'static str, Department>> = Lazy::new(|| {
    Department::ALL
        .iter()
        .map(|d| (d.display_name(), *d))
        .collect()
});

impl Department {
    pub const ALL: &'static [Department] = &[
        Department::Social,
        Department::Fiscal,
        Department::Patrimonial,
        Department::Rse,
        Department::EcoStrat,
        Department::Gestion,
        Department::Digital,
        Department::International,
        Department::Btp,
    ];

    /// Short internal key, also the serde wire form.
    pub fn key(&self) -> &'static str {
        match self {
            Department::Social => "social",
            Department::Fiscal => "fiscal",
            Department::Patrimonial => "patrimonial",
            Department::Rse => "rse",
            Department::EcoStrat => "eco_strat",
            Department::Gestion => "gestion",
            Department::Digital => "digital",
            Department::International => "international",
            Department::Btp => "btp",
        }
    }

    /// Display name used in exports and email bodies.
    pub fn display_name(&self) -> &'static str {
        match self {
            Department::Social => "Service Paie & RH",
            Department::Fiscal => "Pôle Fiscal",
            Department::Patrimonial => "Pôle Conseil Patrimonial",
            Department::Rse => "Pôle RSE / CSRD",
            Department::EcoStrat => "Pôle Conseil Éco & Stratégie",
            Department::Gestion => "Pôle Gestion / Contrôle de gestion",
            Department::Digital => "Pôle Digitalisation",
            Department::International => "Pôle International",
            Department::Btp => "Pôle Secteur BTP",
        }
    }

    /// Default contact address, overridable through `RoutingConfig`.
    pub fn default_contact(&self) -> &'static str {
        match self {
            Department::Social => "service-paie@cabinet.com",
            Department::Fiscal => "pole-fiscal@cabinet.com",
            Department::Patrimonial => "conseil-patrimonial@cabinet.com",
            Department::Rse => "rse@cabinet.com",
            Department::EcoStrat => "eco-strategie@cabinet.com",
            Department::Gestion => "controle-gestion@cabinet.com",
            Department::Digital => "digital@cabinet.com",
            Department::International => "international@cabinet.com",
            Department::Btp => "btp@cabinet.com",
        }
    }

    /// Indicative offers per department, for orienting the response.
    /// Not priced here; the tool is diagnostic-centered.
    pub fn offers(&self) -> &'static [&'static str] {
        match self {
            Department::Social => &[
                "Audit social",
                "Paie externalisée",
                "Mise en place SIRH",
                "Procédures RH",
            ],
            Department::Fiscal => &[
                "Revue fiscale",
                "Note TVA spécifique",
                "Sécurisation crédits d'impôt",
            ],
            Department::Patrimonial => &[
                "Bilan patrimonial",
                "Pré-étude Dutreil",
                "Structuration holding/SCI",
            ],
            Department::Rse => &[
                "Diagnostic RSE",
                "Matrice de matérialité",
                "Préparation CSRD (PME)",
            ],
            Department::EcoStrat => &[
                "Diagnostic stratégique",
                "Prix de revient & pricing",
                "Business plan & financement",
                "Croissance externe",
            ],
            Department::Gestion => &[
                "Tableaux de bord",
                "Budget & prévisionnel",
                "Cash management",
            ],
            Department::Digital => &[
                "Cartographie outils",
                "OCR & API banques",
                "Hub facturation/achat",
            ],
            Department::International => &[
                "TVA OSS/IOSS",
                "DEB/DES & douanes",
                "Implantation UE/Export",
            ],
            Department::Btp => &[
                "Suivi chantiers",
                "Retenues de garantie",
                "Situations & DGD",
            ],
        }
    }

    /// Resolves an internal key back to a department.
    pub fn from_key(key: &str) -> Option<Self> {
        Department::ALL.iter().copied().find(|d| d.key() == key)
    }

    /// Reverse lookup on the display name, used when routing edited table
    /// rows back to a contact address.
    pub fn from_display_name(name: &str) -> Option<Self> {
        DISPLAY_NAME_INDEX.get(name).copied()
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_nine_departments() {
        assert_eq!(Department::ALL.len(), 9);
    }

    #[test]
    fn key_round_trips() {
        for dept in Department::ALL {
            assert_eq!(Department::from_key(dept.key()), Some(*dept));
        }
    }

    #[test]
    fn display_name_round_trips() {
        for dept in Department::ALL {
            assert_eq!(Department::from_display_name(dept.display_name()), Some(*dept));
        }
    }

    #[test]
    fn unknown_lookups_return_none() {
        assert_eq!(Department::from_key("juridique"), None);
        assert_eq!(Department::from_display_name("Pôle Inconnu"), None);
    }

    #[test]
    fn serde_wire_form_is_the_key() {
        for dept in Department::ALL {
            let json = serde_json::to_string(dept).unwrap();
            assert_eq!(json, format!("\"{}\"", dept.key()));
            let back: Department = serde_json::from_str(&json).unwrap();
            assert_eq!(back, *dept);
        }
    }

    #[test]
    fn every_department_has_offers_and_contact() {
        for dept in Department::ALL {
            assert!(!dept.offers().is_empty());
            assert!(dept.default_contact().contains('@'));
        }
    }

    #[test]
    fn display_uses_display_name() {
        assert_eq!(
            format!("{}", Department::EcoStrat),
            "Pôle Conseil Éco & Stratégie"
        );
    }
}
