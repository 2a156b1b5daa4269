//! Markdown synthesis of a diagnostic.
//!
//! Narrative form: the SWOT grid grouped by category, then the need table
//! with department, priority, deadline, impact, and rationale inlined.

use chrono::NaiveDate;

use crate::domain::needs::ReviewedNeed;
use crate::domain::swot::{SwotCategory, SwotClassification};

/// Renders the full Markdown synthesis for one diagnostic run.
///
/// Empty SWOT categories render a `(néant)` placeholder and an empty need
/// table renders `(aucun)`; nothing here is an error state.
pub fn render_synthesis(
    client_name: &str,
    swot: &SwotClassification,
    rows: &[ReviewedNeed],
    date: NaiveDate,
) -> String {
    let mut lines: Vec<String> = vec![
        format!("# Diagnostic & besoins — {}", client_name),
        String::new(),
        format!("_Date : {}_", date.format("%Y-%m-%d")),
        String::new(),
        "## SWOT (orienté besoins)".to_string(),
    ];

    for category in SwotCategory::ALL {
        lines.push(format!("### {}", category.label()));
        let observations = swot.category(*category);
        if observations.is_empty() {
            lines.push("- (néant)".to_string());
        } else {
            for obs in observations {
                lines.push(format!("- {}", obs.text));
            }
        }
        lines.push(String::new());
    }

    lines.push("## Besoins & rattachement services".to_string());
    if rows.is_empty() {
        lines.push("- (aucun)".to_string());
    } else {
        for row in rows {
            lines.push(format!(
                "- **{}** → _{}_ — **{}**, {} (impact {}/5)",
                row.description,
                row.department,
                row.priority.label(),
                row.deadline.label(),
                row.impact.value()
            ));
            lines.push(format!("  - Justification : {}", row.rationale));
        }
    }

    lines.join("\n")
}

/// Suggested attachment name for the Markdown synthesis.
pub fn synthesis_filename(client_slug: &str) -> String {
    format!("diagnostic_{}.md", client_slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::Department;
    use crate::domain::needs::{DeadlineBucket, ImpactScore, Need, Priority};
    use crate::domain::swot::SwotClassification;

    fn test_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
    }

    #[test]
    fn empty_diagnostic_renders_placeholders() {
        let md = render_synthesis("Client DEMO", &SwotClassification::default(), &[], test_date());

        assert!(md.starts_with("# Diagnostic & besoins — Client DEMO"));
        assert!(md.contains("_Date : 2025-03-14_"));
        assert!(md.contains("### Forces\n- (néant)"));
        assert!(md.contains("### Menaces\n- (néant)"));
        assert!(md.contains("## Besoins & rattachement services\n- (aucun)"));
    }

    #[test]
    fn categories_render_in_fixed_order() {
        let md = render_synthesis("Client DEMO", &SwotClassification::default(), &[], test_date());

        let forces = md.find("### Forces").unwrap();
        let faiblesses = md.find("### Faiblesses").unwrap();
        let opportunites = md.find("### Opportunités").unwrap();
        let menaces = md.find("### Menaces").unwrap();
        assert!(forces < faiblesses && faiblesses < opportunites && opportunites < menaces);
    }

    #[test]
    fn observations_and_needs_are_inlined() {
        let mut profile = crate::domain::profile::ClientProfile::new(
            "Client DEMO",
            crate::domain::profile::Sector::Services,
        );
        profile.cash_flow_strained = true;
        let swot = crate::domain::swot::classify(&profile);

        let rows = vec![ReviewedNeed::from(Need {
            description: "Prévisionnel & cash management".to_string(),
            department: Department::Gestion,
            priority: Priority::High,
            deadline: DeadlineBucket::Immediate,
            impact: ImpactScore::new(5),
            rationale: "Tension de trésorerie".to_string(),
        })];

        let md = render_synthesis("Client DEMO", &swot, &rows, test_date());
        assert!(md.contains("- Trésorerie tendue / pas de prévisionnel"));
        assert!(md.contains(
            "- **Prévisionnel & cash management** → _Pôle Gestion / Contrôle de gestion_ — \
             **Haute**, Immédiat (≤ 3 mois) (impact 5/5)"
        ));
        assert!(md.contains("  - Justification : Tension de trésorerie"));
    }

    #[test]
    fn filename_uses_client_slug() {
        assert_eq!(
            synthesis_filename("Client_DEMO"),
            "diagnostic_Client_DEMO.md"
        );
    }
}
