//! Email draft rendering.
//!
//! Drafts are local artifacts (`.eml` files), never transmitted. The
//! subject and body are fixed templates built from structured fields.

use crate::domain::needs::ReviewedNeed;

/// A draft email routed to one department contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailDraft {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl EmailDraft {
    /// Builds the draft for one need row.
    pub fn for_need(to: impl Into<String>, client_name: &str, row: &ReviewedNeed) -> Self {
        let subject = format!(
            "[DIAG] {} — {} ({}, {})",
            client_name,
            row.description,
            row.priority.label(),
            row.deadline.label()
        );
        let body = [
            format!("Service concerné : {}", row.department),
            format!("Client : {}", client_name),
            format!("Besoin : {}", row.description),
            format!(
                "Priorité : {} | Échéance : {} | Impact : {}/5",
                row.priority.label(),
                row.deadline.label(),
                row.impact.value()
            ),
            format!("Justification : {}", row.rationale),
            String::new(),
            "Merci de revenir vers le chargé de dossier pour planifier la prise en charge."
                .to_string(),
        ]
        .join("\n");

        Self {
            to: to.into(),
            subject,
            body,
        }
    }

    /// Renders the draft as a minimal `.eml` document.
    pub fn to_eml(&self, sender: &str) -> String {
        format!(
            "From: {}\nTo: {}\nSubject: {}\nMIME-Version: 1.0\n\
             Content-Type: text/plain; charset=UTF-8\n\n{}\n",
            sender, self.to, self.subject, self.body
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::Department;
    use crate::domain::needs::{DeadlineBucket, ImpactScore, Need, Priority};

    fn sample_row() -> ReviewedNeed {
        ReviewedNeed::from(Need {
            description: "Revue TVA (OSS/IOSS) & procédures".to_string(),
            department: Department::International,
            priority: Priority::High,
            deadline: DeadlineBucket::Immediate,
            impact: ImpactScore::new(4),
            rationale: "Risque TVA marketplaces".to_string(),
        })
    }

    #[test]
    fn subject_follows_diag_template() {
        let draft = EmailDraft::for_need("international@cabinet.com", "Client DEMO", &sample_row());
        assert_eq!(
            draft.subject,
            "[DIAG] Client DEMO — Revue TVA (OSS/IOSS) & procédures (Haute, Immédiat (≤ 3 mois))"
        );
    }

    #[test]
    fn body_carries_all_structured_fields() {
        let draft = EmailDraft::for_need("international@cabinet.com", "Client DEMO", &sample_row());
        assert!(draft.body.contains("Service concerné : Pôle International"));
        assert!(draft.body.contains("Client : Client DEMO"));
        assert!(draft.body.contains("Besoin : Revue TVA (OSS/IOSS) & procédures"));
        assert!(draft
            .body
            .contains("Priorité : Haute | Échéance : Immédiat (≤ 3 mois) | Impact : 4/5"));
        assert!(draft.body.contains("Justification : Risque TVA marketplaces"));
        assert!(draft
            .body
            .ends_with("Merci de revenir vers le chargé de dossier pour planifier la prise en charge."));
    }

    #[test]
    fn eml_has_headers_then_blank_line_then_body() {
        let draft = EmailDraft::for_need("international@cabinet.com", "Client DEMO", &sample_row());
        let eml = draft.to_eml("diagnostic@cabinet.com");

        assert!(eml.starts_with("From: diagnostic@cabinet.com\nTo: international@cabinet.com\n"));
        assert!(eml.contains("MIME-Version: 1.0\nContent-Type: text/plain; charset=UTF-8\n\n"));
        assert!(eml.ends_with("la prise en charge.\n"));
    }
}
