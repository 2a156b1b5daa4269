//! HTTP DTOs (Data Transfer Objects) for diagnostic endpoints.
//!
//! These types define the JSON request/response structure for the
//! diagnostic API. They serve as the boundary between HTTP and the
//! application layer.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::Department;
use crate::domain::needs::{DeadlineBucket, ImpactScore, Need, Priority, ReviewedNeed};
use crate::domain::profile::ClientProfile;
use crate::domain::swot::SwotClassification;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to export the reviewed need table.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportRequest {
    /// The profile the table was derived from.
    pub profile: ClientProfile,
    /// The reviewed rows, possibly edited.
    pub rows: Vec<ReviewedNeed>,
}

/// Request to generate the email draft bundle.
#[derive(Debug, Clone, Deserialize)]
pub struct EmailRequest {
    /// Client name used in subjects and entry names.
    pub client: String,
    /// The reviewed rows; only those with `send == true` become drafts.
    pub rows: Vec<ReviewedNeed>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Response for a diagnostic run.
#[derive(Debug, Clone, Serialize)]
pub struct DiagnosticResponse {
    /// The SWOT grid, grouped by category.
    pub swot: SwotClassification,
    /// Derived needs as editable rows, in derivation order.
    pub needs: Vec<NeedView>,
}

/// One derived need as presented to the review table.
#[derive(Debug, Clone, Serialize)]
pub struct NeedView {
    pub description: String,
    /// Stable department key (e.g. "eco_strat").
    pub department: &'static str,
    /// French display name for the table.
    pub department_label: &'static str,
    pub priority: Priority,
    pub deadline: DeadlineBucket,
    pub impact: ImpactScore,
    pub rationale: String,
    /// Pre-checked in the review table.
    pub send: bool,
}

impl From<Need> for NeedView {
    fn from(need: Need) -> Self {
        Self {
            description: need.description,
            department: need.department.key(),
            department_label: need.department.display_name(),
            priority: need.priority,
            deadline: need.deadline,
            impact: need.impact,
            rationale: need.rationale,
            send: true,
        }
    }
}

/// One department of the catalog, with contact and standard offers.
#[derive(Debug, Clone, Serialize)]
pub struct DepartmentView {
    pub key: &'static str,
    pub label: &'static str,
    pub contact: String,
    pub offers: &'static [&'static str],
}

impl DepartmentView {
    pub fn new(department: Department, contact: impl Into<String>) -> Self {
        Self {
            key: department.key(),
            label: department.display_name(),
            contact: contact.into(),
            offers: department.offers(),
        }
    }
}

/// Error response for API errors.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error code.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::Sector;

    #[test]
    fn need_view_exposes_key_and_label() {
        let need = Need {
            description: "Cartographie & plan de digitalisation".to_string(),
            department: Department::Digital,
            priority: Priority::Medium,
            deadline: DeadlineBucket::SixToTwelveMonths,
            impact: ImpactScore::new(3),
            rationale: "Digitalisation faible détectée".to_string(),
        };

        let view = NeedView::from(need);
        assert_eq!(view.department, "digital");
        assert_eq!(view.department_label, "Pôle Digitalisation");
        assert!(view.send);
    }

    #[test]
    fn export_request_deserializes_a_full_payload() {
        let profile = ClientProfile::new("Client DEMO", Sector::Commerce);
        let json = format!(
            r#"{{"profile": {}, "rows": []}}"#,
            serde_json::to_string(&profile).unwrap()
        );

        let request: ExportRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(request.profile.name, "Client DEMO");
        assert!(request.rows.is_empty());
    }

    #[test]
    fn error_response_serializes_code_and_message() {
        let err = ErrorResponse::bad_request("Invalid impact");
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("\"code\":\"BAD_REQUEST\""));
        assert!(json.contains("Invalid impact"));
    }
}
