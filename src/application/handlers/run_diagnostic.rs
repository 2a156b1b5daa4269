//! RunDiagnosticHandler - composes the two core rule engines.
//!
//! This is the only place the classifier and the need deriver are
//! chained; everything downstream consumes the resulting report.

use serde::Serialize;

use crate::domain::needs::{derive_needs, Need};
use crate::domain::profile::ClientProfile;
use crate::domain::swot::{classify, SwotClassification};

/// Command to run one diagnostic over a complete profile snapshot.
#[derive(Debug, Clone)]
pub struct RunDiagnosticCommand {
    pub profile: ClientProfile,
}

/// Result of one diagnostic run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagnosticReport {
    pub swot: SwotClassification,
    pub needs: Vec<Need>,
}

/// Handler running the SWOT classification and need derivation.
#[derive(Debug, Default)]
pub struct RunDiagnosticHandler;

impl RunDiagnosticHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, command: RunDiagnosticCommand) -> DiagnosticReport {
        let swot = classify(&command.profile);
        let needs = derive_needs(&command.profile, &swot);
        tracing::debug!(
            client = %command.profile.name,
            observations = swot.observation_count(),
            needs = needs.len(),
            "diagnostic computed"
        );
        DiagnosticReport { swot, needs }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::{DigitalMaturity, MarginLevel, Sector};

    #[test]
    fn handle_chains_classification_and_derivation() {
        let mut profile = ClientProfile::new("Client DEMO", Sector::Services);
        profile.digital = DigitalMaturity::NoIt;
        profile.margin = MarginLevel::Low;

        let handler = RunDiagnosticHandler::new();
        let report = handler.handle(RunDiagnosticCommand { profile });

        assert!(!report.swot.weaknesses.is_empty());
        assert!(report
            .needs
            .iter()
            .any(|n| n.description == "Étude prix de revient & politique de pricing"));
    }

    #[test]
    fn handle_is_deterministic_across_calls() {
        let profile = ClientProfile::new("Client DEMO", Sector::Btp);
        let handler = RunDiagnosticHandler::new();

        let first = handler.handle(RunDiagnosticCommand {
            profile: profile.clone(),
        });
        let second = handler.handle(RunDiagnosticCommand { profile });
        assert_eq!(first, second);
    }

    #[test]
    fn report_serializes_for_the_display_layer() {
        let profile = ClientProfile::new("Client DEMO", Sector::Services);
        let report = RunDiagnosticHandler::new().handle(RunDiagnosticCommand { profile });

        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("swot").is_some());
        assert!(json.get("needs").is_some());
    }
}
