//! GenerateEmailBundleHandler - drafts and packages department emails.
//!
//! Only rows whose `send` flag survived review become drafts. Contact
//! resolution goes through the routing configuration so overrides and the
//! fallback address apply uniformly.

use std::sync::Arc;

use crate::adapters::export::{bundle_drafts, bundle_filename, EmailDraft, ExportError};
use crate::config::RoutingConfig;
use crate::domain::needs::ReviewedNeed;

/// Command to draft emails for one client's reviewed need table.
#[derive(Debug, Clone)]
pub struct GenerateEmailBundleCommand {
    pub client: String,
    pub rows: Vec<ReviewedNeed>,
}

/// A packaged archive of email drafts.
#[derive(Debug, Clone)]
pub struct EmailBundle {
    pub archive: Vec<u8>,
    pub draft_count: usize,
    pub filename: String,
}

/// Outcome of a bundle request; an empty selection is not an error.
#[derive(Debug, Clone)]
pub enum EmailBundleOutcome {
    NothingToSend,
    Bundle(EmailBundle),
}

/// Handler drafting one email per selected row and zipping the result.
#[derive(Debug, Clone)]
pub struct GenerateEmailBundleHandler {
    routing: Arc<RoutingConfig>,
}

impl GenerateEmailBundleHandler {
    pub fn new(routing: Arc<RoutingConfig>) -> Self {
        Self { routing }
    }

    /// # Errors
    ///
    /// Returns an error if archive packaging fails.
    pub fn handle(
        &self,
        command: GenerateEmailBundleCommand,
    ) -> Result<EmailBundleOutcome, ExportError> {
        let selected: Vec<&ReviewedNeed> =
            command.rows.iter().filter(|row| row.send).collect();
        if selected.is_empty() {
            tracing::debug!(client = %command.client, "no rows selected, nothing to draft");
            return Ok(EmailBundleOutcome::NothingToSend);
        }

        let drafts: Vec<EmailDraft> = selected
            .iter()
            .map(|row| {
                let contact = self.routing.contact_for_display_name(&row.department);
                EmailDraft::for_need(contact, &command.client, row)
            })
            .collect();

        let slug = command.client.replace(' ', "_");
        let archive = bundle_drafts(&drafts, &slug, &self.routing.sender)?;
        tracing::info!(
            client = %command.client,
            drafts = drafts.len(),
            "email bundle packaged"
        );

        Ok(EmailBundleOutcome::Bundle(EmailBundle {
            archive,
            draft_count: drafts.len(),
            filename: bundle_filename(&slug),
        }))
    }
}
