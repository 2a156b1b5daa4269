//! ExportNeedsHandler - renders the reviewed need table as documents.

use chrono::Local;

use crate::adapters::export::{render_needs_csv, render_synthesis, ExportError};
use crate::domain::needs::ReviewedNeed;
use crate::domain::profile::ClientProfile;
use crate::domain::swot::classify;

/// Handler producing the CSV and Markdown exports of a reviewed table.
#[derive(Debug, Default)]
pub struct ExportNeedsHandler;

impl ExportNeedsHandler {
    pub fn new() -> Self {
        Self
    }

    /// Renders the need table as CSV.
    ///
    /// # Errors
    ///
    /// Returns an error if CSV serialization fails.
    pub fn handle_csv(&self, rows: &[ReviewedNeed]) -> Result<String, ExportError> {
        let csv = render_needs_csv(rows)?;
        tracing::debug!(rows = rows.len(), "need table rendered as CSV");
        Ok(csv)
    }

    /// Renders the Markdown synthesis, recomputing the SWOT from the
    /// profile so the grid always matches the submitted fields.
    pub fn handle_markdown(&self, profile: &ClientProfile, rows: &[ReviewedNeed]) -> String {
        let swot = classify(profile);
        let today = Local::now().date_naive();
        let md = render_synthesis(&profile.name, &swot, rows, today);
        tracing::debug!(client = %profile.name, rows = rows.len(), "synthesis rendered");
        md
    }
}
