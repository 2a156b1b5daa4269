//! CSV export of the need table.
//!
//! Columns mirror the editable table: besoin, service, priorite,
//! echeance, impact, justification, "Envoyer ?". The format is lossless:
//! `parse_needs_csv` reads the same layout back so a round trip
//! reproduces identical field values.

use serde::{Deserialize, Serialize};

use crate::domain::needs::{DeadlineBucket, ImpactScore, Priority, ReviewedNeed};

use super::error::ExportError;

/// One CSV record; labels travel in their French display form.
#[derive(Debug, Serialize, Deserialize)]
struct NeedCsvRow {
    besoin: String,
    service: String,
    priorite: String,
    echeance: String,
    impact: u8,
    justification: String,
    #[serde(rename = "Envoyer ?")]
    envoyer: bool,
}

impl From<&ReviewedNeed> for NeedCsvRow {
    fn from(row: &ReviewedNeed) -> Self {
        Self {
            besoin: row.description.clone(),
            service: row.department.clone(),
            priorite: row.priority.label().to_string(),
            echeance: row.deadline.label().to_string(),
            impact: row.impact.value(),
            justification: row.rationale.clone(),
            envoyer: row.send,
        }
    }
}

impl NeedCsvRow {
    fn into_reviewed(self) -> Result<ReviewedNeed, ExportError> {
        Ok(ReviewedNeed {
            description: self.besoin,
            department: self.service,
            priority: Priority::from_label(&self.priorite)?,
            deadline: DeadlineBucket::from_label(&self.echeance)?,
            impact: ImpactScore::try_new(self.impact)?,
            rationale: self.justification,
            send: self.envoyer,
        })
    }
}

/// Renders the need table as a CSV document with a header row.
pub fn render_needs_csv(rows: &[ReviewedNeed]) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(vec![]);
    for row in rows {
        writer.serialize(NeedCsvRow::from(row))?;
    }
    writer.flush()?;
    let bytes = writer
        .into_inner()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;
    Ok(String::from_utf8(bytes)?)
}

/// Parses a CSV document produced by [`render_needs_csv`] back into
/// reviewed rows. Unknown priority or deadline labels are construction
/// errors, surfaced before anything downstream runs.
pub fn parse_needs_csv(data: &str) -> Result<Vec<ReviewedNeed>, ExportError> {
    let mut reader = csv::Reader::from_reader(data.as_bytes());
    let mut rows = Vec::new();
    for record in reader.deserialize::<NeedCsvRow>() {
        rows.push(record?.into_reviewed()?);
    }
    Ok(rows)
}

/// Suggested attachment name for the CSV export.
pub fn needs_csv_filename(client_slug: &str) -> String {
    format!("besoins_{}.csv", client_slug)
}
