//! ZIP packaging of email drafts.

use std::io::{Cursor, Write};

use zip::write::{SimpleFileOptions, ZipWriter};
use zip::CompressionMethod;

use super::email::EmailDraft;
use super::error::ExportError;

/// Bundles rendered `.eml` drafts into one deflate-compressed archive.
///
/// Entry names are `{NN}_{client_slug}.eml`, 1-based and zero-padded.
pub fn bundle_drafts(
    drafts: &[EmailDraft],
    client_slug: &str,
    sender: &str,
) -> Result<Vec<u8>, ExportError> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for (index, draft) in drafts.iter().enumerate() {
        let name = format!("{:02}_{}.eml", index + 1, client_slug);
        writer.start_file(name, options)?;
        writer.write_all(draft.to_eml(sender).as_bytes())?;
    }

    let cursor = writer.finish()?;
    Ok(cursor.into_inner())
}

/// Suggested attachment name for the email bundle.
pub fn bundle_filename(client_slug: &str) -> String {
    format!("emails_{}.zip", client_slug)
}
