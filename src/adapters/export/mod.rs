//! Export adapters - tabular, narrative, and email renditions of a
//! diagnostic.
//!
//! All renderers are pure functions from domain data to strings or bytes;
//! no file I/O happens here. The HTTP layer decides where the bytes go.

mod archive;
mod csv;
mod email;
mod error;
mod markdown;

pub use archive::{bundle_drafts, bundle_filename};
pub use csv::{needs_csv_filename, parse_needs_csv, render_needs_csv};
pub use email::EmailDraft;
pub use error::ExportError;
pub use markdown::{render_synthesis, synthesis_filename};
