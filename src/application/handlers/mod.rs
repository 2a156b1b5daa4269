//! Use case handlers.
//!
//! Each diagnostic run is an independent, side-effect-free computation
//! from a freshly constructed profile; the handlers hold no state across
//! calls beyond injected configuration.

mod export_needs;
mod generate_emails;
mod run_diagnostic;

pub use export_needs::ExportNeedsHandler;
pub use generate_emails::{
    EmailBundle, EmailBundleOutcome, GenerateEmailBundleCommand, GenerateEmailBundleHandler,
};
pub use run_diagnostic::{DiagnosticReport, RunDiagnosticCommand, RunDiagnosticHandler};
