//! HTTP handlers for diagnostic endpoints.
//!
//! These handlers connect Axum routes to application layer handlers. The
//! diagnostic itself is a pure computation; the only injected dependency
//! is the routing configuration used for email drafts.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::export::{needs_csv_filename, synthesis_filename, ExportError};
use crate::application::handlers::{
    EmailBundleOutcome, ExportNeedsHandler, GenerateEmailBundleCommand,
    GenerateEmailBundleHandler, RunDiagnosticCommand, RunDiagnosticHandler,
};
use crate::config::RoutingConfig;
use crate::domain::catalog::Department;
use crate::domain::foundation::ValidationError;
use crate::domain::profile::ClientProfile;

use super::dto::{
    DepartmentView, DiagnosticResponse, EmailRequest, ErrorResponse, ExportRequest, NeedView,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
#[derive(Clone)]
pub struct DiagnosticAppState {
    pub routing: Arc<RoutingConfig>,
}

impl DiagnosticAppState {
    pub fn new(routing: Arc<RoutingConfig>) -> Self {
        Self { routing }
    }

    pub fn run_diagnostic_handler(&self) -> RunDiagnosticHandler {
        RunDiagnosticHandler::new()
    }

    pub fn export_needs_handler(&self) -> ExportNeedsHandler {
        ExportNeedsHandler::new()
    }

    pub fn email_bundle_handler(&self) -> GenerateEmailBundleHandler {
        GenerateEmailBundleHandler::new(self.routing.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/diagnostic - Run the SWOT classification and need derivation
pub async fn run_diagnostic(
    State(state): State<DiagnosticAppState>,
    Json(profile): Json<ClientProfile>,
) -> Json<DiagnosticResponse> {
    let handler = state.run_diagnostic_handler();
    let report = handler.handle(RunDiagnosticCommand { profile });

    Json(DiagnosticResponse {
        swot: report.swot,
        needs: report.needs.into_iter().map(NeedView::from).collect(),
    })
}

/// POST /api/diagnostic/export/csv - Export the reviewed table as CSV
pub async fn export_csv(
    State(state): State<DiagnosticAppState>,
    Json(request): Json<ExportRequest>,
) -> Result<impl IntoResponse, DiagnosticApiError> {
    let handler = state.export_needs_handler();
    let csv = handler.handle_csv(&request.rows)?;

    let filename = needs_csv_filename(&request.profile.file_slug());
    let headers = [
        (CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
        (
            CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", filename),
        ),
    ];
    Ok((headers, csv))
}

/// POST /api/diagnostic/export/markdown - Export the Markdown synthesis
pub async fn export_markdown(
    State(state): State<DiagnosticAppState>,
    Json(request): Json<ExportRequest>,
) -> impl IntoResponse {
    let handler = state.export_needs_handler();
    let markdown = handler.handle_markdown(&request.profile, &request.rows);

    let filename = synthesis_filename(&request.profile.file_slug());
    let headers = [
        (CONTENT_TYPE, "text/markdown; charset=utf-8".to_string()),
        (
            CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", filename),
        ),
    ];
    (headers, markdown)
}

/// POST /api/diagnostic/emails - Generate the email draft bundle
///
/// Returns `204 No Content` when no row has its send flag set.
pub async fn generate_emails(
    State(state): State<DiagnosticAppState>,
    Json(request): Json<EmailRequest>,
) -> Result<axum::response::Response, DiagnosticApiError> {
    let handler = state.email_bundle_handler();
    let outcome = handler.handle(GenerateEmailBundleCommand {
        client: request.client,
        rows: request.rows,
    })?;

    match outcome {
        EmailBundleOutcome::NothingToSend => Ok(StatusCode::NO_CONTENT.into_response()),
        EmailBundleOutcome::Bundle(bundle) => {
            let headers = [
                (CONTENT_TYPE, "application/zip".to_string()),
                (
                    CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", bundle.filename),
                ),
            ];
            Ok((headers, bundle.archive).into_response())
        }
    }
}

/// GET /api/catalog/departments - List the department catalog
pub async fn list_departments(
    State(state): State<DiagnosticAppState>,
) -> Json<Vec<DepartmentView>> {
    let views = Department::ALL
        .iter()
        .map(|&department| DepartmentView::new(department, state.routing.contact_for(department)))
        .collect();
    Json(views)
}

/// GET /health - Liveness probe
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts export errors to HTTP responses.
#[derive(Debug)]
pub enum DiagnosticApiError {
    BadRequest(String),
    Internal(String),
}

impl From<ExportError> for DiagnosticApiError {
    fn from(err: ExportError) -> Self {
        match err {
            ExportError::Validation(e) => DiagnosticApiError::BadRequest(e.to_string()),
            other => DiagnosticApiError::Internal(other.to_string()),
        }
    }
}

impl From<ValidationError> for DiagnosticApiError {
    fn from(err: ValidationError) -> Self {
        DiagnosticApiError::BadRequest(err.to_string())
    }
}

impl IntoResponse for DiagnosticApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            DiagnosticApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg))
            }
            DiagnosticApiError::Internal(msg) => {
                tracing::error!(error = %msg, "diagnostic API failure");
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::internal(msg))
            }
        };

        (status, Json(error)).into_response()
    }
}
