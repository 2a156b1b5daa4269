//! Route configuration for diagnostic endpoints.
//!
//! Configures Axum router with diagnostic-related routes.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    export_csv, export_markdown, generate_emails, health, list_departments, run_diagnostic,
    DiagnosticAppState,
};

/// Creates the diagnostic router with all endpoints.
///
/// Routes:
/// - `POST /api/diagnostic` - Run the SWOT classification and need derivation
/// - `POST /api/diagnostic/export/csv` - Export the reviewed table as CSV
/// - `POST /api/diagnostic/export/markdown` - Export the Markdown synthesis
/// - `POST /api/diagnostic/emails` - Generate the email draft bundle
/// - `GET /api/catalog/departments` - List the department catalog
/// - `GET /health` - Liveness probe
pub fn diagnostic_router() -> Router<DiagnosticAppState> {
    Router::new()
        .route("/api/diagnostic", post(run_diagnostic))
        .route("/api/diagnostic/export/csv", post(export_csv))
        .route("/api/diagnostic/export/markdown", post(export_markdown))
        .route("/api/diagnostic/emails", post(generate_emails))
        .route("/api/catalog/departments", get(list_departments))
        .route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RoutingConfig;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app() -> Router {
        let state = DiagnosticAppState::new(Arc::new(RoutingConfig::default()));
        diagnostic_router().with_state(state)
    }

    #[tokio::test]
    async fn health_endpoint_responds_ok() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn departments_endpoint_is_mounted() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/catalog/departments")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
