use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde_json::json;

use super::domain::InquiryForm;
use super::repository::{AnalyticsSink, InquiryRepository};
use super::service::{InquiryService, SubmissionOutcome};

/// Router builder exposing the submission endpoint.
pub fn inquiry_router<R, A>(service: Arc<InquiryService<R, A>>) -> Router
where
    R: InquiryRepository + 'static,
    A: AnalyticsSink + 'static,
{
    Router::new()
        .route("/api/v1/inquiries", post(submit_handler::<R, A>))
        .with_state(service)
}

pub(crate) async fn submit_handler<R, A>(
    State(service): State<Arc<InquiryService<R, A>>>,
    axum::Json(form): axum::Json<InquiryForm>,
) -> Response
where
    R: InquiryRepository + 'static,
    A: AnalyticsSink + 'static,
{
    let outcome = service.submit(form).await;

    // Real acceptances and honeypot discards must be indistinguishable, so
    // both map to the same status and body.
    let status = match &outcome {
        SubmissionOutcome::Accepted { .. } | SubmissionOutcome::Discarded { .. } => StatusCode::OK,
        SubmissionOutcome::Rejected { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        SubmissionOutcome::Failed { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        SubmissionOutcome::InFlight => StatusCode::TOO_MANY_REQUESTS,
    };

    match outcome.notification() {
        Some(notification) => (status, axum::Json(notification)).into_response(),
        None => {
            let payload = json!({
                "error": "a submission is already in flight",
            });
            (status, axum::Json(payload)).into_response()
        }
    }
}
