use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{CountryCode, EmployeeId, FormResponses, FormType, SubmissionId};
use super::lifecycle::SubmissionError;
use super::repository::{RepositoryError, SubmissionRepository};
use super::service::{SubmissionService, SubmissionServiceError};

#[derive(Debug, Deserialize)]
pub struct OpenDraftRequest {
    pub company_id: String,
    pub form_type: FormType,
    pub country: CountryCode,
}

#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    #[serde(default)]
    pub submitter_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PreviewRequest {
    pub form_type: FormType,
    pub responses: FormResponses,
}

/// Router builder exposing HTTP endpoints for drafts, submission, and
/// stateless score previews.
pub fn submission_router<R>(service: Arc<SubmissionService<R>>) -> Router
where
    R: SubmissionRepository + 'static,
{
    Router::new()
        .route("/api/v1/submissions", post(open_draft_handler::<R>))
        .route("/api/v1/submissions/preview", post(preview_handler::<R>))
        .route(
            "/api/v1/submissions/:submission_id",
            get(status_handler::<R>).put(save_draft_handler::<R>),
        )
        .route(
            "/api/v1/submissions/:submission_id/submit",
            post(submit_handler::<R>),
        )
        .route(
            "/api/v1/companies/:company_id/submissions",
            get(company_listing_handler::<R>),
        )
        .with_state(service)
}

pub(crate) async fn open_draft_handler<R>(
    State(service): State<Arc<SubmissionService<R>>>,
    axum::Json(request): axum::Json<OpenDraftRequest>,
) -> Response
where
    R: SubmissionRepository + 'static,
{
    let company = super::domain::CompanyId(request.company_id);
    match service.open_draft(company, request.form_type, request.country) {
        Ok(record) => (StatusCode::CREATED, axum::Json(record.status_view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn save_draft_handler<R>(
    State(service): State<Arc<SubmissionService<R>>>,
    Path(submission_id): Path<String>,
    axum::Json(responses): axum::Json<FormResponses>,
) -> Response
where
    R: SubmissionRepository + 'static,
{
    let id = SubmissionId(submission_id);
    match service.save_draft(&id, responses) {
        Ok(record) => (StatusCode::OK, axum::Json(record.status_view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn submit_handler<R>(
    State(service): State<Arc<SubmissionService<R>>>,
    Path(submission_id): Path<String>,
    axum::Json(request): axum::Json<SubmitRequest>,
) -> Response
where
    R: SubmissionRepository + 'static,
{
    let id = SubmissionId(submission_id);
    let submitter = request.submitter_id.map(EmployeeId);
    match service.submit(&id, submitter) {
        Ok(record) => (StatusCode::OK, axum::Json(record.status_view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn status_handler<R>(
    State(service): State<Arc<SubmissionService<R>>>,
    Path(submission_id): Path<String>,
) -> Response
where
    R: SubmissionRepository + 'static,
{
    let id = SubmissionId(submission_id);
    match service.get(&id) {
        Ok(record) => (StatusCode::OK, axum::Json(record.status_view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn company_listing_handler<R>(
    State(service): State<Arc<SubmissionService<R>>>,
    Path(company_id): Path<String>,
) -> Response
where
    R: SubmissionRepository + 'static,
{
    let company = super::domain::CompanyId(company_id);
    match service.list_for_company(&company) {
        Ok(records) => {
            let views: Vec<_> = records
                .iter()
                .map(|record| record.status_view())
                .collect();
            (StatusCode::OK, axum::Json(views)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn preview_handler<R>(
    State(service): State<Arc<SubmissionService<R>>>,
    axum::Json(request): axum::Json<PreviewRequest>,
) -> Response
where
    R: SubmissionRepository + 'static,
{
    match service.preview(request.form_type, &request.responses) {
        Ok(summary) => (StatusCode::OK, axum::Json(summary)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: SubmissionServiceError) -> Response {
    let payload = json!({ "error": error.to_string() });
    let status = match &error {
        SubmissionServiceError::FormNotOffered { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        SubmissionServiceError::Lifecycle(SubmissionError::AlreadySubmitted) => {
            StatusCode::CONFLICT
        }
        SubmissionServiceError::Lifecycle(SubmissionError::MissingSubmitter) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        SubmissionServiceError::Lifecycle(SubmissionError::Scoring(_))
        | SubmissionServiceError::Scoring(_) => StatusCode::UNPROCESSABLE_ENTITY,
        SubmissionServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        SubmissionServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        SubmissionServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (status, axum::Json(payload)).into_response()
}
