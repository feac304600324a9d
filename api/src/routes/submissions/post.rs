use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use db::DocumentId;
use db::models::submission::Model as SubmissionModel;
use serde::Serialize;
use util::state::AppState;
use validator::Validate;

use super::common::SubmitRequest;
use crate::error::{ApiError, ApiJson};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    pub message: String,
    pub submission_id: String,
}

/// POST /submit
///
/// Records a submission in status `Submitted` with no feedback. The same
/// student may submit the same assignment again; each call creates a new row.
/// The assignment is not required to exist.
///
/// ### Request Body
/// ```json
/// {
///   "studentId": "65a1f0c2e4b0a1b2c3d4e5f1",
///   "assignmentId": "65a1f0c2e4b0a1b2c3d4e5f6",
///   "submissionText": "See attached",
///   "fileURL": "https://files.example.com/a.pdf"
/// }
/// ```
/// `submissionText` and `fileURL` are optional.
///
/// ### Responses
/// - `201 Created`
/// ```json
/// { "message": "Submission successful", "submissionId": "65a1f0c2e4b0a1b2c3d4e5f9" }
/// ```
/// - `400 Bad Request`: `studentId` missing, or `assignmentId` missing or not a document id
/// - `500 Internal Server Error`
pub async fn submit(
    State(app_state): State<AppState>,
    ApiJson(req): ApiJson<SubmitRequest>,
) -> Result<impl IntoResponse, ApiError> {
    req.validate()?;

    let student_id = req.student_id.unwrap_or_default();
    let assignment_id = DocumentId::parse(&req.assignment_id.unwrap_or_default())?;

    let submission = SubmissionModel::create(
        app_state.db(),
        &student_id,
        &assignment_id,
        req.submission_text.as_deref(),
        req.file_url.as_deref(),
    )
    .await?;
    tracing::info!(
        target: "api",
        submission_id = %submission.id,
        assignment_id = %assignment_id,
        "recorded submission"
    );

    Ok((
        StatusCode::CREATED,
        Json(SubmitResponse {
            message: "Submission successful".into(),
            submission_id: submission.id,
        }),
    ))
}
