use axum::{
    Json,
    extract::{Path, State},
};
use db::models::{submission::Model as SubmissionModel, user::Model as UserModel};
use util::state::AppState;

use super::common::{EnrichedSubmission, SubmissionResponse};
use crate::error::ApiError;

/// GET /submissions
///
/// Every submission, insertion order.
///
/// ### Response
/// - `200 OK`
/// ```json
/// [
///   {
///     "_id": "65a1f0c2e4b0a1b2c3d4e5f9",
///     "studentId": "65a1f0c2e4b0a1b2c3d4e5f1",
///     "assignmentId": "65a1f0c2e4b0a1b2c3d4e5f6",
///     "submissionText": "See attached",
///     "fileURL": "https://files.example.com/a.pdf",
///     "status": "Submitted",
///     "feedback": null,
///     "submittedAt": "2025-05-29T10:00:00.123+00:00"
///   }
/// ]
/// ```
pub async fn list_submissions(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<SubmissionResponse>>, ApiError> {
    let submissions = SubmissionModel::find_all(app_state.db()).await?;
    Ok(Json(submissions.into_iter().map(Into::into).collect()))
}

/// GET /submissions/{studentId}
///
/// Submissions whose `studentId` equals the path segment exactly, most recent first.
/// An unknown student yields `[]`.
pub async fn list_submissions_by_student(
    State(app_state): State<AppState>,
    Path(student_id): Path<String>,
) -> Result<Json<Vec<SubmissionResponse>>, ApiError> {
    let submissions = SubmissionModel::find_by_student(app_state.db(), &student_id).await?;
    Ok(Json(submissions.into_iter().map(Into::into).collect()))
}

/// GET /submissions/student/{studentId}
///
/// One row per submission of the student, joined with its assignment, most
/// recent first. Rows whose assignment is gone are dropped; `studentName` is
/// omitted when the student id does not resolve to a user.
///
/// ### Response
/// - `200 OK`
/// ```json
/// [
///   {
///     "id": "65a1f0c2e4b0a1b2c3d4e5f9",
///     "studentId": "65a1f0c2e4b0a1b2c3d4e5f1",
///     "studentName": "Ada Lovelace",
///     "assignmentId": "65a1f0c2e4b0a1b2c3d4e5f6",
///     "assignmentTitle": "Linked lists",
///     "assignmentDeadline": "2025-06-30T23:59:00+00:00",
///     "submissionUrl": "https://files.example.com/a.pdf",
///     "note": "See attached",
///     "status": "Graded",
///     "feedback": "Nice work",
///     "submittedAt": "2025-05-29T10:00:00.123+00:00"
///   }
/// ]
/// ```
pub async fn list_submissions_with_detail(
    State(app_state): State<AppState>,
    Path(student_id): Path<String>,
) -> Result<Json<Vec<EnrichedSubmission>>, ApiError> {
    let db = app_state.db();

    let rows = SubmissionModel::find_by_student_with_assignment(db, &student_id).await?;
    if rows.is_empty() {
        return Ok(Json(Vec::new()));
    }

    let student_name = UserModel::find_by_id(db, &student_id)
        .await?
        .map(|user| user.name);

    Ok(Json(
        rows.into_iter()
            .map(|(submission, assignment)| {
                EnrichedSubmission::new(submission, assignment, student_name.clone())
            })
            .collect(),
    ))
}
