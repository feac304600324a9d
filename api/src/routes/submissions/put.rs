use axum::{
    Json,
    extract::{Path, State},
};
use util::state::AppState;

use super::common::{GradeRequest, grade};
use crate::error::{ApiError, ApiJson};
use crate::response::MessageResponse;

/// PUT /submissions/{id}
///
/// Sets `feedback` and/or `status` on one submission. Fields that are absent,
/// `null` or empty are left untouched.
///
/// ### Request Body
/// ```json
/// { "feedback": "Nice work", "status": "Graded" }
/// ```
///
/// ### Responses
/// - `200 OK`: `{"message": "Submission updated successfully"}`
/// - `400 Bad Request`: neither field provided, or `id` is not a document id
/// - `404 Not Found`: `{"message": "Submission not found"}`
/// - `500 Internal Server Error`
pub async fn grade_submission(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<GradeRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    grade(app_state.db(), &id, req).await?;
    Ok(Json(MessageResponse::new("Submission updated successfully")))
}
