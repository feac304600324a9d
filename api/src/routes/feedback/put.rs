use axum::extract::{Path, State};
use util::state::AppState;

use crate::error::{TextError, TextJson};
use crate::routes::submissions::common::{GradeRequest, grade};

/// PUT /feedback/{id}
///
/// Same partial update as `PUT /submissions/{id}`, acknowledged in plain text.
///
/// ### Request Body
/// ```json
/// { "feedback": "Nice work", "status": "Graded" }
/// ```
///
/// ### Responses
/// - `200 OK` (`text/plain`): `Feedback updated successfully`
/// - `400 Bad Request` (`text/plain`): neither field provided, or `id` is not a document id
/// - `404 Not Found` (`text/plain`): `Submission not found`
/// - `500 Internal Server Error` (`text/plain`)
pub async fn give_feedback(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    TextJson(req): TextJson<GradeRequest>,
) -> Result<&'static str, TextError> {
    grade(app_state.db(), &id, req).await?;
    Ok("Feedback updated successfully")
}
