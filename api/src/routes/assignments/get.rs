use axum::{
    Json,
    extract::{Path, State},
};
use db::models::assignment::Model as AssignmentModel;
use util::state::AppState;

use super::common::AssignmentResponse;
use crate::error::ApiError;
use crate::routes::common::parse_id;

/// GET /assignments
///
/// Every assignment in insertion order. No pagination.
///
/// ### Response
/// - `200 OK`
/// ```json
/// [
///   {
///     "_id": "65a1f0c2e4b0a1b2c3d4e5f6",
///     "title": "Linked lists",
///     "description": "Implement a doubly linked list",
///     "deadline": "2025-06-30T23:59:00+00:00",
///     "createdBy": "65a1f0c2e4b0a1b2c3d4e5f0",
///     "createdAt": "2025-05-29T10:00:00+00:00"
///   }
/// ]
/// ```
/// - `500 Internal Server Error`
pub async fn list_assignments(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<AssignmentResponse>>, ApiError> {
    let assignments = AssignmentModel::find_all(app_state.db()).await?;
    Ok(Json(assignments.into_iter().map(Into::into).collect()))
}

/// GET /assignments/{id}
///
/// ### Responses
/// - `200 OK`: a single assignment, same shape as the listing
/// - `400 Bad Request`: `id` is not a document id
/// - `404 Not Found`: `{"message": "Assignment not found"}`
/// - `500 Internal Server Error`
pub async fn get_assignment(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<AssignmentResponse>, ApiError> {
    let id = parse_id(&id)?;

    AssignmentModel::find_by_id(app_state.db(), &id)
        .await?
        .map(|a| Json(a.into()))
        .ok_or_else(|| ApiError::not_found("Assignment not found"))
}
