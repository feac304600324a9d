use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use db::DocumentId;
use db::models::assignment::Model as AssignmentModel;
use serde::Serialize;
use util::state::AppState;
use validator::Validate;

use super::common::{AssignmentRequest, parse_deadline};
use crate::error::{ApiError, ApiJson};

#[derive(Debug, Serialize)]
pub struct CreatedAssignment {
    pub message: String,
    pub id: String,
}

/// POST /assignments
///
/// Publishes a new assignment. `createdAt` is stamped by the server.
///
/// ### Request Body
/// ```json
/// {
///   "title": "Linked lists",
///   "description": "Implement a doubly linked list",
///   "deadline": "2025-06-30T23:59:00Z",
///   "createdBy": "65a1f0c2e4b0a1b2c3d4e5f0"
/// }
/// ```
/// `deadline` may also be `YYYY-MM-DDTHH:MM` (UTC) or `YYYY-MM-DD`.
///
/// ### Responses
/// - `201 Created`
/// ```json
/// { "message": "Assignment created successfully", "id": "65a1f0c2e4b0a1b2c3d4e5f6" }
/// ```
/// - `400 Bad Request`: a field is missing, `deadline` is unparseable, or
///   `createdBy` is not a document id. Nothing is inserted.
/// - `500 Internal Server Error`
pub async fn create_assignment(
    State(app_state): State<AppState>,
    ApiJson(req): ApiJson<AssignmentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    req.validate()?;

    let title = req.title.unwrap_or_default();
    let description = req.description.unwrap_or_default();
    let raw_deadline = req.deadline.unwrap_or_default();
    let deadline = parse_deadline(&raw_deadline)
        .ok_or_else(|| ApiError::bad_request(format!("Invalid deadline: {raw_deadline}")))?;
    let created_by = DocumentId::parse(&req.created_by.unwrap_or_default())?;

    let assignment =
        AssignmentModel::create(app_state.db(), &title, &description, deadline, &created_by)
            .await?;
    tracing::info!(target: "api", assignment_id = %assignment.id, "created assignment");

    Ok((
        StatusCode::CREATED,
        Json(CreatedAssignment {
            message: "Assignment created successfully".into(),
            id: assignment.id,
        }),
    ))
}
