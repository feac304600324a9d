use axum::{
    Json,
    extract::{Path, State},
};
use db::models::submission::{Model as SubmissionModel, StatusCount};
use serde::Serialize;
use util::state::AppState;

use crate::error::ApiError;
use crate::routes::common::parse_id;

/// One bar of the chart: a status and how many submissions carry it.
#[derive(Debug, Serialize, PartialEq)]
pub struct ChartBucket {
    #[serde(rename = "_id")]
    pub status: String,
    pub count: i64,
}

impl From<StatusCount> for ChartBucket {
    fn from(c: StatusCount) -> Self {
        Self {
            status: c.status,
            count: c.count,
        }
    }
}

/// GET /chart/{assignmentId}
///
/// Submission counts per distinct status for one assignment. Order is unspecified.
///
/// ### Responses
/// - `200 OK`
/// ```json
/// [
///   { "_id": "Submitted", "count": 2 },
///   { "_id": "Graded", "count": 1 }
/// ]
/// ```
/// An assignment with no submissions (or none at all) yields `[]`.
/// - `400 Bad Request`: `assignmentId` is not a document id
/// - `500 Internal Server Error`
pub async fn status_chart(
    State(app_state): State<AppState>,
    Path(assignment_id): Path<String>,
) -> Result<Json<Vec<ChartBucket>>, ApiError> {
    let assignment_id = parse_id(&assignment_id)?;
    let counts = SubmissionModel::status_counts(app_state.db(), &assignment_id).await?;
    Ok(Json(counts.into_iter().map(Into::into).collect()))
}
