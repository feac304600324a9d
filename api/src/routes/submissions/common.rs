use db::models::{
    assignment::Model as AssignmentModel,
    submission::{GradingUpdate, Model as SubmissionModel},
};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::ApiError;
use crate::routes::common::{parse_id, provided};

/// Submission as returned to clients.
#[derive(Debug, Serialize)]
pub struct SubmissionResponse {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "studentId")]
    pub student_id: String,
    #[serde(rename = "assignmentId")]
    pub assignment_id: String,
    #[serde(rename = "submissionText")]
    pub submission_text: Option<String>,
    #[serde(rename = "fileURL")]
    pub file_url: Option<String>,
    pub status: String,
    pub feedback: Option<String>,
    #[serde(rename = "submittedAt")]
    pub submitted_at: String,
}

impl From<SubmissionModel> for SubmissionResponse {
    fn from(s: SubmissionModel) -> Self {
        Self {
            id: s.id,
            student_id: s.student_id,
            assignment_id: s.assignment_id,
            submission_text: s.submission_text,
            file_url: s.file_url,
            status: s.status,
            feedback: s.feedback,
            submitted_at: s.submitted_at.to_rfc3339(),
        }
    }
}

/// A submission joined with its assignment and, when resolvable, its student.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedSubmission {
    pub id: String,
    pub student_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_name: Option<String>,
    pub assignment_id: String,
    pub assignment_title: String,
    pub assignment_deadline: String,
    pub submission_url: Option<String>,
    pub note: Option<String>,
    pub status: String,
    pub feedback: Option<String>,
    pub submitted_at: String,
}

impl EnrichedSubmission {
    pub fn new(
        submission: SubmissionModel,
        assignment: AssignmentModel,
        student_name: Option<String>,
    ) -> Self {
        Self {
            id: submission.id,
            student_id: submission.student_id,
            student_name,
            assignment_id: submission.assignment_id,
            assignment_title: assignment.title,
            assignment_deadline: assignment.deadline.to_rfc3339(),
            submission_url: submission.file_url,
            note: submission.submission_text,
            status: submission.status,
            feedback: submission.feedback,
            submitted_at: submission.submitted_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRequest {
    #[validate(
        required(message = "studentId is required"),
        length(min = 1, message = "studentId is required")
    )]
    pub student_id: Option<String>,

    #[validate(
        required(message = "assignmentId is required"),
        length(min = 1, message = "assignmentId is required")
    )]
    pub assignment_id: Option<String>,

    pub submission_text: Option<String>,

    #[serde(rename = "fileURL")]
    pub file_url: Option<String>,
}

/// Body shared by both grading routes.
#[derive(Debug, Default, Deserialize)]
pub struct GradeRequest {
    pub feedback: Option<String>,
    pub status: Option<String>,
}

impl GradeRequest {
    /// Keeps only the fields that were actually provided.
    pub fn into_update(self) -> Result<GradingUpdate, ApiError> {
        let update = GradingUpdate {
            status: provided(self.status),
            feedback: provided(self.feedback),
        };
        if update.is_empty() {
            return Err(ApiError::bad_request("feedback or status is required"));
        }
        Ok(update)
    }
}

/// Validates and applies a grading request to the submission with `raw_id`.
pub async fn grade(
    db: &DatabaseConnection,
    raw_id: &str,
    req: GradeRequest,
) -> Result<(), ApiError> {
    let id = parse_id(raw_id)?;
    let update = req.into_update()?;

    if !SubmissionModel::apply_grading(db, &id, &update).await? {
        return Err(ApiError::not_found("Submission not found"));
    }

    tracing::info!(
        target: "api",
        submission_id = %id,
        status = ?update.status,
        feedback = update.feedback.is_some(),
        "graded submission"
    );
    Ok(())
}
