use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::Expr;
use sea_orm::{FromQueryResult, QueryOrder, QuerySelect};

use crate::document_id::DocumentId;
use crate::models::assignment;

/// Status every new submission starts in.
pub const DEFAULT_STATUS: &str = "Submitted";

/// Represents one piece of work handed in by a student.
///
/// A student may submit the same assignment any number of times; each row is
/// graded on its own.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "submissions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Raw string as sent by the client; matched exactly, never parsed.
    pub student_id: String,
    /// Document id of the assignment. May point at nothing.
    pub assignment_id: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub submission_text: Option<String>,
    pub file_url: Option<String>,
    /// Free-form grading state, `Submitted` until an instructor changes it.
    pub status: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub feedback: Option<String>,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::assignment::Entity",
        from = "Column::AssignmentId",
        to = "super::assignment::Column::Id"
    )]
    Assignment,
}

impl Related<super::assignment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assignment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Partial grading update. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GradingUpdate {
    pub status: Option<String>,
    pub feedback: Option<String>,
}

impl GradingUpdate {
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.feedback.is_none()
    }
}

/// One bucket of the per-assignment status histogram.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct StatusCount {
    pub status: String,
    pub count: i64,
}

impl Model {
    pub async fn create(
        db: &DbConn,
        student_id: &str,
        assignment_id: &DocumentId,
        submission_text: Option<&str>,
        file_url: Option<&str>,
    ) -> Result<Model, DbErr> {
        let submission = ActiveModel {
            id: Set(DocumentId::new().to_string()),
            student_id: Set(student_id.to_owned()),
            assignment_id: Set(assignment_id.to_string()),
            submission_text: Set(submission_text.map(str::to_owned)),
            file_url: Set(file_url.map(str::to_owned)),
            status: Set(DEFAULT_STATUS.to_owned()),
            feedback: Set(None),
            submitted_at: Set(Utc::now()),
        };

        submission.insert(db).await
    }

    /// Every submission, in the store's natural order.
    pub async fn find_all(db: &DbConn) -> Result<Vec<Model>, DbErr> {
        Entity::find().all(db).await
    }

    pub async fn find_by_id(db: &DbConn, id: &DocumentId) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id.to_string()).one(db).await
    }

    /// Submissions of one student, most recent first.
    pub async fn find_by_student(db: &DbConn, student_id: &str) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::StudentId.eq(student_id))
            .order_by_desc(Column::SubmittedAt)
            .order_by_desc(Column::Id)
            .all(db)
            .await
    }

    /// Submissions of one student paired with their assignment, most recent first.
    ///
    /// Rows whose assignment no longer resolves are dropped.
    pub async fn find_by_student_with_assignment(
        db: &DbConn,
        student_id: &str,
    ) -> Result<Vec<(Model, assignment::Model)>, DbErr> {
        let rows = Entity::find()
            .filter(Column::StudentId.eq(student_id))
            .order_by_desc(Column::SubmittedAt)
            .order_by_desc(Column::Id)
            .find_also_related(assignment::Entity)
            .all(db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(submission, assignment)| assignment.map(|a| (submission, a)))
            .collect())
    }

    /// Writes only the provided grading fields.
    ///
    /// Returns `false` when no submission has this id. Concurrent updates are
    /// last-write-wins per field.
    pub async fn apply_grading(
        db: &DbConn,
        id: &DocumentId,
        update: &GradingUpdate,
    ) -> Result<bool, DbErr> {
        if update.is_empty() {
            return Err(DbErr::Custom("grading update has no fields".into()));
        }

        let mut query = Entity::update_many().filter(Column::Id.eq(id.to_string()));
        if let Some(status) = &update.status {
            query = query.col_expr(Column::Status, Expr::value(status.clone()));
        }
        if let Some(feedback) = &update.feedback {
            query = query.col_expr(Column::Feedback, Expr::value(feedback.clone()));
        }

        let result = query.exec(db).await?;
        Ok(result.rows_affected > 0)
    }

    /// Number of submissions per distinct status for one assignment.
    pub async fn status_counts(
        db: &DbConn,
        assignment_id: &DocumentId,
    ) -> Result<Vec<StatusCount>, DbErr> {
        Entity::find()
            .select_only()
            .column(Column::Status)
            .column_as(Column::Id.count(), "count")
            .filter(Column::AssignmentId.eq(assignment_id.to_string()))
            .group_by(Column::Status)
            .into_model::<StatusCount>()
            .all(db)
            .await
    }
}
