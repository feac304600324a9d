use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;

use crate::document_id::DocumentId;

/// Represents an assignment published by an instructor.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "assignments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub deadline: DateTime<Utc>,
    /// Document id of the instructor who created it. Not checked against `users`.
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::submission::Entity")]
    Submissions,
}

impl Related<super::submission::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Submissions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(
        db: &DbConn,
        title: &str,
        description: &str,
        deadline: DateTime<Utc>,
        created_by: &DocumentId,
    ) -> Result<Model, DbErr> {
        // `created_at` is the creation second embedded in the id.
        let id = DocumentId::new();
        let assignment = ActiveModel {
            id: Set(id.to_string()),
            title: Set(title.to_owned()),
            description: Set(description.to_owned()),
            deadline: Set(deadline),
            created_by: Set(created_by.to_string()),
            created_at: Set(id.timestamp()),
        };

        assignment.insert(db).await
    }

    /// Every assignment, in the store's natural order.
    pub async fn find_all(db: &DbConn) -> Result<Vec<Model>, DbErr> {
        Entity::find().all(db).await
    }

    pub async fn find_by_id(db: &DbConn, id: &DocumentId) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id.to_string()).one(db).await
    }
}
