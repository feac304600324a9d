#[cfg(test)]
mod tests {
    use crate::helpers::{body_text, json_request, make_test_app};
    use axum::http::StatusCode;
    use db::DocumentId;
    use db::models::submission::Model as SubmissionModel;
    use serde_json::json;
    use tower::ServiceExt;

    /// Test Case: Feedback only leaves status untouched, plain-text ack
    #[tokio::test]
    async fn test_feedback_only() {
        let (app, app_state) = make_test_app().await;
        let db = app_state.db();
        let submission = SubmissionModel::create(db, "s1", &DocumentId::new(), None, None)
            .await
            .unwrap();

        let response = app
            .oneshot(json_request(
                "PUT",
                &format!("/feedback/{}", submission.id),
                json!({ "feedback": "Well structured" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "Feedback updated successfully");

        let after = SubmissionModel::find_by_id(db, &DocumentId::parse(&submission.id).unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(after.feedback.as_deref(), Some("Well structured"));
        assert_eq!(after.status, "Submitted");
    }

    /// Test Case: Neither field, unknown id
    #[tokio::test]
    async fn test_feedback_errors_are_plain_text() {
        let (app, app_state) = make_test_app().await;
        let submission =
            SubmissionModel::create(app_state.db(), "s1", &DocumentId::new(), None, None)
                .await
                .unwrap();

        let response = app
            .clone()
            .oneshot(json_request(
                "PUT",
                &format!("/feedback/{}", submission.id),
                json!({}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, "feedback or status is required");

        let response = app
            .oneshot(json_request(
                "PUT",
                &format!("/feedback/{}", DocumentId::new()),
                json!({ "status": "Graded" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_text(response).await, "Submission not found");
    }
}
