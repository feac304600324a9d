#[cfg(test)]
mod tests {
    use crate::helpers::{body_json, get, json_request, make_test_app};
    use axum::http::StatusCode;
    use chrono::{TimeZone, Utc};
    use db::DocumentId;
    use db::models::{
        assignment::Model as AssignmentModel, submission::Model as SubmissionModel,
        user::Model as UserModel,
    };
    use sea_orm::DatabaseConnection;
    use serde_json::json;
    use tower::ServiceExt;

    async fn seed_assignment(db: &DatabaseConnection, title: &str) -> AssignmentModel {
        let deadline = Utc.with_ymd_and_hms(2025, 6, 30, 23, 59, 0).unwrap();
        AssignmentModel::create(db, title, "desc", deadline, &DocumentId::new())
            .await
            .unwrap()
    }

    fn id_of(a: &AssignmentModel) -> DocumentId {
        DocumentId::parse(&a.id).unwrap()
    }

    /// Test Case: Submitting with and without optional fields
    #[tokio::test]
    async fn test_submit_creates_one_submitted_row() {
        let (app, app_state) = make_test_app().await;
        let assignment = seed_assignment(app_state.db(), "A").await;

        let bodies = [
            json!({ "studentId": "s1", "assignmentId": assignment.id }),
            json!({
                "studentId": "s1",
                "assignmentId": assignment.id,
                "submissionText": "my essay",
                "fileURL": "https://files/a.pdf"
            }),
        ];

        for (i, body) in bodies.into_iter().enumerate() {
            let response = app
                .clone()
                .oneshot(json_request("POST", "/submit", body))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::CREATED);
            let json = body_json(response).await;
            assert_eq!(json["message"], "Submission successful");

            let all = SubmissionModel::find_all(app_state.db()).await.unwrap();
            assert_eq!(all.len(), i + 1);
            let created = all
                .iter()
                .find(|s| s.id == json["submissionId"].as_str().unwrap())
                .unwrap();
            assert_eq!(created.status, "Submitted");
            assert_eq!(created.feedback, None);
        }
    }

    /// Test Case: Missing studentId, missing or malformed assignmentId
    #[tokio::test]
    async fn test_submit_rejects_missing_identity() {
        let (app, app_state) = make_test_app().await;
        let assignment = seed_assignment(app_state.db(), "A").await;

        for body in [
            json!({ "assignmentId": assignment.id }),
            json!({ "studentId": "s1" }),
            json!({ "studentId": "s1", "assignmentId": "abc" }),
        ] {
            let response = app
                .clone()
                .oneshot(json_request("POST", "/submit", body))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        }

        assert!(SubmissionModel::find_all(app_state.db()).await.unwrap().is_empty());
    }

    /// Test Case: Full listing uses document field names
    #[tokio::test]
    async fn test_list_submissions() {
        let (app, app_state) = make_test_app().await;
        let assignment = seed_assignment(app_state.db(), "A").await;
        SubmissionModel::create(app_state.db(), "s1", &id_of(&assignment), Some("t"), None)
            .await
            .unwrap();

        let response = app.oneshot(get("/submissions")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let row = &json.as_array().unwrap()[0];
        assert_eq!(row["studentId"], "s1");
        assert_eq!(row["assignmentId"], assignment.id);
        assert_eq!(row["submissionText"], "t");
        assert_eq!(row["fileURL"], serde_json::Value::Null);
        assert_eq!(row["status"], "Submitted");
        assert_eq!(row["feedback"], serde_json::Value::Null);
        assert!(row["_id"].as_str().is_some());
    }

    /// Test Case: Per-student listing filters and sorts newest first
    #[tokio::test]
    async fn test_list_submissions_by_student() {
        let (app, app_state) = make_test_app().await;
        let db = app_state.db();
        let assignment = seed_assignment(db, "A").await;

        let first = SubmissionModel::create(db, "s1", &id_of(&assignment), Some("1"), None)
            .await
            .unwrap();
        SubmissionModel::create(db, "s2", &id_of(&assignment), Some("x"), None)
            .await
            .unwrap();
        let second = SubmissionModel::create(db, "s1", &id_of(&assignment), Some("2"), None)
            .await
            .unwrap();

        let response = app.clone().oneshot(get("/submissions/s1")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let ids: Vec<_> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["_id"].as_str().unwrap().to_owned())
            .collect();
        assert_eq!(ids, vec![second.id, first.id]);

        let response = app.oneshot(get("/submissions/nobody")).await.unwrap();
        assert_eq!(body_json(response).await, json!([]));
    }

    /// Test Case: Enriched listing joins assignment and student
    #[tokio::test]
    async fn test_list_submissions_with_detail() {
        let (app, app_state) = make_test_app().await;
        let db = app_state.db();
        let student = UserModel::create(db, "Ada", "ada@arena.dev", "pw", "student")
            .await
            .unwrap();
        let assignment = seed_assignment(db, "Linked lists").await;

        SubmissionModel::create(db, &student.id, &id_of(&assignment), Some("note"), Some("https://f"))
            .await
            .unwrap();
        // Dangling assignment reference is dropped from the joined view.
        SubmissionModel::create(db, &student.id, &DocumentId::new(), None, None)
            .await
            .unwrap();

        let response = app
            .oneshot(get(&format!("/submissions/student/{}", student.id)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let rows = json.as_array().unwrap();
        assert_eq!(rows.len(), 1);

        let row = &rows[0];
        assert_eq!(row["studentId"], student.id);
        assert_eq!(row["studentName"], "Ada");
        assert_eq!(row["assignmentId"], assignment.id);
        assert_eq!(row["assignmentTitle"], "Linked lists");
        assert_eq!(row["assignmentDeadline"], "2025-06-30T23:59:00+00:00");
        assert_eq!(row["submissionUrl"], "https://f");
        assert_eq!(row["note"], "note");
        assert_eq!(row["status"], "Submitted");
        assert!(row["id"].as_str().is_some());
    }

    /// Test Case: Unknown student keeps rows but omits studentName
    #[tokio::test]
    async fn test_list_submissions_with_detail_unknown_student() {
        let (app, app_state) = make_test_app().await;
        let assignment = seed_assignment(app_state.db(), "A").await;
        SubmissionModel::create(app_state.db(), "ghost", &id_of(&assignment), None, None)
            .await
            .unwrap();

        let response = app.oneshot(get("/submissions/student/ghost")).await.unwrap();
        let json = body_json(response).await;
        let row = &json.as_array().unwrap()[0];
        assert!(row.get("studentName").is_none());
        assert_eq!(row["assignmentTitle"], "A");
    }

    /// Test Case: JSON grading route updates only what was sent
    #[tokio::test]
    async fn test_put_submission_partial_update() {
        let (app, app_state) = make_test_app().await;
        let db = app_state.db();
        let assignment = seed_assignment(db, "A").await;
        let submission = SubmissionModel::create(db, "s1", &id_of(&assignment), None, None)
            .await
            .unwrap();
        let id = DocumentId::parse(&submission.id).unwrap();
        let uri = format!("/submissions/{}", submission.id);

        let response = app
            .clone()
            .oneshot(json_request("PUT", &uri, json!({ "status": "Graded" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["message"], "Submission updated successfully");

        let after = SubmissionModel::find_by_id(db, &id).await.unwrap().unwrap();
        assert_eq!(after.status, "Graded");
        assert_eq!(after.feedback, None);

        let response = app
            .oneshot(json_request("PUT", &uri, json!({ "feedback": "Good", "status": null })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let after = SubmissionModel::find_by_id(db, &id).await.unwrap().unwrap();
        assert_eq!(after.status, "Graded");
        assert_eq!(after.feedback.as_deref(), Some("Good"));
    }

    /// Test Case: Empty update, unknown id, malformed id
    #[tokio::test]
    async fn test_put_submission_errors() {
        let (app, app_state) = make_test_app().await;
        let assignment = seed_assignment(app_state.db(), "A").await;
        let submission =
            SubmissionModel::create(app_state.db(), "s1", &id_of(&assignment), None, None)
                .await
                .unwrap();

        let response = app
            .clone()
            .oneshot(json_request(
                "PUT",
                &format!("/submissions/{}", submission.id),
                json!({ "feedback": "", "status": null }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = app
            .clone()
            .oneshot(json_request(
                "PUT",
                &format!("/submissions/{}", DocumentId::new()),
                json!({ "status": "Graded" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["message"], "Submission not found");

        let response = app
            .oneshot(json_request("PUT", "/submissions/zzz", json!({ "status": "Graded" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
