#[cfg(test)]
mod tests {
    use crate::helpers::{body_json, body_text, json_request, make_test_app};
    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
    };
    use db::models::user::Model as UserModel;
    use serde_json::json;
    use tower::ServiceExt;

    fn ada() -> serde_json::Value {
        json!({
            "name": "Ada Lovelace",
            "email": "ada@arena.dev",
            "password": "hunter22",
            "role": "student"
        })
    }

    /// Test Case: Registering the same email twice only succeeds once
    #[tokio::test]
    async fn test_register_duplicate_email() {
        let (app, app_state) = make_test_app().await;

        let response = app
            .clone()
            .oneshot(json_request("POST", "/register", ada()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "User registered successfully");

        let response = app
            .oneshot(json_request("POST", "/register", ada()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, "User already exists");

        let stored = UserModel::find_by_email(app_state.db(), "ada@arena.dev")
            .await
            .unwrap()
            .unwrap();
        assert_ne!(stored.password, "hunter22");
        assert!(stored.verify_password("hunter22"));
    }

    /// Test Case: Missing or empty fields are rejected in plain text
    #[tokio::test]
    async fn test_register_missing_field() {
        let (app, app_state) = make_test_app().await;

        let body = json!({ "name": "Ada", "email": "ada@arena.dev", "password": "", "role": "student" });
        let response = app.oneshot(json_request("POST", "/register", body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, "password is required");

        assert!(
            UserModel::find_by_email(app_state.db(), "ada@arena.dev")
                .await
                .unwrap()
                .is_none()
        );
    }

    /// Test Case: A body that is not JSON is a 400
    #[tokio::test]
    async fn test_register_malformed_body() {
        let (app, _) = make_test_app().await;

        let req = Request::builder()
            .method("POST")
            .uri("/register")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    /// Test Case: Successful login returns identity fields only
    #[tokio::test]
    async fn test_login_success() {
        let (app, app_state) = make_test_app().await;
        let user = UserModel::create(app_state.db(), "Grace", "grace@arena.dev", "pw123", "instructor")
            .await
            .unwrap();

        let response = app
            .oneshot(json_request(
                "POST",
                "/login",
                json!({ "email": "grace@arena.dev", "password": "pw123" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(
            json,
            json!({
                "id": user.id,
                "name": "Grace",
                "role": "instructor",
                "email": "grace@arena.dev"
            })
        );
    }

    /// Test Case: Wrong password and unknown email
    #[tokio::test]
    async fn test_login_failures() {
        let (app, app_state) = make_test_app().await;
        UserModel::create(app_state.db(), "Grace", "grace@arena.dev", "pw123", "instructor")
            .await
            .unwrap();

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/login",
                json!({ "email": "grace@arena.dev", "password": "nope" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_text(response).await, "Wrong password");

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/login",
                json!({ "email": "ghost@arena.dev", "password": "pw123" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_text(response).await, "User not found");

        let response = app
            .oneshot(json_request("POST", "/login", json!({ "email": "grace@arena.dev" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, "password is required");
    }
}
