#[cfg(test)]
mod tests {
    use crate::helpers::{body_text, get, make_test_app};
    use axum::http::StatusCode;
    use tower::ServiceExt;

    #[tokio::test]
    async fn root_serves_the_banner() {
        let (app, _) = make_test_app().await;

        let response = app.oneshot(get("/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "Assignment Arena Server is Running ✅");
    }

    #[tokio::test]
    async fn unknown_routes_are_404() {
        let (app, _) = make_test_app().await;

        let response = app.oneshot(get("/nowhere")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
