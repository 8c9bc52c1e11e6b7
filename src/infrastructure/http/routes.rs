//! HTTP Routes
//!
//! API 路由定义
//!
//! API Endpoints:
//! - /api/v1/todoItems/                GET    列出所有待办事项
//! - /api/v1/todoItems/completed      GET    列出已完成的待办事项
//! - /api/v1/todoItems/createtodoItem POST   创建待办事项
//! - /api/v1/todoItems/updatetodo/{id} PATCH 更新待办事项
//! - /api/v1/todoItems/delete/{id}    DELETE 删除待办事项
//! - /api/ping                        GET    健康检查
//!
//! 路径沿用既有对外 API（含原有大小写），不做改名

use axum::{
    routing::{delete, get, patch, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/ping", get(handlers::ping))
        // axum 0.7 nesting maps the inner `/` route to the prefix without a
        // trailing slash, so the documented `/api/v1/todoItems/` path would
        // otherwise 404. Serve the list at the trailing-slash path explicitly.
        .route("/api/v1/todoItems/", get(handlers::list_todos))
        .nest("/api/v1/todoItems", todo_routes())
}

/// Todo 路由
fn todo_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::list_todos))
        .route("/completed", get(handlers::list_completed_todos))
        .route("/createtodoItem", post(handlers::create_todo))
        .route("/updatetodo/:id", patch(handlers::update_todo))
        .route("/delete/:id", delete(handlers::delete_todo))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory::InMemoryTodoRepository;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use axum::response::Response;
    use serde_json::{json, Value};
    use tower::util::ServiceExt;

    fn test_app() -> Router {
        let repo = InMemoryTodoRepository::new().arc();
        create_routes().with_state(Arc::new(AppState::new(repo)))
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn empty_request(method: &str, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_ping() {
        let app = test_app();

        let response = app.oneshot(empty_request("GET", "/api/ping")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_list_starts_empty() {
        let app = test_app();

        let response = app
            .oneshot(empty_request("GET", "/api/v1/todoItems/"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!([]));
    }

    #[tokio::test]
    async fn test_create_returns_entity_and_location() {
        let app = test_app();

        let response = app
            .oneshot(json_request(
                "POST",
                "/api/v1/todoItems/createtodoItem",
                json!({"name": "Buy milk"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            response.headers()[header::LOCATION],
            "/api/v1/todoItems/1"
        );

        let body = body_json(response).await;
        assert_eq!(
            body,
            json!({"id": 1, "name": "Buy milk", "isCompleted": false})
        );
    }

    #[tokio::test]
    async fn test_create_without_body_is_bad_request() {
        let app = test_app();

        let response = app
            .oneshot(empty_request("POST", "/api/v1/todoItems/createtodoItem"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_without_name_field_conflicts() {
        let app = test_app();

        // name 字段缺失按空名称处理，走冲突路径而非绑定失败
        let response = app
            .oneshot(json_request(
                "POST",
                "/api/v1/todoItems/createtodoItem",
                json!({"isCompleted": true}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_completed_filter() {
        let app = test_app();

        app.clone()
            .oneshot(json_request(
                "POST",
                "/api/v1/todoItems/createtodoItem",
                json!({"name": "Buy milk"}),
            ))
            .await
            .unwrap();
        app.clone()
            .oneshot(json_request(
                "POST",
                "/api/v1/todoItems/createtodoItem",
                json!({"name": "Walk the dog", "isCompleted": true}),
            ))
            .await
            .unwrap();

        let response = app
            .oneshot(empty_request("GET", "/api/v1/todoItems/completed"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!([{"name": "Walk the dog", "isCompleted": true}])
        );
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let app = test_app();

        let response = app
            .oneshot(json_request(
                "PATCH",
                "/api/v1/todoItems/updatetodo/99",
                json!({"name": "anything", "isCompleted": false}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_update_returns_read_projection() {
        let app = test_app();

        app.clone()
            .oneshot(json_request(
                "POST",
                "/api/v1/todoItems/createtodoItem",
                json!({"name": "Buy milk"}),
            ))
            .await
            .unwrap();

        let response = app
            .oneshot(json_request(
                "PATCH",
                "/api/v1/todoItems/updatetodo/1",
                json!({"name": "Buy oat milk", "isCompleted": true}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({"name": "Buy oat milk", "isCompleted": true})
        );
    }

    #[tokio::test]
    async fn test_delete_unknown_id_conflicts() {
        let app = test_app();

        let response = app
            .oneshot(empty_request("DELETE", "/api/v1/todoItems/delete/42"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    // 端到端场景: 创建 → 重名冲突 → 空名更新冲突 → 删除 → 列表为空
    #[tokio::test]
    async fn test_crud_scenario() {
        let app = test_app();

        // POST {name:"Buy milk"} → 201, {id:1,...}
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/v1/todoItems/createtodoItem",
                json!({"name": "Buy milk"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            body_json(response).await,
            json!({"id": 1, "name": "Buy milk", "isCompleted": false})
        );

        // 重名 POST → 409
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/v1/todoItems/createtodoItem",
                json!({"name": "Buy milk"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        // 空名 PATCH → 409，记录不变
        let response = app
            .clone()
            .oneshot(json_request(
                "PATCH",
                "/api/v1/todoItems/updatetodo/1",
                json!({"name": "", "isCompleted": true}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let response = app
            .clone()
            .oneshot(empty_request("GET", "/api/v1/todoItems/"))
            .await
            .unwrap();
        assert_eq!(
            body_json(response).await,
            json!([{"name": "Buy milk", "isCompleted": false}])
        );

        // DELETE id=1 → 200，返回被删除记录
        let response = app
            .clone()
            .oneshot(empty_request("DELETE", "/api/v1/todoItems/delete/1"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({"name": "Buy milk", "isCompleted": false})
        );

        // GET / → []
        let response = app
            .oneshot(empty_request("GET", "/api/v1/todoItems/"))
            .await
            .unwrap();
        assert_eq!(body_json(response).await, json!([]));
    }
}
