/// Integration tests for the TaskHub API
///
/// These tests verify the full system works end-to-end:
/// - Registration, login, and the profile aggregate
/// - Bearer gating on protected routes
/// - Todo create/list/delete, including the 404 contract
/// - Duplicate-email rejection
/// - Ownership cascades on user deletion

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::Duration;
use common::{body_json, json_request, TestContext, TEST_PASSWORD};
use serde_json::json;
use taskhub_shared::auth::jwt::{create_token, Claims};
use taskhub_shared::models::course::{Course, CreateCourse};
use taskhub_shared::models::profile::Profile;
use taskhub_shared::models::todo::{CreateTodo, Todo};
use taskhub_shared::models::user::User;
use tower::Service as _;
use uuid::Uuid;

/// Register → login → profile: the full happy path
#[tokio::test]
async fn test_register_login_profile_flow() {
    let ctx = TestContext::new().await.unwrap();
    let email = common::unique_email();

    // Register
    let request = json_request(
        "POST",
        "/register",
        None,
        Some(json!({ "email": email, "password": TEST_PASSWORD })),
    );
    let response = ctx.app.clone().call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert!(body["success"].is_string());

    // Login with the same credentials
    let request = json_request(
        "POST",
        "/login",
        None,
        Some(json!({ "email": email, "password": TEST_PASSWORD })),
    );
    let response = ctx.app.clone().call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "success");
    assert_eq!(body["data"]["user"]["email"], email);
    let token = body["data"]["access_token"].as_str().unwrap().to_string();
    assert!(!token.is_empty());

    // Fetch the profile aggregate with the issued token
    let request = json_request("GET", "/profile", Some(&format!("Bearer {}", token)), None);
    let response = ctx.app.clone().call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["email"], email);
    assert_eq!(body["profile"]["bio"], "");
    assert_eq!(body["profile"]["github"], "");
    assert_eq!(body["todos"], json!([]));
    assert_eq!(body["courses"], json!([]));

    // Cleanup the registered user as well
    let registered = User::find_by_email(&ctx.db, &email).await.unwrap().unwrap();
    User::delete(&ctx.db, registered.id).await.unwrap();
    ctx.cleanup().await.unwrap();
}

/// Registering the same email twice yields 400 on the second attempt,
/// regardless of password
#[tokio::test]
async fn test_register_duplicate_email() {
    let ctx = TestContext::new().await.unwrap();

    let request = json_request(
        "POST",
        "/register",
        None,
        Some(json!({ "email": ctx.user.email, "password": "another-password" })),
    );
    let response = ctx.app.clone().call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert!(body["error"].is_string());

    ctx.cleanup().await.unwrap();
}

/// A payload with a missing required field answers 400
#[tokio::test]
async fn test_register_missing_field() {
    let ctx = TestContext::new().await.unwrap();

    let request = json_request(
        "POST",
        "/register",
        None,
        Some(json!({ "email": common::unique_email() })),
    );
    let response = ctx.app.clone().call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    ctx.cleanup().await.unwrap();
}

/// Wrong password and unknown email produce identical 401 responses
#[tokio::test]
async fn test_login_rejections_are_indistinguishable() {
    let ctx = TestContext::new().await.unwrap();

    let request = json_request(
        "POST",
        "/login",
        None,
        Some(json!({ "email": ctx.user.email, "password": "wrong-password" })),
    );
    let wrong_password = ctx.app.clone().call(request).await.unwrap();
    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);

    let request = json_request(
        "POST",
        "/login",
        None,
        Some(json!({ "email": common::unique_email(), "password": "wrong-password" })),
    );
    let unknown_email = ctx.app.clone().call(request).await.unwrap();
    assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);

    // Same body for both failure modes: no account-existence leak
    let body_a = body_json(wrong_password).await;
    let body_b = body_json(unknown_email).await;
    assert_eq!(body_a, body_b);

    ctx.cleanup().await.unwrap();
}

/// Create then list: the new todo appears with a fresh unique ID
#[tokio::test]
async fn test_add_and_list_todos() {
    let ctx = TestContext::new().await.unwrap();

    let request = json_request(
        "POST",
        "/todos",
        Some(&ctx.auth_header()),
        Some(json!({ "label": "Buy milk", "done": false })),
    );
    let response = ctx.app.clone().call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let created = body_json(response).await;
    assert_eq!(created["label"], "Buy milk");
    assert_eq!(created["done"], false);
    let id = created["id"].as_str().unwrap().to_string();

    let request = json_request("GET", "/todos", Some(&ctx.auth_header()), None);
    let response = ctx.app.clone().call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let todos = body_json(response).await;
    let todos = todos.as_array().unwrap();
    let found = todos.iter().find(|t| t["id"] == id.as_str()).unwrap();
    assert_eq!(found["label"], "Buy milk");
    assert_eq!(found["done"], false);

    ctx.cleanup().await.unwrap();
}

/// A todo payload missing the done flag answers 400
#[tokio::test]
async fn test_add_todo_missing_field() {
    let ctx = TestContext::new().await.unwrap();

    let request = json_request(
        "POST",
        "/todos",
        Some(&ctx.auth_header()),
        Some(json!({ "label": "No done flag" })),
    );
    let response = ctx.app.clone().call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    ctx.cleanup().await.unwrap();
}

/// Deleting an existing todo succeeds once; deleting again answers 404
/// and removes nothing else
#[tokio::test]
async fn test_delete_todo() {
    let ctx = TestContext::new().await.unwrap();

    let todo = Todo::create(
        &ctx.db,
        ctx.user.id,
        CreateTodo {
            label: "Disposable".to_string(),
            done: false,
        },
    )
    .await
    .unwrap();

    let other = Todo::create(
        &ctx.db,
        ctx.user.id,
        CreateTodo {
            label: "Survivor".to_string(),
            done: true,
        },
    )
    .await
    .unwrap();

    let request = json_request(
        "DELETE",
        &format!("/todos/{}", todo.id),
        Some(&ctx.auth_header()),
        None,
    );
    let response = ctx.app.clone().call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert!(body["success"].is_string());

    // Second delete of the same ID: 404 with an error body
    let request = json_request(
        "DELETE",
        &format!("/todos/{}", todo.id),
        Some(&ctx.auth_header()),
        None,
    );
    let response = ctx.app.clone().call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert!(body["error"].is_string());

    // The other todo is untouched
    let survivor = Todo::find_by_id(&ctx.db, other.id).await.unwrap();
    assert!(survivor.is_some());

    ctx.cleanup().await.unwrap();
}

/// Protected routes reject requests without a valid bearer token
#[tokio::test]
async fn test_bearer_gating() {
    let ctx = TestContext::new().await.unwrap();

    // No Authorization header
    let request = json_request("GET", "/todos", None, None);
    let response = ctx.app.clone().call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Garbage token
    let request = json_request("GET", "/todos", Some("Bearer not-a-token"), None);
    let response = ctx.app.clone().call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Expired token
    let expired_claims = Claims::with_expiration(ctx.user.id, Duration::seconds(-60));
    let expired = create_token(&expired_claims, &ctx.config.jwt.secret).unwrap();
    let request = json_request("GET", "/profile", Some(&format!("Bearer {}", expired)), None);
    let response = ctx.app.clone().call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    ctx.cleanup().await.unwrap();
}

/// Public user lookup returns id and email, 404 for unknown IDs
#[tokio::test]
async fn test_user_info() {
    let ctx = TestContext::new().await.unwrap();

    let request = json_request("GET", &format!("/info/{}", ctx.user.id), None, None);
    let response = ctx.app.clone().call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["id"], ctx.user.id.to_string());
    assert_eq!(body["email"], ctx.user.email);

    let request = json_request("GET", &format!("/info/{}", Uuid::new_v4()), None, None);
    let response = ctx.app.clone().call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    ctx.cleanup().await.unwrap();
}

/// The profile aggregate reflects the user's todos and courses
#[tokio::test]
async fn test_profile_aggregate_with_data() {
    let ctx = TestContext::new().await.unwrap();

    Todo::create(
        &ctx.db,
        ctx.user.id,
        CreateTodo {
            label: "Read chapter 4".to_string(),
            done: false,
        },
    )
    .await
    .unwrap();

    let course = Course::create(
        &ctx.db,
        CreateCourse {
            name: "Intro to Databases".to_string(),
        },
    )
    .await
    .unwrap();
    Course::enroll(&ctx.db, ctx.user.id, course.id).await.unwrap();

    let request = json_request("GET", "/profile", Some(&ctx.auth_header()), None);
    let response = ctx.app.clone().call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["todos"].as_array().unwrap().len(), 1);
    assert_eq!(body["todos"][0]["label"], "Read chapter 4");
    assert_eq!(body["courses"].as_array().unwrap().len(), 1);
    assert_eq!(body["courses"][0]["name"], "Intro to Databases");

    ctx.cleanup().await.unwrap();
}

/// Deleting a user removes its profile, todos, and enrollments,
/// and leaves courses untouched
#[tokio::test]
async fn test_user_delete_cascades() {
    let ctx = TestContext::new().await.unwrap();

    let todo = Todo::create(
        &ctx.db,
        ctx.user.id,
        CreateTodo {
            label: "Orphan-to-be".to_string(),
            done: false,
        },
    )
    .await
    .unwrap();

    let course = Course::create(
        &ctx.db,
        CreateCourse {
            name: "Cascade Studies".to_string(),
        },
    )
    .await
    .unwrap();
    Course::enroll(&ctx.db, ctx.user.id, course.id).await.unwrap();

    let deleted = User::delete(&ctx.db, ctx.user.id).await.unwrap();
    assert!(deleted);

    // Profile and todo are gone
    let profile = Profile::find_by_user(&ctx.db, ctx.user.id).await.unwrap();
    assert!(profile.is_none());
    let orphan = Todo::find_by_id(&ctx.db, todo.id).await.unwrap();
    assert!(orphan.is_none());

    // Enrollment rows are gone but the course survives
    let enrolled = Course::list_by_user(&ctx.db, ctx.user.id).await.unwrap();
    assert!(enrolled.is_empty());
    let (course_exists,): (bool,) =
        sqlx::query_as("SELECT EXISTS (SELECT 1 FROM courses WHERE id = $1)")
            .bind(course.id)
            .fetch_one(&ctx.db)
            .await
            .unwrap();
    assert!(course_exists);
}

/// A deleted user's still-valid token no longer opens the profile route
#[tokio::test]
async fn test_token_for_deleted_user() {
    let ctx = TestContext::new().await.unwrap();

    User::delete(&ctx.db, ctx.user.id).await.unwrap();

    let request = json_request("GET", "/profile", Some(&ctx.auth_header()), None);
    let response = ctx.app.clone().call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Health endpoint is public and reports database connectivity
#[tokio::test]
async fn test_health_check() {
    let ctx = TestContext::new().await.unwrap();

    let request = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = ctx.app.clone().call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "connected");

    ctx.cleanup().await.unwrap();
}
