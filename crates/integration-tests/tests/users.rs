//! Integration tests for user management.

use reqwest::{Method, StatusCode};
use serde_json::{Value, json};

use user_homes_api::models::User;
use user_homes_integration_tests::TestContext;

const BAD_IDS: [&str; 5] = ["abc", "1.5", "-1", "-20", "1e2"];

#[tokio::test]
async fn test_list_seeded_users() {
    let ctx = TestContext::seeded().await;
    let response = ctx.send(Method::GET, "/api/users", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let users: Vec<User> = response.json().await.expect("users");
    let names: Vec<_> = users.iter().filter_map(|u| u.name.as_deref()).collect();
    assert_eq!(names, vec!["Juan", "María", "Paco"]);
}

#[tokio::test]
async fn test_create_then_fetch_by_sequential_id() {
    let ctx = TestContext::seeded().await;

    let (status, body) = ctx
        .send_json(
            Method::POST,
            "/api/users",
            Some(&json!({"name": "Lucía", "surname": "Gómez"})),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({}));

    let (status, body) = ctx.send_json(Method::GET, "/api/users/4", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": 4, "name": "Lucía", "surname": "Gómez"}));
}

#[tokio::test]
async fn test_create_rejects_bad_bodies() {
    let ctx = TestContext::seeded().await;
    let bodies = [
        json!({"name": "Solo"}),
        json!({"name": "", "surname": "Vacío"}),
        json!({"name": 1, "surname": "Número"}),
        json!({"name": null, "surname": "Nulo"}),
        json!({}),
    ];

    for body in &bodies {
        let (status, response) = ctx.send_json(Method::POST, "/api/users", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
        assert_eq!(response["msg"], "Invalid body parameters");
    }

    let (_, users) = ctx.send_json(Method::GET, "/api/users", None).await;
    assert_eq!(users.as_array().map(Vec::len), Some(3));
}

#[tokio::test]
async fn test_invalid_ids_are_rejected_everywhere() {
    let ctx = TestContext::seeded().await;
    let name = json!({"name": "X", "surname": "Y"});
    let home = json!({"street": "S", "city": "C", "country": "K"});

    for id in BAD_IDS {
        let cases: [(Method, String, Option<&Value>); 9] = [
            (Method::GET, format!("/api/users/{id}"), None),
            (Method::PATCH, format!("/api/users/{id}"), Some(&name)),
            (Method::PUT, format!("/api/users/{id}"), Some(&name)),
            (Method::DELETE, format!("/api/users/{id}"), None),
            (Method::GET, format!("/api/users/{id}/homes"), None),
            (Method::POST, format!("/api/users/{id}/homes"), Some(&home)),
            (Method::PATCH, format!("/api/users/1/homes/{id}"), Some(&home)),
            (Method::PUT, format!("/api/users/{id}/homes/1"), Some(&home)),
            (Method::DELETE, format!("/api/users/2/homes/{id}"), None),
        ];

        for (method, path, body) in cases {
            let (status, response) = ctx.send_json(method.clone(), &path, body).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{method} {path}");
            assert!(
                response["msg"]
                    .as_str()
                    .is_some_and(|msg| msg.starts_with("Invalid")),
                "{method} {path}: {response}"
            );
        }
    }
}

#[tokio::test]
async fn test_get_unknown_user() {
    let ctx = TestContext::seeded().await;
    let (status, body) = ctx.send_json(Method::GET, "/api/users/404", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["msg"], "User not found");
}

#[tokio::test]
async fn test_patch_changes_only_given_fields() {
    let ctx = TestContext::seeded().await;

    let (status, body) = ctx
        .send_json(Method::PATCH, "/api/users/3", Some(&json!({"name": "X"})))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({}));

    let (_, user) = ctx.send_json(Method::GET, "/api/users/3", None).await;
    assert_eq!(user, json!({"id": 3, "name": "X", "surname": "Fernández"}));
}

#[tokio::test]
async fn test_patch_rejects_empty_string() {
    let ctx = TestContext::seeded().await;
    let (status, _) = ctx
        .send_json(Method::PATCH, "/api/users/3", Some(&json!({"surname": ""})))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, user) = ctx.send_json(Method::GET, "/api/users/3", None).await;
    assert_eq!(user["surname"], "Fernández");
}

#[tokio::test]
async fn test_put_requires_both_fields() {
    let ctx = TestContext::seeded().await;

    let (status, _) = ctx
        .send_json(Method::PUT, "/api/users/1", Some(&json!({"name": "X"})))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = ctx
        .send_json(
            Method::PUT,
            "/api/users/1",
            Some(&json!({"name": "X", "surname": "Y"})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, users) = ctx.send_json(Method::GET, "/api/users", None).await;
    assert_eq!(users[0], json!({"id": 1, "name": "X", "surname": "Y"}));
}

#[tokio::test]
async fn test_put_unknown_user() {
    let ctx = TestContext::seeded().await;
    let (status, body) = ctx
        .send_json(
            Method::PUT,
            "/api/users/10",
            Some(&json!({"name": "X", "surname": "Y"})),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["msg"], "User not found");
}

#[tokio::test]
async fn test_delete_user_without_homes() {
    let ctx = TestContext::seeded().await;

    let (status, body) = ctx.send_json(Method::DELETE, "/api/users/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({}));

    let (status, _) = ctx.send_json(Method::GET, "/api/users/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = ctx.send_json(Method::DELETE, "/api/users/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_user_with_homes_conflicts() {
    let ctx = TestContext::seeded().await;

    let (status, body) = ctx.send_json(Method::DELETE, "/api/users/2", None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["msg"], "User has remaining homes");

    let (status, user) = ctx.send_json(Method::GET, "/api/users/2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(user["name"], "María");

    let (_, homes) = ctx.send_json(Method::GET, "/api/users/2/homes", None).await;
    assert_eq!(homes.as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_deleted_ids_are_not_reused() {
    let ctx = TestContext::seeded().await;
    let user = json!({"name": "A", "surname": "B"});

    ctx.send(Method::POST, "/api/users", Some(&user)).await;
    let (status, _) = ctx.send_json(Method::DELETE, "/api/users/4", None).await;
    assert_eq!(status, StatusCode::OK);

    let response = ctx.send(Method::POST, "/api/users", Some(&user)).await;
    assert_eq!(
        response.headers()["location"].to_str().ok(),
        Some("/api/users/5")
    );
}
