//! Integration tests for homes nested under their owner.

use reqwest::{Method, StatusCode};
use serde_json::{Value, json};

use user_homes_api::models::Home;
use user_homes_integration_tests::TestContext;

fn madrid() -> Value {
    json!({"street": "La Gran Vía", "city": "Madrid", "country": "Spain"})
}

async fn homes_of(ctx: &TestContext, path: &str) -> Vec<Home> {
    let response = ctx.send(Method::GET, path, None).await;
    assert_eq!(response.status(), StatusCode::OK);
    response.json().await.expect("homes")
}

fn ids(homes: &[Home]) -> Vec<i64> {
    homes.iter().map(|h| h.id.as_i64()).collect()
}

#[tokio::test]
async fn test_list_user_homes() {
    let ctx = TestContext::seeded().await;

    assert_eq!(ids(&homes_of(&ctx, "/api/users/2/homes").await), vec![1, 4]);
    assert_eq!(ids(&homes_of(&ctx, "/api/users/3/homes").await), vec![2]);
    assert!(homes_of(&ctx, "/api/users/1/homes").await.is_empty());
}

#[tokio::test]
async fn test_list_homes_of_unknown_user() {
    let ctx = TestContext::seeded().await;
    let (status, body) = ctx.send_json(Method::GET, "/api/users/9/homes", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["msg"], "User not found");
}

#[tokio::test]
async fn test_filter_is_exact_and_case_sensitive() {
    let ctx = TestContext::seeded().await;
    for body in [
        madrid(),
        json!({"street": "Calle Mayor", "city": "Madrid", "country": "Spain"}),
        json!({"street": "Rambla", "city": "Barcelona", "country": "Spain"}),
    ] {
        let (status, _) = ctx
            .send_json(Method::POST, "/api/users/1/homes", Some(&body))
            .await;
        assert_eq!(status, StatusCode::CREATED);
    }
    // Another user's home in Madrid must not leak into user 1's results.
    ctx.send(Method::POST, "/api/users/2/homes", Some(&madrid()))
        .await;

    let homes = homes_of(&ctx, "/api/users/1/homes?city=Madrid").await;
    assert_eq!(homes.len(), 2);
    assert!(homes.iter().all(|h| h.city.as_deref() == Some("Madrid")));
    assert!(homes.iter().all(|h| h.user_id.map(|id| id.as_i64()) == Some(1)));

    assert!(homes_of(&ctx, "/api/users/1/homes?city=madrid").await.is_empty());
    assert!(homes_of(&ctx, "/api/users/1/homes?city=Madri").await.is_empty());

    let homes = homes_of(&ctx, "/api/users/1/homes?city=Madrid&street=Calle%20Mayor").await;
    assert_eq!(homes.len(), 1);

    let homes = homes_of(&ctx, "/api/users/1/homes?country=Spain").await;
    assert_eq!(homes.len(), 3);
}

#[tokio::test]
async fn test_create_home_for_missing_user_is_allowed() {
    let ctx = TestContext::seeded().await;
    let response = ctx
        .send(Method::POST, "/api/users/42/homes", Some(&madrid()))
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        response.headers()["location"].to_str().ok(),
        Some("/api/users/42/homes/5")
    );
}

#[tokio::test]
async fn test_create_home_requires_all_fields() {
    let ctx = TestContext::seeded().await;
    let (status, body) = ctx
        .send_json(
            Method::POST,
            "/api/users/1/homes",
            Some(&json!({"street": "S", "city": "C"})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["msg"], "Invalid body parameters");
}

#[tokio::test]
async fn test_patch_home() {
    let ctx = TestContext::seeded().await;
    let (status, body) = ctx
        .send_json(
            Method::PATCH,
            "/api/users/2/homes/4",
            Some(&json!({"city": "Sevilla"})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({}));

    let homes = homes_of(&ctx, "/api/users/2/homes").await;
    assert_eq!(ids(&homes), vec![1, 4]);
    assert_eq!(homes[1].street.as_deref(), Some("Calle D"));
    assert_eq!(homes[1].city.as_deref(), Some("Sevilla"));
    assert_eq!(homes[1].country.as_deref(), Some("Pais D"));
}

#[tokio::test]
async fn test_home_under_other_user_is_not_found() {
    let ctx = TestContext::seeded().await;
    let cases = [
        (Method::PATCH, Some(json!({"city": "X"})), "Home not found"),
        (Method::PUT, Some(madrid()), "Home not found"),
        (Method::DELETE, None, "User home not found"),
    ];

    for (method, body, msg) in cases {
        let (status, response) = ctx
            .send_json(method.clone(), "/api/users/1/homes/4", body.as_ref())
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{method}");
        assert_eq!(response["msg"], msg);
    }
}

#[tokio::test]
async fn test_put_home() {
    let ctx = TestContext::seeded().await;

    let (status, _) = ctx
        .send_json(
            Method::PUT,
            "/api/users/2/homes/1",
            Some(&json!({"street": "Only street"})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = ctx
        .send_json(Method::PUT, "/api/users/2/homes/1", Some(&madrid()))
        .await;
    assert_eq!(status, StatusCode::OK);

    let homes = homes_of(&ctx, "/api/users/2/homes?city=Madrid").await;
    assert_eq!(ids(&homes), vec![1]);
}

#[tokio::test]
async fn test_delete_last_home_unblocks_user_delete() {
    let ctx = TestContext::seeded().await;

    let (status, _) = ctx.send_json(Method::DELETE, "/api/users/3", None).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, body) = ctx
        .send_json(Method::DELETE, "/api/users/3/homes/2", None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({}));

    let (status, _) = ctx.send_json(Method::DELETE, "/api/users/3", None).await;
    assert_eq!(status, StatusCode::OK);
}
