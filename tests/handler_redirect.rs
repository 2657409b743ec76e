mod common;

use alias_shortener::api::routes::routes;
use axum_test::TestServer;

async fn server() -> (TestServer, sqlx::SqlitePool) {
    let pool = common::test_pool().await;
    let state = common::create_test_state(pool.clone());
    let server = TestServer::new(routes().with_state(state)).unwrap();
    (server, pool)
}

#[tokio::test]
async fn test_redirect_success() {
    let (server, pool) = server().await;
    common::insert_url(&pool, "https://example.com/target", "promo").await;

    let response = server.get("/promo").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let (server, _pool) = server().await;

    let response = server.get("/missing").await;

    assert_eq!(response.status_code(), 404);
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_delete_then_redirect_not_found() {
    let (server, pool) = server().await;
    common::insert_url(&pool, "https://example.com", "gone").await;

    let response = server.delete("/gone").await;
    assert_eq!(response.status_code(), 204);

    let response = server.get("/gone").await;
    assert_eq!(response.status_code(), 404);
}

#[tokio::test]
async fn test_delete_unknown_alias() {
    let (server, _pool) = server().await;

    let response = server.delete("/never-existed").await;

    assert_eq!(response.status_code(), 204);
}
