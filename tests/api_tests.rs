use axum::{
    Json, Router,
    body::Body,
    extract::Query,
    http::{Request, StatusCode},
    response::IntoResponse,
    routing::get,
};
use game_cart::config::Config;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::time::Duration;
use tower::ServiceExt;

/// Stand-in for cheapshark.com. Special keywords trigger failure modes.
async fn upstream_games(Query(params): Query<HashMap<String, String>>) -> axum::response::Response {
    if let Some(id) = params.get("id") {
        if id == "258010" {
            return Json(json!({
                "info": {"title": "Minecraft Legends"},
                "cheapestPriceEver": {"price": "39.99"},
            }))
            .into_response();
        }
        return StatusCode::NOT_FOUND.into_response();
    }

    match params.get("title").map(String::as_str) {
        Some("slow") => {
            tokio::time::sleep(Duration::from_secs(3)).await;
            Json(json!([])).into_response()
        }
        Some("broken") => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        Some(title) if title.contains("echo") => Json(json!([
            {"external": title, "gameID": "1", "cheapest": "0.99"},
        ]))
        .into_response(),
        _ => Json(json!([
            {"external": "Minecraft Legends", "gameID": "258010", "cheapest": "39.99"},
            {"external": "Minecraft Dungeons", "gameID": "234902", "cheapest": "19.99"},
            {"external": "Minecraft Dungeons (XBOX)", "gameID": "225056", "cheapest": "19.99"},
            {"external": "Minecraft Dungeons: Ultimate DLC Bundle", "gameID": "234200", "cheapest": "19.99"},
        ]))
        .into_response(),
    }
}

async fn spawn_upstream() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let router = Router::new().route("/api/1.0/games", get(upstream_games));
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}/api/1.0/")
}

async fn spawn_app() -> Router {
    let mut config = Config::default();
    config.general.database_path = "sqlite::memory:".to_string();
    config.cheapshark.base_url = spawn_upstream().await;
    config.cheapshark.request_timeout_seconds = 1;

    let state = game_cart::api::create_app_state_from_config(config)
        .await
        .expect("Failed to create app state");
    game_cart::api::router(state)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn test_health() {
    let app = spawn_app().await;

    let (status, body) = send(&app, "GET", "/api/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "healthy"}));

    let (status, body) = send(&app, "GET", "/api/health/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["database"], true);
}

#[tokio::test]
async fn test_account_lifecycle() {
    let app = spawn_app().await;
    let alice = json!({"username": "alice", "password": "secret1"});

    let (status, body) = send(&app, "POST", "/api/create-account", Some(alice.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);

    let (status, _) = send(&app, "POST", "/api/login", Some(alice.clone())).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        &app,
        "POST",
        "/api/login",
        Some(json!({"username": "alice", "password": "wrong"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["success"], false);

    let (status, _) = send(
        &app,
        "POST",
        "/api/update-password",
        Some(json!({"username": "alice", "newPassword": "secret2"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, "POST", "/api/login", Some(alice)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(
        &app,
        "POST",
        "/api/login",
        Some(json!({"username": "alice", "password": "secret2"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_duplicate_account_is_conflict() {
    let app = spawn_app().await;

    let (status, _) = send(
        &app,
        "POST",
        "/api/create-account",
        Some(json!({"username": "testuser", "password": "one"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(
        &app,
        "POST",
        "/api/create-account",
        Some(json!({"username": "testuser", "password": "two"})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "User with username 'testuser' already exists");
}

#[tokio::test]
async fn test_missing_input_is_bad_request() {
    let app = spawn_app().await;

    for (uri, body) in [
        ("/api/create-account", json!({"username": "alice"})),
        ("/api/create-account", json!({"password": "secret1"})),
        ("/api/login", json!({"username": "", "password": "secret1"})),
        ("/api/update-password", json!({"username": "alice"})),
        ("/api/games", json!({"name": "No Id", "price": 1.0})),
    ] {
        let (status, _) = send(&app, "POST", uri, Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
    }

    let request = Request::builder()
        .method("POST")
        .uri("/api/login")
        .header("Content-Type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_user() {
    let app = spawn_app().await;

    let (status, _) = send(
        &app,
        "POST",
        "/api/login",
        Some(json!({"username": "nonexistentuser", "password": "password"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = send(
        &app,
        "POST",
        "/api/update-password",
        Some(json!({"username": "nonexistentuser", "newPassword": "newpassword"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "User nonexistentuser not found");
}

#[tokio::test]
async fn test_search_games() {
    let app = spawn_app().await;

    let (status, body) = send(&app, "GET", "/api/search-games/minecraft", None).await;
    assert_eq!(status, StatusCode::OK);

    let results = body["data"].as_array().unwrap();
    assert_eq!(results.len(), 4);
    assert_eq!(
        results[0],
        json!({"id": "258010", "name": "Minecraft Legends", "price": "39.99"})
    );
}

#[tokio::test]
async fn test_search_keyword_reaches_upstream_as_typed() {
    let app = spawn_app().await;

    let (status, body) = send(&app, "GET", "/api/search-games/%20echo%20", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["name"], " echo ");

    let (status, _) = send(&app, "GET", "/api/search-games/%20%20", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_search_games_upstream_failures() {
    let app = spawn_app().await;

    let (status, body) = send(&app, "GET", "/api/search-games/broken", None).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["success"], false);

    let (status, _) = send(&app, "GET", "/api/search-games/slow", None).await;
    assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
}

#[tokio::test]
async fn test_game_info() {
    let app = spawn_app().await;

    let (status, body) = send(&app, "GET", "/api/game-info/258010", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], "258010");
    assert_eq!(body["data"]["name"], "Minecraft Legends");
    assert_eq!(body["data"]["price"], "39.99");

    let (status, body) = send(&app, "GET", "/api/game-info/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"].is_null());

    let (status, _) = send(&app, "GET", "/api/game-info/0", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_games_crud() {
    let app = spawn_app().await;

    let forza = json!({"id": 1, "name": "Forza Horizon 5", "price": 59.99});
    let zelda = json!({"id": 2, "name": "Legend of Zelda: Tears of the Kingdom", "price": 39.99});

    let (status, _) = send(&app, "POST", "/api/games", Some(zelda.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, _) = send(&app, "POST", "/api/games", Some(forza.clone())).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, "POST", "/api/games", Some(forza)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Game with id 1 already exists");

    let (status, body) = send(&app, "GET", "/api/games", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!([
        {"id": 1, "name": "Forza Horizon 5", "price": 59.99},
        {"id": 2, "name": "Legend of Zelda: Tears of the Kingdom", "price": 39.99},
    ]));

    let (status, _) = send(&app, "DELETE", "/api/games/1", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, "DELETE", "/api/games/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Game with id 1 not found");

    let (status, body) = send(&app, "GET", "/api/games", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let (status, _) = send(
        &app,
        "POST",
        "/api/games",
        Some(json!({"id": 3, "name": "Negative", "price": -1.0})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_non_positive_game_ids_are_rejected() {
    let app = spawn_app().await;

    for id in [-5, 0] {
        let (status, _) = send(
            &app,
            "POST",
            "/api/games",
            Some(json!({"id": id, "name": "Invalid", "price": 1.0})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "create {id}");

        let (status, _) = send(&app, "DELETE", &format!("/api/games/{id}"), None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "delete {id}");

        let (status, _) = send(&app, "GET", &format!("/api/game-info/{id}"), None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "game-info {id}");
    }

    let (_, body) = send(&app, "GET", "/api/games", None).await;
    assert_eq!(body["data"], json!([]));
}
