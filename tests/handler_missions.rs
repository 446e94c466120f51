mod common;

use serde_json::json;
use sqlx::SqlitePool;

#[sqlx::test]
async fn test_create_mission_success(pool: SqlitePool) {
    let server = common::make_server(pool.clone());

    let scientist_id = common::create_test_scientist(&pool, "Ada", "Astrophysics").await;
    let planet_id = common::create_test_planet(&pool, "Kepler-442b", "Kepler-442").await;

    let response = server
        .post("/missions")
        .json(&json!({
            "name": "Kepler Flyby",
            "scientist_id": scientist_id,
            "planet_id": planet_id
        }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["name"], "Kepler Flyby");
    assert_eq!(body["planet_id"], planet_id);
    assert_eq!(body["scientist_id"], scientist_id);
    assert_eq!(body["scientist"]["name"], "Ada");
    assert_eq!(body["planet"]["name"], "Kepler-442b");
}

#[sqlx::test]
async fn test_create_mission_nested_parents_have_no_missions(pool: SqlitePool) {
    let server = common::make_server(pool.clone());

    let scientist_id = common::create_test_scientist(&pool, "Ada", "Astrophysics").await;
    let planet_id = common::create_test_planet(&pool, "Kepler-442b", "Kepler-442").await;

    let response = server
        .post("/missions")
        .json(&json!({
            "name": "Kepler Flyby",
            "scientist_id": scientist_id,
            "planet_id": planet_id
        }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);

    let body = response.json::<serde_json::Value>();
    assert!(body["scientist"].get("missions").is_none());
    assert!(body["planet"].get("missions").is_none());
}

#[sqlx::test]
async fn test_create_mission_empty_name(pool: SqlitePool) {
    let server = common::make_server(pool.clone());

    let scientist_id = common::create_test_scientist(&pool, "Ada", "Astrophysics").await;
    let planet_id = common::create_test_planet(&pool, "Kepler-442b", "Kepler-442").await;

    let response = server
        .post("/missions")
        .json(&json!({
            "name": "",
            "scientist_id": scientist_id,
            "planet_id": planet_id
        }))
        .await;

    response.assert_status(axum::http::StatusCode::BAD_REQUEST);

    let body = response.json::<serde_json::Value>();
    assert!(!body["errors"].as_array().unwrap().is_empty());
}

#[sqlx::test]
async fn test_create_mission_null_planet_id(pool: SqlitePool) {
    let server = common::make_server(pool.clone());

    let scientist_id = common::create_test_scientist(&pool, "Ada", "Astrophysics").await;

    let response = server
        .post("/missions")
        .json(&json!({
            "name": "Kepler Flyby",
            "scientist_id": scientist_id,
            "planet_id": null
        }))
        .await;

    response.assert_status(axum::http::StatusCode::BAD_REQUEST);

    let body = response.json::<serde_json::Value>();
    assert!(body["errors"].is_array());
}

#[sqlx::test]
async fn test_create_mission_missing_scientist_id(pool: SqlitePool) {
    let server = common::make_server(pool.clone());

    let planet_id = common::create_test_planet(&pool, "Kepler-442b", "Kepler-442").await;

    let response = server
        .post("/missions")
        .json(&json!({ "name": "Kepler Flyby", "planet_id": planet_id }))
        .await;

    response.assert_status(axum::http::StatusCode::BAD_REQUEST);

    let body = response.json::<serde_json::Value>();
    assert!(body["errors"].is_array());
}

#[sqlx::test]
async fn test_create_mission_unknown_scientist(pool: SqlitePool) {
    let server = common::make_server(pool.clone());

    let planet_id = common::create_test_planet(&pool, "Kepler-442b", "Kepler-442").await;

    let response = server
        .post("/missions")
        .json(&json!({
            "name": "Kepler Flyby",
            "scientist_id": 999,
            "planet_id": planet_id
        }))
        .await;

    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
}

#[sqlx::test]
async fn test_create_mission_unknown_planet(pool: SqlitePool) {
    let server = common::make_server(pool.clone());

    let scientist_id = common::create_test_scientist(&pool, "Ada", "Astrophysics").await;

    let response = server
        .post("/missions")
        .json(&json!({
            "name": "Kepler Flyby",
            "scientist_id": scientist_id,
            "planet_id": 999
        }))
        .await;

    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
}
