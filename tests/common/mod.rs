#![allow(dead_code)]

use axum::Router;
use axum_test::TestServer;
use cosmic_missions::api;
use cosmic_missions::state::AppState;
use sqlx::SqlitePool;

pub async fn create_test_scientist(pool: &SqlitePool, name: &str, field_of_study: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO scientists (name, field_of_study) VALUES (?, ?) RETURNING id",
    )
    .bind(name)
    .bind(field_of_study)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_planet(pool: &SqlitePool, name: &str, nearest_star: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO planets (name, distance_from_earth, nearest_star) VALUES (?, ?, ?) RETURNING id",
    )
    .bind(name)
    .bind(100_i64)
    .bind(nearest_star)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_mission(
    pool: &SqlitePool,
    name: &str,
    planet_id: i64,
    scientist_id: i64,
) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO missions (name, planet_id, scientist_id) VALUES (?, ?, ?) RETURNING id",
    )
    .bind(name)
    .bind(planet_id)
    .bind(scientist_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn count_missions_for_scientist(pool: &SqlitePool, scientist_id: i64) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM missions WHERE scientist_id = ?")
        .bind(scientist_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_scientists(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM scientists")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn make_server(pool: SqlitePool) -> TestServer {
    let state = AppState::from_pool(pool);
    let app: Router = api::routes::routes().with_state(state);
    TestServer::new(app).unwrap()
}
