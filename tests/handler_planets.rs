mod common;

use sqlx::SqlitePool;

#[sqlx::test]
async fn test_planets_list_empty(pool: SqlitePool) {
    let server = common::make_server(pool);

    let response = server.get("/planets").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json.as_array().unwrap().len(), 0);
}

#[sqlx::test]
async fn test_planets_list_success(pool: SqlitePool) {
    let server = common::make_server(pool.clone());

    common::create_test_planet(&pool, "Kepler-442b", "Kepler-442").await;
    common::create_test_planet(&pool, "Proxima b", "Proxima Centauri").await;

    let response = server.get("/planets").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let items = json.as_array().unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["name"], "Kepler-442b");
    assert_eq!(items[0]["nearest_star"], "Kepler-442");
    assert!(items[0].get("distance_from_earth").is_some());
}

#[sqlx::test]
async fn test_planets_list_omits_missions(pool: SqlitePool) {
    let server = common::make_server(pool.clone());

    let scientist_id = common::create_test_scientist(&pool, "Ada", "Astrophysics").await;
    let planet_id = common::create_test_planet(&pool, "Kepler-442b", "Kepler-442").await;
    common::create_test_mission(&pool, "Flyby", planet_id, scientist_id).await;

    let response = server.get("/planets").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let items = json.as_array().unwrap();

    assert!(items[0].get("missions").is_none());
}
