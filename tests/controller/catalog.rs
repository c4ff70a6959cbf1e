//! Tests for the users, planets, people & vehicles endpoints.

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use holonet::server::{
    controller::{
        catalog::{
            get_people, get_person, get_planet, get_planets, get_user, get_users, get_vehicle,
            get_vehicles,
        },
        extract::{ApiPath, RecordId},
    },
    error::Error,
};
use serde_json::json;

use super::*;

/// Expect 200 with every planet listed under `planets` ordered by ID
#[tokio::test]
async fn lists_planets() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_planet(2)
        .with_mock_planet(1)
        .build()
        .await?;

    let result = get_planets(State(test.into_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["msg"], json!("Completed"));
    assert_eq!(body["planets"][0]["id"], json!(1));
    assert_eq!(body["planets"][1]["id"], json!(2));
    assert_eq!(body["planets"][0]["name"], json!("Tatooine"));

    Ok(())
}

/// Expect 200 with an empty list when there are no vehicles
#[tokio::test]
async fn lists_empty_vehicles() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let result = get_vehicles(State(test.into_app_state())).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        json_body(resp).await,
        json!({ "msg": "Completed", "vehicles": [] })
    );

    Ok(())
}

/// Expect characters to be listed under `people`
#[tokio::test]
async fn lists_people() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_character(10)
        .build()
        .await?;

    let result = get_people(State(test.into_app_state())).await;

    let body = json_body(result.unwrap().into_response()).await;
    assert_eq!(body["people"][0]["id"], json!(10));
    assert_eq!(body["people"][0]["name"], json!("Luke Skywalker"));

    Ok(())
}

/// Expect the user listing to never expose passwords
#[tokio::test]
async fn lists_users_without_passwords() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_user(1)
        .build()
        .await?;

    let result = get_users(State(test.into_app_state())).await;

    let body = json_body(result.unwrap().into_response()).await;
    assert_eq!(
        body["users"][0],
        json!({ "id": 1, "email": "user1@holonet.test", "is_active": true })
    );

    Ok(())
}

/// Expect 200 with the record under `<entry>_info` for each detail endpoint
#[tokio::test]
async fn gets_single_records() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_user(3)
        .with_mock_planet(1)
        .with_mock_character(10)
        .with_mock_vehicle(4)
        .build()
        .await?;

    let user = json_body(
        get_user(State(test.into_app_state()), ApiPath(RecordId(3)))
            .await
            .unwrap()
            .into_response(),
    )
    .await;
    assert_eq!(user["user_id"], json!(3));
    assert_eq!(user["user_info"]["email"], json!("user3@holonet.test"));

    let planet = json_body(
        get_planet(State(test.into_app_state()), ApiPath(RecordId(1)))
            .await
            .unwrap()
            .into_response(),
    )
    .await;
    assert_eq!(planet["planet_id"], json!(1));
    assert_eq!(planet["planet_info"]["id"], json!(1));

    let character = json_body(
        get_person(State(test.into_app_state()), ApiPath(RecordId(10)))
            .await
            .unwrap()
            .into_response(),
    )
    .await;
    assert_eq!(character["character_id"], json!(10));
    assert_eq!(character["character_info"]["name"], json!("Luke Skywalker"));

    let vehicle = json_body(
        get_vehicle(State(test.into_app_state()), ApiPath(RecordId(4)))
            .await
            .unwrap()
            .into_response(),
    )
    .await;
    assert_eq!(vehicle["vehicle_id"], json!(4));
    assert_eq!(vehicle["vehicle_info"]["name"], json!("Sand Crawler"));
    assert!(vehicle["vehicle_info"]["pilots"].is_null());

    Ok(())
}

/// Expect Error with a 400 response naming the missing planet
#[tokio::test]
async fn fails_for_nonexistent_planet() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let result = get_planet(State(test.into_app_state()), ApiPath(RecordId(99))).await;

    assert!(matches!(result, Err(Error::CatalogError(_))));
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(resp).await,
        json!({ "error": "The planet id 99 doesn't exist", "status_code": 400 })
    );

    Ok(())
}

/// Expect a 500 response when the tables do not exist
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = get_vehicles(State(test.into_app_state())).await;

    assert!(matches!(result, Err(Error::DbErr(_))));
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
