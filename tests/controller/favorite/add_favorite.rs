use axum::{
    body::Bytes,
    extract::State,
    http::{header::CONTENT_TYPE, HeaderMap, HeaderValue, StatusCode},
    response::IntoResponse,
};
use holonet::server::{
    controller::{
        extract::{ApiPath, RecordId},
        favorite::add_favorite,
    },
    error::Error,
};
use sea_orm::{EntityTrait, PaginatorTrait};
use serde_json::json;

use super::*;

fn json_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers
}

fn body(json: &'static str) -> Bytes {
    Bytes::from_static(json.as_bytes())
}

/// Expect 201 with the favorite stored for the user
#[tokio::test]
async fn adds_favorite() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_user(1)
        .with_mock_planet(5)
        .build()
        .await?;

    let result = add_favorite(
        State(test.into_app_state()),
        ApiPath(("planet".to_string(), RecordId(5))),
        json_headers(),
        body(r#"{"user_id": 1}"#),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(
        json_body(resp).await,
        json!({ "message": "Favorite planet added successfully" })
    );
    let favorite = entity::prelude::Favorite::find().one(&test.db).await?;
    assert!(matches!(
        favorite,
        Some(ref f) if f.user_id == 1 && f.favorite_type == "planet" && f.favorite_id == 5
    ));

    Ok(())
}

/// Expect 409 without inserting when the record is already a favorite of the user
#[tokio::test]
async fn conflicts_for_existing_favorite() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_user(1)
        .with_favorite(1, "vehicle", 4)
        .build()
        .await?;

    let result = add_favorite(
        State(test.into_app_state()),
        ApiPath(("vehicle".to_string(), RecordId(4))),
        json_headers(),
        body(r#"{"user_id": 1}"#),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    assert_eq!(
        json_body(resp).await,
        json!({ "message": "Vehicle is already a favorite for this user" })
    );
    assert_eq!(entity::prelude::Favorite::find().count(&test.db).await?, 1);

    Ok(())
}

/// Expect 400 with the matching message for each invalid body
#[tokio::test]
async fn rejects_invalid_bodies() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_user(1)
        .build()
        .await?;

    let cases = [
        ("", "You must send information inside the body"),
        ("not json", "You must send information inside the body"),
        (r#"{"id": 1}"#, "You must send the user id"),
        (r#"{"user_id": "1"}"#, "The user id must be an integer"),
    ];

    for (request_body, message) in cases {
        let result = add_favorite(
            State(test.into_app_state()),
            ApiPath(("character".to_string(), RecordId(10))),
            json_headers(),
            body(request_body),
        )
        .await;

        assert!(matches!(result, Err(Error::FavoriteError(_))));
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(resp).await["error"], json!(message));
    }
    assert_eq!(entity::prelude::Favorite::find().count(&test.db).await?, 0);

    Ok(())
}

/// Expect 404 for a favorite type other than planet, character or vehicle
#[tokio::test]
async fn rejects_unknown_favorite_type() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_user(1)
        .build()
        .await?;

    let result = add_favorite(
        State(test.into_app_state()),
        ApiPath(("starship".to_string(), RecordId(1))),
        json_headers(),
        body(r#"{"user_id": 1}"#),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        json_body(resp).await["error"],
        json!("Unknown favorite type 'starship'")
    );

    Ok(())
}

/// Expect a 500 response when the user does not exist due to the foreign key
#[tokio::test]
async fn fails_for_nonexistent_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let result = add_favorite(
        State(test.into_app_state()),
        ApiPath(("planet".to_string(), RecordId(5))),
        json_headers(),
        body(r#"{"user_id": 7}"#),
    )
    .await;

    assert!(matches!(result, Err(Error::DbErr(_))));
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
