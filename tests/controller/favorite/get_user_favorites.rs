use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use holonet::server::{
    controller::{
        extract::{ApiPath, RecordId},
        favorite::get_user_favorites,
    },
    error::Error,
};
use serde_json::json;

use super::*;

/// Expect 200 with only the favorites of the requested user
#[tokio::test]
async fn lists_favorites_of_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_user(1)
        .with_mock_user(2)
        .with_favorite(1, "planet", 5)
        .with_favorite(2, "vehicle", 4)
        .build()
        .await?;

    let result = get_user_favorites(State(test.into_app_state()), ApiPath(RecordId(1))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["msg"], json!("Completed"));
    assert_eq!(
        body["favorites"],
        json!([{ "id": 1, "user_id": 1, "favorite_type": "planet", "favorite_id": 5 }])
    );

    Ok(())
}

/// Expect Error with a 400 response when the user has no favorites
#[tokio::test]
async fn fails_for_user_without_favorites() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_user(1)
        .build()
        .await?;

    let result = get_user_favorites(State(test.into_app_state()), ApiPath(RecordId(1))).await;

    assert!(matches!(result, Err(Error::FavoriteError(_))));
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(resp).await,
        json!({ "error": "User with id 1 has no favorites", "status_code": 400 })
    );

    Ok(())
}

/// Expect the same 400 response for a user that does not exist
#[tokio::test]
async fn fails_for_nonexistent_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let result = get_user_favorites(State(test.into_app_state()), ApiPath(RecordId(42))).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
