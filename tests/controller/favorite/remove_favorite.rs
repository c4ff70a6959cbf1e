use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use holonet::server::{
    controller::{
        extract::{ApiPath, RecordId},
        favorite::remove_favorite,
    },
    error::Error,
};
use sea_orm::EntityTrait;
use serde_json::json;

use super::*;

/// Expect 200 with the favorite deleted
#[tokio::test]
async fn removes_favorite() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_user(1)
        .with_favorite(1, "character", 10)
        .build()
        .await?;

    let result = remove_favorite(
        State(test.into_app_state()),
        ApiPath(("character".to_string(), RecordId(10))),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        json_body(resp).await,
        json!({ "msg": "Favorite character deleted successfully" })
    );
    assert!(entity::prelude::Favorite::find()
        .one(&test.db)
        .await?
        .is_none());

    Ok(())
}

/// Expect the favorite of another user to be removed since removal is not scoped by user
#[tokio::test]
async fn removes_favorite_of_any_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_user(1)
        .with_mock_user(2)
        .with_favorite(2, "planet", 5)
        .with_favorite(1, "planet", 5)
        .build()
        .await?;

    let result = remove_favorite(
        State(test.into_app_state()),
        ApiPath(("planet".to_string(), RecordId(5))),
    )
    .await;

    assert!(result.is_ok());
    let remaining = entity::prelude::Favorite::find().all(&test.db).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].user_id, 1);

    Ok(())
}

/// Expect Error with a 400 response when the record is not a favorite
#[tokio::test]
async fn fails_when_not_favorited() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let result = remove_favorite(
        State(test.into_app_state()),
        ApiPath(("vehicle".to_string(), RecordId(4))),
    )
    .await;

    assert!(matches!(result, Err(Error::FavoriteError(_))));
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(resp).await,
        json!({ "error": "The vehicle doesn't exist", "status_code": 400 })
    );

    Ok(())
}

/// Expect 404 for an unknown favorite type
#[tokio::test]
async fn rejects_unknown_favorite_type() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let result = remove_favorite(
        State(test.into_app_state()),
        ApiPath(("people".to_string(), RecordId(4))),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
