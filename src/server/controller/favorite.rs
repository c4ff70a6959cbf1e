use axum::{
    body::Bytes,
    extract::State,
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde_json::Value;

use crate::{
    model::{
        api::{ErrorDto, MessageDto, MsgDto},
        favorite::{AddFavoriteDto, FavoriteListDto, FavoriteType},
    },
    server::{
        controller::extract::{ApiPath, RecordId},
        error::{favorite::FavoriteError, Error},
        model::app::AppState,
        service::favorite::{AddFavoriteOutcome, FavoriteService},
    },
};

pub static FAVORITE_TAG: &str = "favorite";

fn parse_favorite_type(favorite_type: &str) -> Result<FavoriteType, FavoriteError> {
    FavoriteType::parse(favorite_type)
        .ok_or_else(|| FavoriteError::UnknownFavoriteType(favorite_type.to_string()))
}

/// Whether the request declares a JSON body, `application/json` or `application/*+json`
fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };

    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}

/// Reads `user_id` from the raw add favorite body
///
/// The body is inspected by hand rather than through `Json<AddFavoriteDto>` so that each
/// failure gets its own message, checked in order: the body must be sent as JSON & be a
/// JSON object, it must contain `user_id` & that value must fit an `i32`.
fn extract_user_id(headers: &HeaderMap, body: &[u8]) -> Result<i32, FavoriteError> {
    if !is_json_content_type(headers) {
        return Err(FavoriteError::MissingBody);
    }

    let Ok(Value::Object(body)) = serde_json::from_slice::<Value>(body) else {
        return Err(FavoriteError::MissingBody);
    };

    let user_id = body.get("user_id").ok_or(FavoriteError::MissingUserId)?;

    user_id
        .as_i64()
        .and_then(|user_id| i32::try_from(user_id).ok())
        .ok_or(FavoriteError::InvalidUserId)
}

/// List the favorites of a user
///
/// # Responses
/// - 200 (Success): `{"msg": "Completed", "favorites": [...]}`
/// - 400 (Bad Request): The user has no favorites
/// - 500 (Internal Server Error): Database error
#[utoipa::path(
    get,
    path = "/users/favorites/{user_id}",
    tag = FAVORITE_TAG,
    params(("user_id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Favorites of the user", body = FavoriteListDto),
        (status = 400, description = "User has no favorites", body = ErrorDto),
        (status = 404, description = "ID is not a non-negative integer", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_favorites(
    State(state): State<AppState>,
    ApiPath(RecordId(user_id)): ApiPath<RecordId>,
) -> Result<impl IntoResponse, Error> {
    let favorite_service = FavoriteService::new(&state.db);

    let favorites = favorite_service.get_user_favorites(user_id).await?;

    Ok((
        StatusCode::OK,
        Json(FavoriteListDto {
            msg: "Completed".to_string(),
            favorites,
        }),
    ))
}

/// Add a planet, character or vehicle to a user's favorites
///
/// Adding a favorite the user already has is answered with 409 and leaves the existing
/// favorite untouched.
///
/// # Responses
/// - 201 (Created): Favorite added
/// - 400 (Bad Request): Body missing or not sent as JSON, missing `user_id` or `user_id` not
///   an integer
/// - 404 (Not Found): Unknown favorite type or an ID that is not a non-negative integer
/// - 409 (Conflict): Already a favorite of the user
/// - 500 (Internal Server Error): Database error, including a `user_id` with no user
#[utoipa::path(
    post,
    path = "/favorite/{favorite_type}/{id}",
    tag = FAVORITE_TAG,
    params(
        ("favorite_type" = FavoriteType, Path, description = "One of `planet`, `character` or `vehicle`"),
        ("id" = i32, Path, description = "ID of the record to favorite")
    ),
    request_body = AddFavoriteDto,
    responses(
        (status = 201, description = "Favorite added", body = MessageDto),
        (status = 400, description = "Invalid request body", body = ErrorDto),
        (status = 404, description = "Unknown favorite type or invalid ID", body = ErrorDto),
        (status = 409, description = "Already a favorite of the user", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite(
    State(state): State<AppState>,
    ApiPath(path): ApiPath<(String, RecordId)>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, Error> {
    let (favorite_type, RecordId(id)) = path;
    let favorite_service = FavoriteService::new(&state.db);

    let favorite_type = parse_favorite_type(&favorite_type)?;
    let user_id = extract_user_id(&headers, &body)?;

    let response = match favorite_service
        .add_favorite(user_id, favorite_type, id)
        .await?
    {
        AddFavoriteOutcome::Added(_) => (
            StatusCode::CREATED,
            Json(MessageDto {
                message: format!("Favorite {} added successfully", favorite_type),
            }),
        ),
        AddFavoriteOutcome::AlreadyFavorite => (
            StatusCode::CONFLICT,
            Json(MessageDto {
                message: format!("{} is already a favorite for this user", favorite_type.label()),
            }),
        ),
    };

    Ok(response)
}

/// Remove a planet, character or vehicle from favorites
///
/// The oldest favorite pointing at the record is removed, whichever user it belongs to.
///
/// # Responses
/// - 200 (Success): Favorite removed
/// - 400 (Bad Request): The record is not a favorite
/// - 404 (Not Found): Unknown favorite type or an ID that is not a non-negative integer
/// - 500 (Internal Server Error): Database error
#[utoipa::path(
    delete,
    path = "/favorite/{favorite_type}/{id}",
    tag = FAVORITE_TAG,
    params(
        ("favorite_type" = FavoriteType, Path, description = "One of `planet`, `character` or `vehicle`"),
        ("id" = i32, Path, description = "ID of the favorited record")
    ),
    responses(
        (status = 200, description = "Favorite removed", body = MsgDto),
        (status = 400, description = "Record is not a favorite", body = ErrorDto),
        (status = 404, description = "Unknown favorite type or invalid ID", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite(
    State(state): State<AppState>,
    ApiPath(path): ApiPath<(String, RecordId)>,
) -> Result<impl IntoResponse, Error> {
    let (favorite_type, RecordId(id)) = path;
    let favorite_service = FavoriteService::new(&state.db);

    let favorite_type = parse_favorite_type(&favorite_type)?;

    favorite_service.remove_favorite(favorite_type, id).await?;

    Ok((
        StatusCode::OK,
        Json(MsgDto {
            msg: format!("Favorite {} deleted successfully", favorite_type),
        }),
    ))
}
