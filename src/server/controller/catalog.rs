use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        catalog::{Catalog, CatalogEntryResponseDto, CatalogListDto},
    },
    server::{
        controller::extract::{ApiPath, RecordId},
        error::Error,
        model::app::AppState,
        service::catalog::CatalogService,
    },
};

pub static USER_TAG: &str = "user";
pub static PLANET_TAG: &str = "planet";
pub static PEOPLE_TAG: &str = "people";
pub static VEHICLE_TAG: &str = "vehicle";

async fn list_catalog(state: &AppState, catalog: Catalog) -> Result<impl IntoResponse, Error> {
    let catalog_service = CatalogService::new(&state.db);

    let records = catalog_service.list(catalog).await?;

    Ok((StatusCode::OK, Json(CatalogListDto { catalog, records })))
}

async fn get_catalog_entry(
    state: &AppState,
    catalog: Catalog,
    id: i32,
) -> Result<impl IntoResponse, Error> {
    let catalog_service = CatalogService::new(&state.db);

    let record = catalog_service.get(catalog, id).await?;

    Ok((
        StatusCode::OK,
        Json(CatalogEntryResponseDto {
            catalog,
            id,
            record,
        }),
    ))
}

/// List every user
///
/// # Responses
/// - 200 (Success): `{"msg": "Completed", "users": [...]}`, passwords are never included
/// - 500 (Internal Server Error): Database error
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Every user under the `users` key"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    list_catalog(&state, Catalog::User).await
}

/// Get a single user
///
/// # Responses
/// - 200 (Success): `{"user_id": id, "user_info": {...}}`
/// - 400 (Bad Request): No user has the ID
/// - 404 (Not Found): The ID is not a non-negative integer
/// - 500 (Internal Server Error): Database error
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "The user under `user_info`"),
        (status = 400, description = "User does not exist", body = ErrorDto),
        (status = 404, description = "ID is not a non-negative integer", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    ApiPath(RecordId(id)): ApiPath<RecordId>,
) -> Result<impl IntoResponse, Error> {
    get_catalog_entry(&state, Catalog::User, id).await
}

/// List every planet
#[utoipa::path(
    get,
    path = "/planets",
    tag = PLANET_TAG,
    responses(
        (status = 200, description = "Every planet under the `planets` key"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planets(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    list_catalog(&state, Catalog::Planet).await
}

/// Get a single planet
#[utoipa::path(
    get,
    path = "/planets/{id}",
    tag = PLANET_TAG,
    params(("id" = i32, Path, description = "Planet ID")),
    responses(
        (status = 200, description = "The planet under `planet_info`"),
        (status = 400, description = "Planet does not exist", body = ErrorDto),
        (status = 404, description = "ID is not a non-negative integer", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planet(
    State(state): State<AppState>,
    ApiPath(RecordId(id)): ApiPath<RecordId>,
) -> Result<impl IntoResponse, Error> {
    get_catalog_entry(&state, Catalog::Planet, id).await
}

/// List every character
///
/// Characters are served under `/people`, the records are listed under the `people` key.
#[utoipa::path(
    get,
    path = "/people",
    tag = PEOPLE_TAG,
    responses(
        (status = 200, description = "Every character under the `people` key"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_people(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    list_catalog(&state, Catalog::Character).await
}

/// Get a single character
#[utoipa::path(
    get,
    path = "/people/{id}",
    tag = PEOPLE_TAG,
    params(("id" = i32, Path, description = "Character ID")),
    responses(
        (status = 200, description = "The character under `character_info`"),
        (status = 400, description = "Character does not exist", body = ErrorDto),
        (status = 404, description = "ID is not a non-negative integer", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_person(
    State(state): State<AppState>,
    ApiPath(RecordId(id)): ApiPath<RecordId>,
) -> Result<impl IntoResponse, Error> {
    get_catalog_entry(&state, Catalog::Character, id).await
}

/// List every vehicle
#[utoipa::path(
    get,
    path = "/vehicles",
    tag = VEHICLE_TAG,
    responses(
        (status = 200, description = "Every vehicle under the `vehicles` key"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vehicles(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    list_catalog(&state, Catalog::Vehicle).await
}

/// Get a single vehicle
#[utoipa::path(
    get,
    path = "/vehicles/{id}",
    tag = VEHICLE_TAG,
    params(("id" = i32, Path, description = "Vehicle ID")),
    responses(
        (status = 200, description = "The vehicle under `vehicle_info`"),
        (status = 400, description = "Vehicle does not exist", body = ErrorDto),
        (status = 404, description = "ID is not a non-negative integer", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vehicle(
    State(state): State<AppState>,
    ApiPath(RecordId(id)): ApiPath<RecordId>,
) -> Result<impl IntoResponse, Error> {
    get_catalog_entry(&state, Catalog::Vehicle, id).await
}
