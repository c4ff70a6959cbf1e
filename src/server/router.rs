//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every endpoint is registered here through utoipa-axum so that the OpenAPI document is
//! built from the same handlers that serve requests. Swagger UI is served at `/api/docs`
//! and the root path lists every documented endpoint.

use axum::{routing::get, Json, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::api::SitemapDto,
    server::{controller, model::app::AppState},
};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /` - List of documented endpoints
/// - `GET /users`, `GET /users/{id}` - Users
/// - `GET /planets`, `GET /planets/{id}` - Planets
/// - `GET /people`, `GET /people/{id}` - Characters
/// - `GET /vehicles`, `GET /vehicles/{id}` - Vehicles
/// - `GET /users/favorites/{user_id}` - Favorites of a user
/// - `POST /favorite/{favorite_type}/{id}` - Add a favorite
/// - `DELETE /favorite/{favorite_type}/{id}` - Remove a favorite
///
/// The OpenAPI specification is available at `/api/docs/openapi.json`.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState { db });
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Holonet", description = "Holonet API"), tags(
        (name = controller::catalog::USER_TAG, description = "User API routes"),
        (name = controller::catalog::PLANET_TAG, description = "Planet API routes"),
        (name = controller::catalog::PEOPLE_TAG, description = "Character API routes"),
        (name = controller::catalog::VEHICLE_TAG, description = "Vehicle API routes"),
        (name = controller::favorite::FAVORITE_TAG, description = "Favorite API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::catalog::get_users))
        .routes(routes!(controller::catalog::get_user))
        .routes(routes!(controller::catalog::get_planets))
        .routes(routes!(controller::catalog::get_planet))
        .routes(routes!(controller::catalog::get_people))
        .routes(routes!(controller::catalog::get_person))
        .routes(routes!(controller::catalog::get_vehicles))
        .routes(routes!(controller::catalog::get_vehicle))
        .routes(routes!(controller::favorite::get_user_favorites))
        .routes(routes!(
            controller::favorite::add_favorite,
            controller::favorite::remove_favorite
        ))
        .split_for_parts();

    // `paths` is a BTreeMap so the endpoints come out sorted
    let endpoints: Vec<String> = api.paths.paths.keys().cloned().collect();

    routes
        .route(
            "/",
            get(move || async move { Json(SitemapDto { endpoints }) }),
        )
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
