use axum::Router;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, EntityTrait, Schema};
use tower::ServiceBuilder;
use tower::Layer;
use tower_http::{
    cors::CorsLayer,
    normalize_path::{NormalizePath, NormalizePathLayer},
    trace::TraceLayer,
};

use crate::server::{config::Config, error::Error, model::app::AppState, router};

/// Connect to the database and create any missing tables
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    create_tables(&db).await?;

    Ok(db)
}

/// Creates the tables of every entity if they do not exist yet
///
/// `user` is created before `favorite` so that the foreign key on `favorite.user_id`
/// resolves.
pub async fn create_tables<C: ConnectionTrait>(db: &C) -> Result<(), Error> {
    create_table(db, entity::prelude::User).await?;
    create_table(db, entity::prelude::Planet).await?;
    create_table(db, entity::prelude::Character).await?;
    create_table(db, entity::prelude::Vehicle).await?;
    create_table(db, entity::prelude::Favorite).await?;

    Ok(())
}

async fn create_table<C, E>(db: &C, entity: E) -> Result<(), Error>
where
    C: ConnectionTrait,
    E: EntityTrait,
{
    let schema = Schema::new(db.get_database_backend());
    let mut stmt = schema.create_table_from_entity(entity);
    stmt.if_not_exists();

    db.execute(&stmt).await?;

    Ok(())
}

/// Build the application with CORS & request tracing layers
///
/// Trailing slashes are trimmed before routing, `/planets/` is served as `/planets`. The
/// normalization has to wrap the router, as a router layer it would run after routing.
pub fn build_router(state: AppState) -> NormalizePath<Router> {
    let router = router::routes().with_state(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
