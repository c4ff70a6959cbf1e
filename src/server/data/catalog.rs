use std::marker::PhantomData;

use sea_orm::{
    ConnectionTrait, DbErr, EntityTrait, Iterable, PrimaryKeyToColumn, PrimaryKeyTrait,
    QueryOrder,
};

/// Read-only repository shared by the catalog tables
///
/// The same two queries serve users, planets, characters & vehicles, the entity is
/// chosen through the `E` type parameter:
///
/// ```ignore
/// let planets = CatalogRepository::<entity::prelude::Planet, _>::new(&db).get_all().await?;
/// ```
pub struct CatalogRepository<'a, E, C: ConnectionTrait> {
    db: &'a C,
    entity: PhantomData<E>,
}

impl<'a, E, C> CatalogRepository<'a, E, C>
where
    E: EntityTrait,
    C: ConnectionTrait,
    i32: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
{
    /// Creates a new instance of [`CatalogRepository`]
    pub fn new(db: &'a C) -> Self {
        Self {
            db,
            entity: PhantomData,
        }
    }

    /// Gets every record of the table ordered by primary key
    ///
    /// Returns an empty list rather than an error for an empty table.
    pub async fn get_all(&self) -> Result<Vec<E::Model>, DbErr> {
        let mut query = E::find();
        for key in E::PrimaryKey::iter() {
            query = query.order_by_asc(key.into_column());
        }

        query.all(self.db).await
    }

    /// Gets a single record by its primary key, `None` if it does not exist
    pub async fn get_by_id(&self, id: i32) -> Result<Option<E::Model>, DbErr> {
        E::find_by_id(id).one(self.db).await
    }
}
