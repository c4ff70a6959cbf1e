//! Catalog service.
//!
//! Serves the listing & detail reads of users, planets, characters & vehicles through one
//! code path: the [`Catalog`] tag picks the entity, a generic repository query runs
//! against it and the rows are wrapped into [`CatalogEntryDto`].

use sea_orm::{DatabaseConnection, EntityTrait, PrimaryKeyTrait};

use crate::{
    model::catalog::{Catalog, CatalogEntryDto},
    server::{
        data::catalog::CatalogRepository,
        error::{catalog::CatalogError, Error},
    },
};

/// Service for the read-only catalog resources.
pub struct CatalogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CatalogService<'a> {
    /// Creates a new instance of CatalogService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every record of a catalog ordered by ID.
    ///
    /// # Returns
    /// - `Ok(Vec<CatalogEntryDto>)` - Records of the catalog, empty if the table is empty
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn list(&self, catalog: Catalog) -> Result<Vec<CatalogEntryDto>, Error> {
        match catalog {
            Catalog::User => self.get_all::<entity::prelude::User>().await,
            Catalog::Planet => self.get_all::<entity::prelude::Planet>().await,
            Catalog::Character => self.get_all::<entity::prelude::Character>().await,
            Catalog::Vehicle => self.get_all::<entity::prelude::Vehicle>().await,
        }
    }

    /// Gets a single catalog record.
    ///
    /// # Returns
    /// - `Ok(CatalogEntryDto)` - Record found
    /// - `Err(Error::CatalogError)` - No record of the catalog has the ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get(&self, catalog: Catalog, id: i32) -> Result<CatalogEntryDto, Error> {
        let record = match catalog {
            Catalog::User => self.get_by_id::<entity::prelude::User>(id).await?,
            Catalog::Planet => self.get_by_id::<entity::prelude::Planet>(id).await?,
            Catalog::Character => self.get_by_id::<entity::prelude::Character>(id).await?,
            Catalog::Vehicle => self.get_by_id::<entity::prelude::Vehicle>(id).await?,
        };

        record.ok_or_else(|| CatalogError::NotFound { catalog, id }.into())
    }

    async fn get_all<E>(&self) -> Result<Vec<CatalogEntryDto>, Error>
    where
        E: EntityTrait,
        E::Model: Into<CatalogEntryDto>,
        i32: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
    {
        let records = CatalogRepository::<E, _>::new(self.db).get_all().await?;

        Ok(records.into_iter().map(Into::into).collect())
    }

    async fn get_by_id<E>(&self, id: i32) -> Result<Option<CatalogEntryDto>, Error>
    where
        E: EntityTrait,
        E::Model: Into<CatalogEntryDto>,
        i32: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
    {
        let record = CatalogRepository::<E, _>::new(self.db)
            .get_by_id(id)
            .await?;

        Ok(record.map(Into::into))
    }
}
