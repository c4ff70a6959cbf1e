//! Favorites service.
//!
//! Users keep a list of favorited planets, characters & vehicles. A favorite is unique per
//! user, type & record ID, which is checked here before inserting since the `favorite`
//! table carries no unique constraint for it.

use sea_orm::DatabaseConnection;

use crate::{
    model::favorite::{FavoriteDto, FavoriteType},
    server::{
        data::favorite::FavoriteRepository,
        error::{favorite::FavoriteError, Error},
    },
};

/// Result of adding a favorite
#[derive(Debug, PartialEq)]
pub enum AddFavoriteOutcome {
    /// Favorite was inserted
    Added(FavoriteDto),
    /// The user already has the record as a favorite, nothing was inserted
    AlreadyFavorite,
}

/// Service for managing user favorites.
pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    /// Creates a new instance of FavoriteService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves every favorite of a user ordered by favorite ID.
    ///
    /// # Arguments
    /// - `user_id` - ID of the user to list favorites for
    ///
    /// # Returns
    /// - `Ok(Vec<FavoriteDto>)` - At least one favorite
    /// - `Err(Error::FavoriteError)` - User has no favorites or does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_user_favorites(&self, user_id: i32) -> Result<Vec<FavoriteDto>, Error> {
        let favorites = FavoriteRepository::new(self.db)
            .get_many_by_user_id(user_id)
            .await?;

        if favorites.is_empty() {
            return Err(FavoriteError::NoFavorites(user_id).into());
        }

        Ok(favorites.into_iter().map(FavoriteDto::from).collect())
    }

    /// Adds a record to a user's favorites unless it is already one.
    ///
    /// The favorited record itself is not checked for existence, only the user through
    /// the foreign key on `user_id`. Two concurrent identical requests may both insert.
    ///
    /// # Arguments
    /// - `user_id` - ID of the user adding the favorite
    /// - `favorite_type` - Kind of record being favorited
    /// - `favorite_id` - ID of the record being favorited
    ///
    /// # Returns
    /// - `Ok(AddFavoriteOutcome::Added)` - Favorite inserted
    /// - `Ok(AddFavoriteOutcome::AlreadyFavorite)` - Duplicate, nothing inserted
    /// - `Err(Error::DbErr)` - Database operation failed, including an unknown user ID
    pub async fn add_favorite(
        &self,
        user_id: i32,
        favorite_type: FavoriteType,
        favorite_id: i32,
    ) -> Result<AddFavoriteOutcome, Error> {
        let favorite_repo = FavoriteRepository::new(self.db);

        if favorite_repo
            .find(user_id, favorite_type, favorite_id)
            .await?
            .is_some()
        {
            tracing::debug!(
                "User {} already has {} {} as a favorite",
                user_id,
                favorite_type,
                favorite_id
            );

            return Ok(AddFavoriteOutcome::AlreadyFavorite);
        }

        let favorite = favorite_repo
            .create(user_id, favorite_type, favorite_id)
            .await?;

        tracing::debug!(
            "Added {} {} to favorites of user {}",
            favorite_type,
            favorite_id,
            user_id
        );

        Ok(AddFavoriteOutcome::Added(favorite.into()))
    }

    /// Removes the oldest favorite pointing at a record.
    ///
    /// The favorite is matched on type & record ID alone, whichever user owns it.
    ///
    /// # Returns
    /// - `Ok(())` - One favorite deleted
    /// - `Err(Error::FavoriteError)` - The record is nobody's favorite, or the favorite was
    ///   deleted by another request before this one could
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn remove_favorite(
        &self,
        favorite_type: FavoriteType,
        favorite_id: i32,
    ) -> Result<(), Error> {
        let favorite_repo = FavoriteRepository::new(self.db);

        let Some(favorite) = favorite_repo
            .find_first_by_target(favorite_type, favorite_id)
            .await?
        else {
            return Err(FavoriteError::NotFavorited(favorite_type).into());
        };

        // A concurrent removal may have deleted the row since it was found
        let delete_result = favorite_repo.delete(favorite.id).await?;
        if delete_result.rows_affected == 0 {
            return Err(FavoriteError::NotFavorited(favorite_type).into());
        }

        tracing::debug!(
            "Removed {} {} from favorites of user {}",
            favorite_type,
            favorite_id,
            favorite.user_id
        );

        Ok(())
    }
}
