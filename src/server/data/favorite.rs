use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::model::favorite::FavoriteType;

pub struct FavoriteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteRepository<'a, C> {
    /// Creates a new instance of [`FavoriteRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new favorite for a user
    ///
    /// Neither the user nor the favorited record are looked up beforehand, the
    /// database foreign key on `user_id` is the only check applied.
    pub async fn create(
        &self,
        user_id: i32,
        favorite_type: FavoriteType,
        favorite_id: i32,
    ) -> Result<entity::favorite::Model, DbErr> {
        let favorite = entity::favorite::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            favorite_type: ActiveValue::Set(favorite_type.as_str().to_string()),
            favorite_id: ActiveValue::Set(favorite_id),
            ..Default::default()
        };

        favorite.insert(self.db).await
    }

    /// Finds the favorite matching a user, type & record ID
    pub async fn find(
        &self,
        user_id: i32,
        favorite_type: FavoriteType,
        favorite_id: i32,
    ) -> Result<Option<entity::favorite::Model>, DbErr> {
        entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .filter(entity::favorite::Column::FavoriteType.eq(favorite_type.as_str()))
            .filter(entity::favorite::Column::FavoriteId.eq(favorite_id))
            .one(self.db)
            .await
    }

    /// Gets all favorites of the provided user ID ordered by favorite ID
    pub async fn get_many_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::favorite::Model>, DbErr> {
        entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .order_by_asc(entity::favorite::Column::Id)
            .all(self.db)
            .await
    }

    /// Finds the oldest favorite pointing at a record, whichever user it belongs to
    pub async fn find_first_by_target(
        &self,
        favorite_type: FavoriteType,
        favorite_id: i32,
    ) -> Result<Option<entity::favorite::Model>, DbErr> {
        entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::FavoriteType.eq(favorite_type.as_str()))
            .filter(entity::favorite::Column::FavoriteId.eq(favorite_id))
            .order_by_asc(entity::favorite::Column::Id)
            .one(self.db)
            .await
    }

    /// Deletes a favorite
    ///
    /// Returns OK regardless of the favorite existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, favorite_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Favorite::delete_by_id(favorite_id)
            .exec(self.db)
            .await
    }
}
