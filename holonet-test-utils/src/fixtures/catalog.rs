use sea_orm::EntityTrait;

use crate::{error::TestError, fixtures::factory, TestContext};

impl TestContext {
    pub fn catalog(&self) -> CatalogFixtures<'_> {
        CatalogFixtures { setup: self }
    }
}

pub struct CatalogFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> CatalogFixtures<'a> {
    pub async fn insert_mock_user(&self, user_id: i32) -> Result<entity::user::Model, TestError> {
        Ok(entity::prelude::User::insert(factory::mock_user(user_id))
            .exec_with_returning(&self.setup.db)
            .await?)
    }

    pub async fn insert_mock_planet(
        &self,
        planet_id: i32,
    ) -> Result<entity::planet::Model, TestError> {
        Ok(entity::prelude::Planet::insert(factory::mock_planet(planet_id))
            .exec_with_returning(&self.setup.db)
            .await?)
    }

    pub async fn insert_mock_character(
        &self,
        character_id: i32,
    ) -> Result<entity::character::Model, TestError> {
        Ok(
            entity::prelude::Character::insert(factory::mock_character(character_id))
                .exec_with_returning(&self.setup.db)
                .await?,
        )
    }

    pub async fn insert_mock_vehicle(
        &self,
        vehicle_id: i32,
    ) -> Result<entity::vehicle::Model, TestError> {
        Ok(entity::prelude::Vehicle::insert(factory::mock_vehicle(vehicle_id))
            .exec_with_returning(&self.setup.db)
            .await?)
    }
}
