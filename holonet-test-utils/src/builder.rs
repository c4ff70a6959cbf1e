//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and
/// fixture rows. Methods can be chained together and finalized with `build()`.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_catalog_tables: bool,

    // Database fixtures to insert
    users: Vec<i32>,
    planets: Vec<i32>,
    characters: Vec<i32>,
    vehicles: Vec<i32>,
    favorites: Vec<(i32, String, i32)>, // (user_id, favorite_type, favorite_id)
}

impl TestBuilder {
    /// Create a new TestBuilder.
    ///
    /// Initializes an empty builder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_catalog_tables: false,
            users: Vec::new(),
            planets: Vec::new(),
            characters: Vec::new(),
            vehicles: Vec::new(),
            favorites: Vec::new(),
        }
    }

    /// Add every table of the schema to the test database.
    ///
    /// Creates User, Planet, Character, Vehicle and Favorite, in that order so that the
    /// favorite foreign key on `user_id` resolves.
    pub fn with_catalog_tables(mut self) -> Self {
        self.include_catalog_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    /// Chain multiple calls to add multiple tables.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use holonet_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), holonet_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(User)
    ///     .with_table(Favorite)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert mock user with the provided ID into the database.
    pub fn with_mock_user(mut self, user_id: i32) -> Self {
        self.users.push(user_id);
        self
    }

    /// Insert mock planet with the provided ID into the database.
    pub fn with_mock_planet(mut self, planet_id: i32) -> Self {
        self.planets.push(planet_id);
        self
    }

    /// Insert mock character with the provided ID into the database.
    pub fn with_mock_character(mut self, character_id: i32) -> Self {
        self.characters.push(character_id);
        self
    }

    /// Insert mock vehicle with the provided ID into the database.
    pub fn with_mock_vehicle(mut self, vehicle_id: i32) -> Self {
        self.vehicles.push(vehicle_id);
        self
    }

    /// Insert a favorite into the database.
    ///
    /// Favorites are inserted after every catalog fixture, the user must be added via
    /// `with_mock_user` for the foreign key to be satisfied.
    ///
    /// # Arguments
    /// - `user_id` - ID of the user owning the favorite
    /// - `favorite_type` - Raw value of the `favorite_type` column
    /// - `favorite_id` - ID of the favorited record
    pub fn with_favorite(mut self, user_id: i32, favorite_type: &str, favorite_id: i32) -> Self {
        self.favorites
            .push((user_id, favorite_type.to_string(), favorite_id));
        self
    }

    /// Build the test context.
    ///
    /// Executes all queued operations in order:
    /// 1. Create database tables
    /// 2. Insert catalog fixtures (users, planets, characters, vehicles)
    /// 3. Insert favorites
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test context
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_catalog_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::User),
                schema.create_table_from_entity(entity::prelude::Planet),
                schema.create_table_from_entity(entity::prelude::Character),
                schema.create_table_from_entity(entity::prelude::Vehicle),
                schema.create_table_from_entity(entity::prelude::Favorite),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert catalog fixtures
        for user_id in self.users {
            setup.catalog().insert_mock_user(user_id).await?;
        }

        for planet_id in self.planets {
            setup.catalog().insert_mock_planet(planet_id).await?;
        }

        for character_id in self.characters {
            setup.catalog().insert_mock_character(character_id).await?;
        }

        for vehicle_id in self.vehicles {
            setup.catalog().insert_mock_vehicle(vehicle_id).await?;
        }

        // 3. Insert favorites
        for (user_id, favorite_type, favorite_id) in self.favorites {
            setup
                .favorite()
                .insert_favorite(user_id, &favorite_type, favorite_id)
                .await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
