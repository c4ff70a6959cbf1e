//! Factories for catalog active models with default test values.
//!
//! Every value that is unique in the schema is derived from the ID so that several
//! fixtures of the same kind can coexist in one database.

use sea_orm::ActiveValue;

/// Create a mock user with default test values.
///
/// # Arguments
/// - `user_id` - Primary key of the user, also used to derive a unique e-mail
pub fn mock_user(user_id: i32) -> entity::user::ActiveModel {
    entity::user::ActiveModel {
        id: ActiveValue::Set(user_id),
        email: ActiveValue::Set(format!("user{}@holonet.test", user_id)),
        password: ActiveValue::Set("password".to_string()),
        is_active: ActiveValue::Set(true),
    }
}

/// Create a mock planet with default test values.
pub fn mock_planet(planet_id: i32) -> entity::planet::ActiveModel {
    entity::planet::ActiveModel {
        id: ActiveValue::Set(planet_id),
        name: ActiveValue::Set("Tatooine".to_string()),
        diameter: ActiveValue::Set(Some(10465)),
        rotation_period: ActiveValue::Set(Some(23)),
        orbital_period: ActiveValue::Set(Some(304)),
        gravity: ActiveValue::Set(Some("1 standard".to_string())),
        population: ActiveValue::Set(Some(200000)),
        climate: ActiveValue::Set(Some("arid".to_string())),
        terrain: ActiveValue::Set(Some("desert".to_string())),
        surface_water: ActiveValue::Set(Some(1)),
    }
}

/// Create a mock character with default test values.
pub fn mock_character(character_id: i32) -> entity::character::ActiveModel {
    entity::character::ActiveModel {
        id: ActiveValue::Set(character_id),
        name: ActiveValue::Set("Luke Skywalker".to_string()),
        height: ActiveValue::Set(Some(172)),
        mass: ActiveValue::Set(Some(77)),
        hair_color: ActiveValue::Set(Some("blond".to_string())),
        eye_color: ActiveValue::Set(Some("blue".to_string())),
        skin_color: ActiveValue::Set(Some("fair".to_string())),
        birth_year: ActiveValue::Set(Some("19BBY".to_string())),
        gender: ActiveValue::Set(Some("male".to_string())),
        homeworld: ActiveValue::Set(Some("Tatooine".to_string())),
    }
}

/// Create a mock vehicle with default test values.
///
/// `model` is unique in the schema and carries the ID, `pilots` is left empty.
pub fn mock_vehicle(vehicle_id: i32) -> entity::vehicle::ActiveModel {
    entity::vehicle::ActiveModel {
        id: ActiveValue::Set(vehicle_id),
        name: ActiveValue::Set("Sand Crawler".to_string()),
        model: ActiveValue::Set(Some(format!("Digger Crawler {}", vehicle_id))),
        vehicle_class: ActiveValue::Set(Some("wheeled".to_string())),
        manufacturer: ActiveValue::Set(Some("Corellia Mining Corporation".to_string())),
        cost_in_credits: ActiveValue::Set(Some(150000)),
        length: ActiveValue::Set(Some(36.8)),
        crew: ActiveValue::Set(Some(46)),
        passengers: ActiveValue::Set(Some(30)),
        max_atmosphering_speed: ActiveValue::Set(Some(30)),
        cargo_capacity: ActiveValue::Set(Some(50000)),
        consumables: ActiveValue::Set(Some("2 months".to_string())),
        pilots: ActiveValue::Set(None),
    }
}
