//! Read-only catalog resources: users, planets, characters & vehicles.
//!
//! The four resources are served by the same listing & detail endpoints, selected by the
//! [`Catalog`] tag. Each resource has its own DTO mirroring the columns of its table, with
//! [`CatalogEntryDto`] wrapping whichever one a request produced.

use serde::{ser::SerializeMap, Deserialize, Serialize, Serializer};
use utoipa::ToSchema;

/// The read-only resources exposed by the catalog endpoints
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Catalog {
    User,
    Planet,
    Character,
    Vehicle,
}

impl Catalog {
    /// Key holding the records in a listing response, e.g. `planets`
    pub fn collection_key(&self) -> &'static str {
        match self {
            Self::User => "users",
            Self::Planet => "planets",
            Self::Character => "people",
            Self::Vehicle => "vehicles",
        }
    }

    /// Prefix of the `_id` & `_info` keys of a detail response, e.g. `planet`
    pub fn entry_key(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Planet => "planet",
            Self::Character => "character",
            Self::Vehicle => "vehicle",
        }
    }

    /// Message returned to the client when no record with `id` exists
    pub fn not_found_message(&self, id: i32) -> String {
        match self {
            Self::User => format!("The user id {} doesn't exist", id),
            Self::Planet => format!("The planet id {} doesn't exist", id),
            Self::Character => format!("The character with id {} doesn't exist", id),
            Self::Vehicle => format!("The vehicle with id {} doesn't exist", id),
        }
    }
}

impl std::fmt::Display for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.entry_key())
    }
}

/// Public view of a user, the password is never serialized
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub is_active: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlanetDto {
    pub id: i32,
    pub name: String,
    pub diameter: Option<i32>,
    pub rotation_period: Option<i32>,
    pub orbital_period: Option<i32>,
    pub gravity: Option<String>,
    pub population: Option<i64>,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub surface_water: Option<i32>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CharacterDto {
    pub id: i32,
    pub name: String,
    pub height: Option<i32>,
    pub mass: Option<i32>,
    pub hair_color: Option<String>,
    pub eye_color: Option<String>,
    pub skin_color: Option<String>,
    pub birth_year: Option<String>,
    pub gender: Option<String>,
    pub homeworld: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct VehicleDto {
    pub id: i32,
    pub name: String,
    pub model: Option<String>,
    pub vehicle_class: Option<String>,
    pub manufacturer: Option<String>,
    pub cost_in_credits: Option<i32>,
    pub length: Option<f64>,
    pub crew: Option<i32>,
    pub passengers: Option<i32>,
    pub max_atmosphering_speed: Option<i32>,
    pub cargo_capacity: Option<i32>,
    pub consumables: Option<String>,
    pub pilots: Option<String>,
}

impl From<entity::user::Model> for UserDto {
    fn from(user: entity::user::Model) -> Self {
        Self {
            id: user.id,
            email: user.email,
            is_active: user.is_active,
        }
    }
}

impl From<entity::planet::Model> for PlanetDto {
    fn from(planet: entity::planet::Model) -> Self {
        Self {
            id: planet.id,
            name: planet.name,
            diameter: planet.diameter,
            rotation_period: planet.rotation_period,
            orbital_period: planet.orbital_period,
            gravity: planet.gravity,
            population: planet.population,
            climate: planet.climate,
            terrain: planet.terrain,
            surface_water: planet.surface_water,
        }
    }
}

impl From<entity::character::Model> for CharacterDto {
    fn from(character: entity::character::Model) -> Self {
        Self {
            id: character.id,
            name: character.name,
            height: character.height,
            mass: character.mass,
            hair_color: character.hair_color,
            eye_color: character.eye_color,
            skin_color: character.skin_color,
            birth_year: character.birth_year,
            gender: character.gender,
            homeworld: character.homeworld,
        }
    }
}

impl From<entity::vehicle::Model> for VehicleDto {
    fn from(vehicle: entity::vehicle::Model) -> Self {
        Self {
            id: vehicle.id,
            name: vehicle.name,
            model: vehicle.model,
            vehicle_class: vehicle.vehicle_class,
            manufacturer: vehicle.manufacturer,
            cost_in_credits: vehicle.cost_in_credits,
            length: vehicle.length,
            crew: vehicle.crew,
            passengers: vehicle.passengers,
            max_atmosphering_speed: vehicle.max_atmosphering_speed,
            cargo_capacity: vehicle.cargo_capacity,
            consumables: vehicle.consumables,
            pilots: vehicle.pilots,
        }
    }
}

/// A single catalog record, serialized as the inner DTO without a tag
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CatalogEntryDto {
    User(UserDto),
    Planet(PlanetDto),
    Character(CharacterDto),
    Vehicle(VehicleDto),
}

impl CatalogEntryDto {
    pub fn id(&self) -> i32 {
        match self {
            Self::User(user) => user.id,
            Self::Planet(planet) => planet.id,
            Self::Character(character) => character.id,
            Self::Vehicle(vehicle) => vehicle.id,
        }
    }
}

impl From<entity::user::Model> for CatalogEntryDto {
    fn from(user: entity::user::Model) -> Self {
        Self::User(user.into())
    }
}

impl From<entity::planet::Model> for CatalogEntryDto {
    fn from(planet: entity::planet::Model) -> Self {
        Self::Planet(planet.into())
    }
}

impl From<entity::character::Model> for CatalogEntryDto {
    fn from(character: entity::character::Model) -> Self {
        Self::Character(character.into())
    }
}

impl From<entity::vehicle::Model> for CatalogEntryDto {
    fn from(vehicle: entity::vehicle::Model) -> Self {
        Self::Vehicle(vehicle.into())
    }
}

/// Listing response, serialized as `{"msg": "Completed", "<collection>": [...]}`
#[derive(Clone, Debug)]
pub struct CatalogListDto {
    pub catalog: Catalog,
    pub records: Vec<CatalogEntryDto>,
}

impl Serialize for CatalogListDto {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("msg", "Completed")?;
        map.serialize_entry(self.catalog.collection_key(), &self.records)?;
        map.end()
    }
}

/// Detail response, serialized as `{"<entry>_id": id, "<entry>_info": {...}}`
#[derive(Clone, Debug)]
pub struct CatalogEntryResponseDto {
    pub catalog: Catalog,
    pub id: i32,
    pub record: CatalogEntryDto,
}

impl Serialize for CatalogEntryResponseDto {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let entry_key = self.catalog.entry_key();

        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry(&format!("{}_id", entry_key), &self.id)?;
        map.serialize_entry(&format!("{}_info", entry_key), &self.record)?;
        map.end()
    }
}
