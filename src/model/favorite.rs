use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Kind of catalog entry a favorite points at, carried by the route
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FavoriteType {
    Planet,
    Character,
    Vehicle,
}

impl FavoriteType {
    /// Value stored in the `favorite_type` column and used in routes
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Planet => "planet",
            Self::Character => "character",
            Self::Vehicle => "vehicle",
        }
    }

    /// Capitalized name used at the start of response messages
    pub fn label(&self) -> &'static str {
        match self {
            Self::Planet => "Planet",
            Self::Character => "Character",
            Self::Vehicle => "Vehicle",
        }
    }

    /// Parses a route segment, returning `None` for anything but the three known types
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "planet" => Some(Self::Planet),
            "character" => Some(Self::Character),
            "vehicle" => Some(Self::Vehicle),
            _ => None,
        }
    }
}

impl std::fmt::Display for FavoriteType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FavoriteDto {
    pub id: i32,
    pub user_id: i32,
    pub favorite_type: String,
    pub favorite_id: i32,
}

impl From<entity::favorite::Model> for FavoriteDto {
    fn from(favorite: entity::favorite::Model) -> Self {
        Self {
            id: favorite.id,
            user_id: favorite.user_id,
            favorite_type: favorite.favorite_type,
            favorite_id: favorite.favorite_id,
        }
    }
}

/// Favorites of a single user
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct FavoriteListDto {
    pub msg: String,
    pub favorites: Vec<FavoriteDto>,
}

/// Request body of the add favorite endpoint
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct AddFavoriteDto {
    /// ID of the user adding the favorite
    pub user_id: i32,
}
