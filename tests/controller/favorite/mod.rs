//! Tests for the favorite endpoints.

mod add_favorite;
mod get_user_favorites;
mod remove_favorite;

use super::*;
