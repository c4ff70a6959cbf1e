use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The response when an error occurs with an API request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
    /// The HTTP status code of the response
    pub status_code: u16,
}

/// Response carrying a `message` field, used by add favorite responses
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub message: String,
}

/// Response carrying a `msg` field, used by delete favorite responses
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MsgDto {
    pub msg: String,
}

/// Every documented API path
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SitemapDto {
    pub endpoints: Vec<String>,
}
