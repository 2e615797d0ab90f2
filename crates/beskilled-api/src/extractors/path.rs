//! Path parameter extractors
//!
//! Type-safe extraction of Snowflake IDs from path parameters.

use beskilled_core::Snowflake;

use crate::response::ApiError;

/// Path parameters with a single id
#[derive(Debug, serde::Deserialize)]
pub struct IdPath {
    pub id: String,
}

impl IdPath {
    /// Parse id as Snowflake
    pub fn id(&self) -> Result<Snowflake, ApiError> {
        self.id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid id format"))
    }
}

/// Path parameters with swap_id
#[derive(Debug, serde::Deserialize)]
pub struct SwapIdPath {
    pub swap_id: String,
}

impl SwapIdPath {
    /// Parse swap_id as Snowflake
    pub fn swap_id(&self) -> Result<Snowflake, ApiError> {
        self.swap_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid swap_id format"))
    }
}

/// Path parameters with user_id
#[derive(Debug, serde::Deserialize)]
pub struct UserIdPath {
    pub user_id: String,
}

impl UserIdPath {
    /// Parse user_id as Snowflake
    pub fn user_id(&self) -> Result<Snowflake, ApiError> {
        self.user_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid user_id format"))
    }
}
