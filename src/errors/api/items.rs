use crate::errors::internal::{InternalError, ItemStoreError};
use crate::types::dto::common::ErrorResponse;
use poem_openapi::{payload::Json, ApiResponse};
use std::fmt;

/// Item endpoint error types
///
/// These are the hard failures of the API: conventional error status codes
/// with a single message, short-circuiting on the first problem. Creation's
/// collected validation errors deliberately do NOT go through this type -
/// they travel in a 200 body (see `ValidationFailure`).
#[derive(ApiResponse, Debug)]
pub enum ItemError {
    /// No item with the requested id
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),

    /// The requested id is already taken by another item
    #[oai(status = 400)]
    IdConflict(Json<ErrorResponse>),

    /// Admin password header missing or wrong
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl ItemError {
    /// Create a NotFound error
    pub fn not_found() -> Self {
        ItemError::NotFound(Json(ErrorResponse {
            error: "item_not_found".to_string(),
            message: "Item not found".to_string(),
            status_code: 404,
        }))
    }

    /// Create an IdConflict error
    pub fn id_conflict() -> Self {
        ItemError::IdConflict(Json(ErrorResponse {
            error: "id_conflict".to_string(),
            message: "ID already exists".to_string(),
            status_code: 400,
        }))
    }

    /// Create an Unauthorized error
    pub fn unauthorized() -> Self {
        ItemError::Unauthorized(Json(ErrorResponse {
            error: "unauthorized".to_string(),
            message: "Unauthorized: Invalid admin password".to_string(),
            status_code: 401,
        }))
    }

    /// Convert InternalError to ItemError
    ///
    /// This is the explicit conversion point from internal errors to API
    /// errors. Infrastructure details are logged but not exposed to clients.
    pub fn from_internal_error(err: InternalError) -> Self {
        match &err {
            InternalError::Item(ItemStoreError::DuplicateId(id)) => {
                tracing::warn!("Insert lost the uniqueness race for id {}", id);
                Self::id_conflict()
            }
            InternalError::Item(ItemStoreError::Vanished(id)) => {
                tracing::warn!("Item {} disappeared mid-request", id);
                Self::not_found()
            }
            _ => {
                tracing::error!("Unexpected error in item operation: {}", err);
                Self::internal_server_error()
            }
        }
    }

    fn internal_server_error() -> Self {
        ItemError::InternalError(Json(ErrorResponse {
            error: "internal_error".to_string(),
            message: "An internal error occurred".to_string(),
            status_code: 500,
        }))
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> String {
        match self {
            ItemError::NotFound(json) => json.0.message.clone(),
            ItemError::IdConflict(json) => json.0.message.clone(),
            ItemError::Unauthorized(json) => json.0.message.clone(),
            ItemError::InternalError(json) => json.0.message.clone(),
        }
    }

    /// Get the HTTP status code from the error variant
    pub fn status_code(&self) -> u16 {
        match self {
            ItemError::NotFound(json) => json.0.status_code,
            ItemError::IdConflict(json) => json.0.status_code,
            ItemError::Unauthorized(json) => json.0.status_code,
            ItemError::InternalError(json) => json.0.status_code,
        }
    }
}

impl fmt::Display for ItemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
