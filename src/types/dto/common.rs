use poem_openapi::Object;
use serde::{Deserialize, Serialize};

/// Standardized error response model
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code identifier
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// HTTP status code
    pub status_code: u16,
}

/// Plain message response, used by the deletion endpoints
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable message describing the outcome
    pub message: String,
}

/// Response model for the service banner
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct ServiceInfoResponse {
    /// Welcome message
    pub message: String,

    /// Where the interactive API documentation is served
    pub docs: String,
}

/// Response model for the health check endpoint
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,

    /// Timestamp of the health check (ISO 8601 format)
    pub timestamp: String,
}
