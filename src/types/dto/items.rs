use poem_openapi::{payload::Json, ApiResponse, Object};
use serde::{Deserialize, Serialize};

use crate::types::db::item;

/// Request model for creating a new item
///
/// Every field is optional at the schema level: missing name/stock are
/// reported through the collected validation errors rather than rejected
/// by the framework before the handler runs.
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct CreateItemRequest {
    /// Identifier for the new item; the store assigns one when absent
    pub id: Option<i32>,

    /// Name of the item
    pub name: Option<String>,

    /// Units in stock
    pub stock: Option<i32>,
}

/// Request model for partially updating an item
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct UpdateItemRequest {
    /// New identifier; reassigns the row's id when it differs and is free
    pub id: Option<i32>,

    /// New name; ignored when absent or empty
    pub name: Option<String>,

    /// New stock count; overwrites unconditionally when present
    pub stock: Option<i32>,
}

/// Response model representing an item
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct ItemResponse {
    /// Unique identifier for the item
    pub id: i32,

    /// Name of the item
    pub name: String,

    /// Units in stock
    pub stock: i32,
}

impl From<item::Model> for ItemResponse {
    fn from(m: item::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            stock: m.stock,
        }
    }
}

/// Envelope returned when an item was created
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct CreateItemSuccess {
    /// Always "success"
    pub status: String,

    /// Human-readable message
    pub message: String,

    /// The persisted item
    pub data: ItemResponse,
}

/// Envelope returned when creation validation failed
///
/// Carried in a 200 response; callers must inspect `status`, not the HTTP
/// status code, to detect the failure.
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct ValidationFailure {
    /// Always "error"
    pub status: String,

    /// Human-readable summary
    pub message: String,

    /// Every problem detected in this request, in check order
    pub errors: Vec<String>,
}

impl ValidationFailure {
    pub fn new(errors: Vec<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: "Validation failed".to_string(),
            errors,
        }
    }
}

/// API response for the create endpoint
#[derive(ApiResponse)]
pub enum CreateItemApiResponse {
    /// Item persisted
    #[oai(status = 201)]
    Created(Json<CreateItemSuccess>),

    /// Validation problems; nothing was persisted
    #[oai(status = 200)]
    ValidationFailed(Json<ValidationFailure>),
}
