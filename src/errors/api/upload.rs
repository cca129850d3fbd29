use crate::errors::internal::InternalError;
use crate::types::dto::common::ErrorResponse;
use poem_openapi::{payload::Json, ApiResponse};
use std::fmt;

/// Upload endpoint error types
#[derive(ApiResponse, Debug)]
pub enum UploadError {
    /// The multipart part carried no filename
    #[oai(status = 400)]
    MissingFilename(Json<ErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl UploadError {
    /// Create a MissingFilename error
    pub fn missing_filename() -> Self {
        UploadError::MissingFilename(Json(ErrorResponse {
            error: "missing_filename".to_string(),
            message: "Uploaded file must carry a filename".to_string(),
            status_code: 400,
        }))
    }

    /// Convert InternalError to UploadError, logging the details
    pub fn from_internal_error(err: InternalError) -> Self {
        tracing::error!("Upload failed: {}", err);
        UploadError::InternalError(Json(ErrorResponse {
            error: "internal_error".to_string(),
            message: "An internal error occurred".to_string(),
            status_code: 500,
        }))
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> String {
        match self {
            UploadError::MissingFilename(json) => json.0.message.clone(),
            UploadError::InternalError(json) => json.0.message.clone(),
        }
    }
}

impl fmt::Display for UploadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
