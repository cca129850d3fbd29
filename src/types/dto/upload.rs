use poem_openapi::types::multipart::Upload;
use poem_openapi::{Multipart, Object};
use serde::{Deserialize, Serialize};

/// Multipart payload for the upload endpoint
#[derive(Debug, Multipart)]
pub struct UploadPayload {
    /// The uploaded file
    pub file: Upload,
}

/// Response model for the upload endpoint
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Always "success"
    pub status: String,

    /// Human-readable message
    pub message: String,

    /// Where the file was stored, relative to the working directory
    pub file_path: String,
}
