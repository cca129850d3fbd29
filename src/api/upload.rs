use crate::errors::{InternalError, UploadError};
use crate::services::FileService;
use crate::types::dto::upload::{UploadPayload, UploadResponse};
use poem_openapi::{payload::Json, OpenApi, Tags};
use std::sync::Arc;

/// File upload API endpoints
pub struct UploadApi {
    file_service: Arc<FileService>,
}

impl UploadApi {
    /// Create a new UploadApi backed by the given FileService
    pub fn new(file_service: Arc<FileService>) -> Self {
        Self { file_service }
    }
}

/// API tags for upload endpoints
#[derive(Tags)]
enum UploadTags {
    /// File uploads
    Uploads,
}

#[OpenApi]
impl UploadApi {
    /// Receive a multipart file and store it under its own filename
    #[oai(path = "/uploadfile/", method = "post", tag = "UploadTags::Uploads")]
    async fn upload_file(&self, payload: UploadPayload) -> Result<Json<UploadResponse>, UploadError> {
        let filename = payload
            .file
            .file_name()
            .map(str::to_string)
            .ok_or_else(UploadError::missing_filename)?;

        let contents = payload
            .file
            .into_vec()
            .await
            .map_err(|e| UploadError::from_internal_error(InternalError::io("read_upload", e)))?;

        let file_path = self
            .file_service
            .save(&filename, &contents)
            .await
            .map_err(UploadError::from_internal_error)?;

        Ok(Json(UploadResponse {
            status: "success".to_string(),
            message: format!("File '{}' uploaded successfully.", filename),
            file_path,
        }))
    }
}
