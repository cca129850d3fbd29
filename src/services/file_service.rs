use crate::errors::InternalError;
use std::path::PathBuf;

/// FileService writes uploaded bytes to a local directory
///
/// Files are stored under the exact client-supplied name; an existing file
/// of that name is overwritten. The name is NOT sanitized - callers of the
/// service depend on retrieving the file under the raw name they sent, so
/// suspicious names are logged rather than rewritten.
pub struct FileService {
    upload_dir: PathBuf,
}

impl FileService {
    pub fn new(upload_dir: impl Into<PathBuf>) -> Self {
        Self {
            upload_dir: upload_dir.into(),
        }
    }

    /// Write `contents` to `<upload_dir>/<filename>` and return the stored path
    pub async fn save(&self, filename: &str, contents: &[u8]) -> Result<String, InternalError> {
        tokio::fs::create_dir_all(&self.upload_dir)
            .await
            .map_err(|e| InternalError::io("create_upload_dir", e))?;

        if filename.contains('/') || filename.contains('\\') || filename.contains("..") {
            tracing::warn!(
                "Uploaded filename {:?} contains path components; storing it verbatim",
                filename
            );
        }

        let path = self.upload_dir.join(filename);
        tokio::fs::write(&path, contents)
            .await
            .map_err(|e| InternalError::io("write_upload", e))?;

        tracing::debug!("Stored upload at {}", path.display());

        Ok(path.to_string_lossy().into_owned())
    }
}
