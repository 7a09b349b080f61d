use std::path::PathBuf;

use actix_multipart::form::tempfile::TempFile;
use tokio::fs;
use uuid::Uuid;

use crate::errors::AppError;
use crate::settings::AppConfig;

/// Accepted image types, by sniffed magic bytes — the client-declared
/// Content-Type header is not trusted.
const ALLOWED_TYPES: &[(&str, &str)] = &[
    ("image/jpeg", "jpg"),
    ("image/png", "png"),
    ("image/gif", "gif"),
    ("image/webp", "webp"),
];

/// Persists uploaded images under a configured directory and hands back the
/// generated filename. Only the filename is stored in the database.
#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
    max_bytes: usize,
}

impl UploadStore {
    pub fn new(config: &AppConfig) -> std::io::Result<Self> {
        let dir = PathBuf::from(&config.upload_dir);
        std::fs::create_dir_all(&dir)?;

        Ok(UploadStore {
            dir,
            max_bytes: config.max_upload_bytes,
        })
    }

    pub fn max_bytes(&self) -> usize {
        self.max_bytes
    }

    /// Validates and stores one uploaded image, returning its new filename.
    pub async fn save_image(&self, file: &TempFile) -> Result<String, AppError> {
        if file.size == 0 {
            return Err(AppError::UploadError("Uploaded file is empty".into()));
        }
        if file.size > self.max_bytes {
            return Err(AppError::UploadError(format!(
                "File exceeds the {} byte limit",
                self.max_bytes
            )));
        }

        let bytes = fs::read(file.file.path())
            .await
            .map_err(|e| AppError::InternalError(format!("Failed to read upload: {}", e)))?;

        let extension = infer::get(&bytes)
            .and_then(|kind| {
                ALLOWED_TYPES
                    .iter()
                    .find(|(mime, _)| *mime == kind.mime_type())
                    .map(|(_, ext)| *ext)
            })
            .ok_or_else(|| {
                AppError::UploadError("Unsupported file type. Use JPG, PNG, GIF or WebP".into())
            })?;

        let filename = format!("img-{}.{}", Uuid::new_v4(), extension);
        let destination = self.dir.join(&filename);

        fs::write(&destination, &bytes)
            .await
            .map_err(|e| AppError::InternalError(format!("Failed to store upload: {}", e)))?;

        tracing::debug!("stored upload {} ({} bytes)", filename, file.size);
        Ok(filename)
    }

    /// Stores a bounded gallery of images, failing before any write when the
    /// batch is over the limit.
    pub async fn save_gallery(
        &self,
        files: &[TempFile],
        max_count: usize,
    ) -> Result<Vec<String>, AppError> {
        if files.len() > max_count {
            return Err(AppError::UploadError(format!(
                "At most {} gallery images are allowed",
                max_count
            )));
        }

        let mut filenames = Vec::with_capacity(files.len());
        for file in files {
            filenames.push(self.save_image(file).await?);
        }
        Ok(filenames)
    }
}
