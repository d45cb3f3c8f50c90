use std::path::Path;

use tokio::fs;
use uuid::Uuid;

use crate::error::{AppError, AppResult};

/// Stores uploaded profile images on the local filesystem.
pub struct StorageService;

impl StorageService {
    /// Save image bytes under `upload_dir` with a generated filename and
    /// return the relative reference path to persist on the record.
    pub async fn save_profile_image(
        upload_dir: &str,
        original_name: &str,
        data: &[u8],
    ) -> AppResult<String> {
        if data.is_empty() {
            return Err(AppError::Validation("Uploaded file is empty".to_string()));
        }

        let ext = Path::new(original_name)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("png");
        let stored_name = format!("{}.{}", Uuid::new_v4(), ext);

        fs::create_dir_all(upload_dir)
            .await
            .map_err(|e| AppError::Internal(format!("Upload directory unavailable: {}", e)))?;

        let full_path = Path::new(upload_dir).join(&stored_name);
        fs::write(&full_path, data)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to store upload: {}", e)))?;

        Ok(format!(
            "{}/{}",
            upload_dir.trim_end_matches('/'),
            stored_name
        ))
    }
}
