//! Filesystem Image Store
//!
//! Uploaded exhibit images are stored as files under
//! `{root}/images/{uuid}.{ext}`; only the relative path is recorded in
//! the database.

use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::error::MuseumResult;

/// Stores image bytes on the local filesystem
#[derive(Debug, Clone)]
pub struct ImageStore {
    root: PathBuf,
}

impl ImageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Write image bytes under a fresh random file name
    ///
    /// Returns the relative path (`/images/{uuid}.{ext}`) to record in
    /// the image metadata.
    pub async fn save(&self, bytes: &[u8], ext: &str) -> MuseumResult<String> {
        let dir = self.root.join("images");
        tokio::fs::create_dir_all(&dir).await?;

        let file_name = format!("{}.{}", Uuid::new_v4(), sanitize_ext(ext));
        tokio::fs::write(dir.join(&file_name), bytes).await?;

        Ok(format!("/images/{}", file_name))
    }

    /// Read image bytes back; a missing file yields an empty buffer
    /// rather than an error, so stale metadata does not break listings
    pub async fn load(&self, image_path: &str) -> Vec<u8> {
        match tokio::fs::read(self.resolve(image_path)).await {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::debug!(image_path, error = %e, "Image file missing or unreadable");
                Vec::new()
            }
        }
    }

    /// Best-effort removal of an image file
    pub async fn remove(&self, image_path: &str) {
        if let Err(e) = tokio::fs::remove_file(self.resolve(image_path)).await {
            tracing::warn!(image_path, error = %e, "Failed to remove image file");
        }
    }

    fn resolve(&self, image_path: &str) -> PathBuf {
        // Stored paths begin with "/images/"; strip the leading slash
        // and refuse path traversal in the remainder.
        let relative = image_path.trim_start_matches('/');
        let mut resolved = self.root.clone();
        for component in Path::new(relative).components() {
            match component {
                std::path::Component::Normal(part) => resolved.push(part),
                _ => continue,
            }
        }
        resolved
    }
}

/// File extension taken from client input; keep only ascii
/// alphanumerics and fall back to "bin"
fn sanitize_ext(ext: &str) -> String {
    let cleaned: String = ext
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .take(8)
        .collect::<String>()
        .to_lowercase();
    if cleaned.is_empty() {
        "bin".to_string()
    } else {
        cleaned
    }
}
