//! Exhibit Use Cases
//!
//! Exhibit records live in PostgreSQL; their image bytes live on the
//! filesystem behind [`ImageStore`]. The service keeps the two in step:
//! uploads are written to disk before the metadata row is inserted, and
//! reads stitch the bytes back onto the metadata.

use std::sync::Arc;

use crate::domain::entity::{Exhibit, ExhibitImage, NewExhibit, NewExhibitImage};
use crate::domain::repository::ExhibitRepository;
use crate::error::{MuseumError, MuseumResult};
use crate::infra::image_store::ImageStore;

/// An uploaded image: raw bytes plus client-supplied metadata
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub bytes: Vec<u8>,
    pub ext: String,
    pub alt_text: String,
}

/// Input for creating an exhibit
#[derive(Debug, Clone)]
pub struct CreateExhibitInput {
    pub employee_id: i32,
    pub title: String,
    pub description: String,
    pub images: Vec<ImageUpload>,
}

/// Input for updating an exhibit's text fields
#[derive(Debug, Clone)]
pub struct UpdateExhibitInput {
    pub title: String,
    pub description: String,
}

/// Image metadata with its bytes loaded from the store
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub image: ExhibitImage,
    pub bytes: Vec<u8>,
    pub ext: String,
}

/// An exhibit with its images fully loaded
#[derive(Debug, Clone)]
pub struct ExhibitDetail {
    pub exhibit: Exhibit,
    pub images: Vec<LoadedImage>,
}

/// Exhibit service
pub struct ExhibitService<R> {
    repo: Arc<R>,
    images: Arc<ImageStore>,
}

impl<R> Clone for ExhibitService<R> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
            images: Arc::clone(&self.images),
        }
    }
}

impl<R: ExhibitRepository> ExhibitService<R> {
    pub fn new(repo: Arc<R>, images: Arc<ImageStore>) -> Self {
        Self { repo, images }
    }

    /// All exhibits ordered by title, image bytes included
    pub async fn list(&self) -> MuseumResult<Vec<ExhibitDetail>> {
        let exhibits = self.repo.list().await?;

        let mut details = Vec::with_capacity(exhibits.len());
        for entry in exhibits {
            details.push(ExhibitDetail {
                images: self.load_images(entry.images).await,
                exhibit: entry.exhibit,
            });
        }
        Ok(details)
    }

    /// One exhibit with its image bytes
    pub async fn get(&self, exhibit_id: i32) -> MuseumResult<ExhibitDetail> {
        let entry = self
            .repo
            .find_by_id(exhibit_id)
            .await?
            .ok_or(MuseumError::NotFound("Exhibit"))?;

        Ok(ExhibitDetail {
            images: self.load_images(entry.images).await,
            exhibit: entry.exhibit,
        })
    }

    /// Create an exhibit and store its uploaded images
    pub async fn create(&self, input: CreateExhibitInput) -> MuseumResult<ExhibitDetail> {
        if input.title.trim().is_empty() {
            return Err(MuseumError::Validation("Title is required".to_string()));
        }

        let exhibit = self
            .repo
            .create(&NewExhibit {
                employee_id: input.employee_id,
                title: input.title,
                description: input.description,
            })
            .await?;

        let mut images = Vec::with_capacity(input.images.len());
        for (order, upload) in input.images.into_iter().enumerate() {
            let path = self.images.save(&upload.bytes, &upload.ext).await?;
            let record = self
                .repo
                .add_image(&NewExhibitImage {
                    exhibit_id: exhibit.exhibit_id,
                    image_path: path,
                    alt_text: upload.alt_text,
                    display_order: order as i32,
                })
                .await?;
            images.push(LoadedImage {
                ext: ext_of(&record.image_path),
                bytes: upload.bytes,
                image: record,
            });
        }

        tracing::info!(
            exhibit_id = exhibit.exhibit_id,
            employee_id = exhibit.employee_id,
            image_count = images.len(),
            "Exhibit created"
        );

        Ok(ExhibitDetail { exhibit, images })
    }

    /// Update an exhibit's title and description
    pub async fn update(&self, exhibit_id: i32, input: UpdateExhibitInput) -> MuseumResult<Exhibit> {
        if input.title.trim().is_empty() {
            return Err(MuseumError::Validation("Title is required".to_string()));
        }

        self.repo
            .update(exhibit_id, &input.title, &input.description)
            .await?
            .ok_or(MuseumError::NotFound("Exhibit"))
    }

    /// Delete an exhibit, its image rows, and its image files
    pub async fn delete(&self, exhibit_id: i32) -> MuseumResult<()> {
        // Collect file paths before the rows cascade away
        let entry = self
            .repo
            .find_by_id(exhibit_id)
            .await?
            .ok_or(MuseumError::NotFound("Exhibit"))?;

        if !self.repo.delete(exhibit_id).await? {
            return Err(MuseumError::NotFound("Exhibit"));
        }

        // File removal is best-effort; the records are already gone
        for image in &entry.images {
            self.images.remove(&image.image_path).await;
        }

        tracing::info!(exhibit_id, "Exhibit deleted");
        Ok(())
    }

    async fn load_images(&self, records: Vec<ExhibitImage>) -> Vec<LoadedImage> {
        let mut loaded = Vec::with_capacity(records.len());
        for record in records {
            loaded.push(LoadedImage {
                bytes: self.images.load(&record.image_path).await,
                ext: ext_of(&record.image_path),
                image: record,
            });
        }
        loaded
    }
}

/// Extension of a stored image path, empty when absent
fn ext_of(image_path: &str) -> String {
    image_path
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_string())
        .unwrap_or_default()
}
