//! API DTOs (Data Transfer Objects)
//!
//! Image bytes travel inline as base64 strings; clients never see the
//! filesystem paths the server stores them under.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::exhibits::{ExhibitDetail, LoadedImage};
use crate::domain::entity::ScoreWithGame;

// ============================================================================
// Exhibits
// ============================================================================

/// Exhibit as exposed over the API
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExhibitDto {
    pub exhibit_id: i32,
    pub employee_id: i32,
    pub title: String,
    pub description: String,
    pub added_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub images: Vec<ExhibitImageDto>,
}

/// Exhibit image with its bytes inlined
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExhibitImageDto {
    pub image_id: i32,
    /// Base64 of the image bytes; empty when the file is missing
    pub byte_array: String,
    pub image_ext: String,
    pub alt_text: String,
    pub display_order: i32,
}

impl From<&LoadedImage> for ExhibitImageDto {
    fn from(loaded: &LoadedImage) -> Self {
        Self {
            image_id: loaded.image.image_id,
            byte_array: platform::crypto::to_base64(&loaded.bytes),
            image_ext: loaded.ext.clone(),
            alt_text: loaded.image.alt_text.clone(),
            display_order: loaded.image.display_order,
        }
    }
}

impl From<&ExhibitDetail> for ExhibitDto {
    fn from(detail: &ExhibitDetail) -> Self {
        Self {
            exhibit_id: detail.exhibit.exhibit_id,
            employee_id: detail.exhibit.employee_id,
            title: detail.exhibit.title.clone(),
            description: detail.exhibit.description.clone(),
            added_at: detail.exhibit.added_at,
            updated_at: detail.exhibit.updated_at,
            images: detail.images.iter().map(ExhibitImageDto::from).collect(),
        }
    }
}

/// Image upload within a create request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageUploadRequest {
    /// Base64 of the image bytes
    pub byte_array: String,
    pub image_ext: String,
    #[serde(default)]
    pub alt_text: String,
}

/// Create exhibit request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateExhibitRequest {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub images: Vec<ImageUploadRequest>,
}

/// Update exhibit request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateExhibitRequest {
    pub title: String,
    pub description: String,
}

// ============================================================================
// Scores
// ============================================================================

/// Score as exposed over the API
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreDto {
    pub score_id: i32,
    pub game_id: i32,
    pub game_name: String,
    pub player_name: String,
    pub score_value: i32,
    pub played_at: DateTime<Utc>,
}

impl From<&ScoreWithGame> for ScoreDto {
    fn from(entry: &ScoreWithGame) -> Self {
        Self {
            score_id: entry.score.score_id,
            game_id: entry.score.game_id,
            game_name: entry.game_name.clone(),
            player_name: entry.score.player_name.clone(),
            score_value: entry.score.score_value,
            played_at: entry.score.played_at,
        }
    }
}

/// Submit score request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateScoreRequest {
    pub game_id: i32,
    pub player_name: String,
    pub score_value: i32,
}
