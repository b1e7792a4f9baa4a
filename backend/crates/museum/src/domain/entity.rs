//! Museum Entities
//!
//! Plain records with explicit foreign-key fields. Cascades (exhibit
//! images following their exhibit) are database-level constraints, not
//! framework behavior.

use chrono::{DateTime, Utc};

/// Museum exhibit
#[derive(Debug, Clone)]
pub struct Exhibit {
    pub exhibit_id: i32,
    /// Employee who registered the exhibit
    pub employee_id: i32,
    pub title: String,
    pub description: String,
    pub added_at: DateTime<Utc>,
    /// Set on every update, `None` until the first one
    pub updated_at: Option<DateTime<Utc>>,
}

/// Data for inserting a new exhibit (id and timestamps are assigned on
/// insert)
#[derive(Debug, Clone)]
pub struct NewExhibit {
    pub employee_id: i32,
    pub title: String,
    pub description: String,
}

/// Stored image metadata; the bytes live on the filesystem at
/// `image_path`
#[derive(Debug, Clone)]
pub struct ExhibitImage {
    pub image_id: i32,
    pub exhibit_id: i32,
    /// Path relative to the image store root, e.g. `/images/{uuid}.png`
    pub image_path: String,
    pub alt_text: String,
    pub display_order: i32,
}

/// Data for inserting a new exhibit image record
#[derive(Debug, Clone)]
pub struct NewExhibitImage {
    pub exhibit_id: i32,
    pub image_path: String,
    pub alt_text: String,
    pub display_order: i32,
}

/// An exhibit together with its images, ordered by `display_order`
#[derive(Debug, Clone)]
pub struct ExhibitWithImages {
    pub exhibit: Exhibit,
    pub images: Vec<ExhibitImage>,
}

/// Museum game or quiz
#[derive(Debug, Clone)]
pub struct Game {
    pub game_id: i32,
    pub game_name: String,
    pub description: String,
    /// "quiz" or "game"
    pub game_type: String,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}

/// Data for inserting a new game
#[derive(Debug, Clone)]
pub struct NewGame {
    pub game_name: String,
    pub description: String,
    pub game_type: String,
    pub is_active: bool,
}

/// Visitor score for a game
#[derive(Debug, Clone)]
pub struct Score {
    pub score_id: i32,
    pub game_id: i32,
    pub player_name: String,
    pub score_value: i32,
    pub played_at: DateTime<Utc>,
}

/// Data for inserting a new score
#[derive(Debug, Clone)]
pub struct NewScore {
    pub game_id: i32,
    pub player_name: String,
    pub score_value: i32,
}

/// A score joined with the name of the game it belongs to
#[derive(Debug, Clone)]
pub struct ScoreWithGame {
    pub score: Score,
    pub game_name: String,
}
