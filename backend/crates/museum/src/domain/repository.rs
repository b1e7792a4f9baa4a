//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in the
//! infrastructure layer.

use crate::domain::entity::{
    Exhibit, ExhibitImage, ExhibitWithImages, Game, NewExhibit, NewExhibitImage, NewGame,
    NewScore, ScoreWithGame,
};
use crate::error::MuseumResult;

/// Exhibit repository trait
#[trait_variant::make(ExhibitRepository: Send)]
pub trait LocalExhibitRepository {
    /// All exhibits ordered by title, images eager-loaded
    async fn list(&self) -> MuseumResult<Vec<ExhibitWithImages>>;

    /// Find one exhibit with its images
    async fn find_by_id(&self, exhibit_id: i32) -> MuseumResult<Option<ExhibitWithImages>>;

    /// Insert a new exhibit
    async fn create(&self, new: &NewExhibit) -> MuseumResult<Exhibit>;

    /// Attach an image record to an exhibit
    async fn add_image(&self, new: &NewExhibitImage) -> MuseumResult<ExhibitImage>;

    /// Update title/description, setting `updated_at`; `None` when the
    /// exhibit does not exist
    async fn update(
        &self,
        exhibit_id: i32,
        title: &str,
        description: &str,
    ) -> MuseumResult<Option<Exhibit>>;

    /// Delete an exhibit; image rows cascade at the database level.
    /// Returns `false` when the exhibit does not exist.
    async fn delete(&self, exhibit_id: i32) -> MuseumResult<bool>;
}

/// Score repository trait
#[trait_variant::make(ScoreRepository: Send)]
pub trait LocalScoreRepository {
    /// All scores, highest first, joined with game names
    async fn list(&self) -> MuseumResult<Vec<ScoreWithGame>>;

    /// Scores for one game, highest first
    async fn list_by_game(&self, game_id: i32) -> MuseumResult<Vec<ScoreWithGame>>;

    /// Insert a new score, returning it joined with the game name
    async fn create(&self, new: &NewScore) -> MuseumResult<ScoreWithGame>;
}

/// Game repository trait
#[trait_variant::make(GameRepository: Send)]
pub trait LocalGameRepository {
    /// Find a game by id
    async fn find_by_id(&self, game_id: i32) -> MuseumResult<Option<Game>>;

    /// Insert a new game
    async fn create(&self, new: &NewGame) -> MuseumResult<Game>;

    /// Number of game records (used by startup seeding)
    async fn count(&self) -> MuseumResult<i64>;
}
