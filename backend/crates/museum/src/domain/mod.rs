//! Domain Layer
//!
//! Plain-record entities with explicit foreign keys and the
//! repository traits they are persisted through.

pub mod entity;
pub mod repository;

// Re-exports
pub use entity::{
    Exhibit, ExhibitImage, ExhibitWithImages, Game, NewExhibit, NewExhibitImage, NewGame,
    NewScore, Score, ScoreWithGame,
};
pub use repository::{ExhibitRepository, GameRepository, ScoreRepository};
