//! Score Use Cases

use std::sync::Arc;

use crate::domain::entity::{NewScore, ScoreWithGame};
use crate::domain::repository::{GameRepository, ScoreRepository};
use crate::error::{MuseumError, MuseumResult};

/// Input for submitting a score
#[derive(Debug, Clone)]
pub struct SubmitScoreInput {
    pub game_id: i32,
    pub player_name: String,
    pub score_value: i32,
}

/// Score service
pub struct ScoreService<R> {
    repo: Arc<R>,
}

impl<R> Clone for ScoreService<R> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
        }
    }
}

impl<R: ScoreRepository + GameRepository> ScoreService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// All scores across games, highest first
    pub async fn list(&self) -> MuseumResult<Vec<ScoreWithGame>> {
        ScoreRepository::list(self.repo.as_ref()).await
    }

    /// Scores for one game, highest first
    pub async fn list_by_game(&self, game_id: i32) -> MuseumResult<Vec<ScoreWithGame>> {
        self.repo.list_by_game(game_id).await
    }

    /// Record a visitor's score
    ///
    /// The game must exist; scores are anonymous otherwise, so the
    /// player name only has to be non-empty.
    pub async fn submit(&self, input: SubmitScoreInput) -> MuseumResult<ScoreWithGame> {
        if input.player_name.trim().is_empty() {
            return Err(MuseumError::Validation(
                "Player name is required".to_string(),
            ));
        }

        let game = GameRepository::find_by_id(self.repo.as_ref(), input.game_id)
            .await?
            .ok_or(MuseumError::NotFound("Game"))?;

        let score = ScoreRepository::create(
            self.repo.as_ref(),
            &NewScore {
                game_id: input.game_id,
                player_name: input.player_name,
                score_value: input.score_value,
            },
        )
        .await?;

        tracing::info!(
            game_id = game.game_id,
            score_value = score.score.score_value,
            "Score recorded"
        );

        Ok(score)
    }
}
