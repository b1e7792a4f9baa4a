//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::entity::{
    Exhibit, ExhibitImage, ExhibitWithImages, Game, NewExhibit, NewExhibitImage, NewGame,
    NewScore, Score, ScoreWithGame,
};
use crate::domain::repository::{ExhibitRepository, GameRepository, ScoreRepository};
use crate::error::MuseumResult;

/// PostgreSQL-backed museum repository
#[derive(Clone)]
pub struct PgMuseumRepository {
    pool: PgPool,
}

impl PgMuseumRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Images for a set of exhibits, ordered by display order
    async fn images_for(&self, exhibit_id: i32) -> MuseumResult<Vec<ExhibitImage>> {
        let rows = sqlx::query_as::<_, ExhibitImageRow>(
            r#"
            SELECT image_id, exhibit_id, image_path, alt_text, display_order
            FROM exhibit_images
            WHERE exhibit_id = $1
            ORDER BY display_order, image_id
            "#,
        )
        .bind(exhibit_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ExhibitImageRow::into_image).collect())
    }
}

// ============================================================================
// Exhibit Repository Implementation
// ============================================================================

impl ExhibitRepository for PgMuseumRepository {
    async fn list(&self) -> MuseumResult<Vec<ExhibitWithImages>> {
        let exhibits = sqlx::query_as::<_, ExhibitRow>(
            r#"
            SELECT exhibit_id, employee_id, title, description, added_at, updated_at
            FROM exhibits
            ORDER BY title
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        // Single query for all images, then group in memory
        let image_rows = sqlx::query_as::<_, ExhibitImageRow>(
            r#"
            SELECT image_id, exhibit_id, image_path, alt_text, display_order
            FROM exhibit_images
            ORDER BY exhibit_id, display_order, image_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let mut result: Vec<ExhibitWithImages> = exhibits
            .into_iter()
            .map(|row| ExhibitWithImages {
                exhibit: row.into_exhibit(),
                images: Vec::new(),
            })
            .collect();

        for image_row in image_rows {
            if let Some(entry) = result
                .iter_mut()
                .find(|e| e.exhibit.exhibit_id == image_row.exhibit_id)
            {
                entry.images.push(image_row.into_image());
            }
        }

        Ok(result)
    }

    async fn find_by_id(&self, exhibit_id: i32) -> MuseumResult<Option<ExhibitWithImages>> {
        let row = sqlx::query_as::<_, ExhibitRow>(
            r#"
            SELECT exhibit_id, employee_id, title, description, added_at, updated_at
            FROM exhibits
            WHERE exhibit_id = $1
            "#,
        )
        .bind(exhibit_id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let images = self.images_for(exhibit_id).await?;

        Ok(Some(ExhibitWithImages {
            exhibit: row.into_exhibit(),
            images,
        }))
    }

    async fn create(&self, new: &NewExhibit) -> MuseumResult<Exhibit> {
        let row = sqlx::query_as::<_, ExhibitRow>(
            r#"
            INSERT INTO exhibits (employee_id, title, description, added_at)
            VALUES ($1, $2, $3, NOW())
            RETURNING exhibit_id, employee_id, title, description, added_at, updated_at
            "#,
        )
        .bind(new.employee_id)
        .bind(&new.title)
        .bind(&new.description)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_exhibit())
    }

    async fn add_image(&self, new: &NewExhibitImage) -> MuseumResult<ExhibitImage> {
        let row = sqlx::query_as::<_, ExhibitImageRow>(
            r#"
            INSERT INTO exhibit_images (exhibit_id, image_path, alt_text, display_order)
            VALUES ($1, $2, $3, $4)
            RETURNING image_id, exhibit_id, image_path, alt_text, display_order
            "#,
        )
        .bind(new.exhibit_id)
        .bind(&new.image_path)
        .bind(&new.alt_text)
        .bind(new.display_order)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_image())
    }

    async fn update(
        &self,
        exhibit_id: i32,
        title: &str,
        description: &str,
    ) -> MuseumResult<Option<Exhibit>> {
        let row = sqlx::query_as::<_, ExhibitRow>(
            r#"
            UPDATE exhibits SET
                title = $2,
                description = $3,
                updated_at = NOW()
            WHERE exhibit_id = $1
            RETURNING exhibit_id, employee_id, title, description, added_at, updated_at
            "#,
        )
        .bind(exhibit_id)
        .bind(title)
        .bind(description)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ExhibitRow::into_exhibit))
    }

    async fn delete(&self, exhibit_id: i32) -> MuseumResult<bool> {
        // exhibit_images rows follow via ON DELETE CASCADE
        let deleted = sqlx::query("DELETE FROM exhibits WHERE exhibit_id = $1")
            .bind(exhibit_id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}

// ============================================================================
// Score Repository Implementation
// ============================================================================

impl ScoreRepository for PgMuseumRepository {
    async fn list(&self) -> MuseumResult<Vec<ScoreWithGame>> {
        let rows = sqlx::query_as::<_, ScoreRow>(
            r#"
            SELECT s.score_id, s.game_id, g.game_name, s.player_name, s.score_value, s.played_at
            FROM scores s
            JOIN games g ON g.game_id = s.game_id
            ORDER BY s.score_value DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ScoreRow::into_score).collect())
    }

    async fn list_by_game(&self, game_id: i32) -> MuseumResult<Vec<ScoreWithGame>> {
        let rows = sqlx::query_as::<_, ScoreRow>(
            r#"
            SELECT s.score_id, s.game_id, g.game_name, s.player_name, s.score_value, s.played_at
            FROM scores s
            JOIN games g ON g.game_id = s.game_id
            WHERE s.game_id = $1
            ORDER BY s.score_value DESC
            "#,
        )
        .bind(game_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ScoreRow::into_score).collect())
    }

    async fn create(&self, new: &NewScore) -> MuseumResult<ScoreWithGame> {
        let row = sqlx::query_as::<_, ScoreRow>(
            r#"
            WITH inserted AS (
                INSERT INTO scores (game_id, player_name, score_value, played_at)
                VALUES ($1, $2, $3, NOW())
                RETURNING score_id, game_id, player_name, score_value, played_at
            )
            SELECT i.score_id, i.game_id, g.game_name, i.player_name, i.score_value, i.played_at
            FROM inserted i
            JOIN games g ON g.game_id = i.game_id
            "#,
        )
        .bind(new.game_id)
        .bind(&new.player_name)
        .bind(new.score_value)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_score())
    }
}

// ============================================================================
// Game Repository Implementation
// ============================================================================

impl GameRepository for PgMuseumRepository {
    async fn find_by_id(&self, game_id: i32) -> MuseumResult<Option<Game>> {
        let row = sqlx::query_as::<_, GameRow>(
            r#"
            SELECT game_id, game_name, description, game_type, created_at, is_active
            FROM games
            WHERE game_id = $1
            "#,
        )
        .bind(game_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(GameRow::into_game))
    }

    async fn create(&self, new: &NewGame) -> MuseumResult<Game> {
        let row = sqlx::query_as::<_, GameRow>(
            r#"
            INSERT INTO games (game_name, description, game_type, created_at, is_active)
            VALUES ($1, $2, $3, NOW(), $4)
            RETURNING game_id, game_name, description, game_type, created_at, is_active
            "#,
        )
        .bind(&new.game_name)
        .bind(&new.description)
        .bind(&new.game_type)
        .bind(new.is_active)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_game())
    }

    async fn count(&self) -> MuseumResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM games")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// ============================================================================
// Row types
// ============================================================================

#[derive(sqlx::FromRow)]
struct ExhibitRow {
    exhibit_id: i32,
    employee_id: i32,
    title: String,
    description: String,
    added_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl ExhibitRow {
    fn into_exhibit(self) -> Exhibit {
        Exhibit {
            exhibit_id: self.exhibit_id,
            employee_id: self.employee_id,
            title: self.title,
            description: self.description,
            added_at: self.added_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ExhibitImageRow {
    image_id: i32,
    exhibit_id: i32,
    image_path: String,
    alt_text: String,
    display_order: i32,
}

impl ExhibitImageRow {
    fn into_image(self) -> ExhibitImage {
        ExhibitImage {
            image_id: self.image_id,
            exhibit_id: self.exhibit_id,
            image_path: self.image_path,
            alt_text: self.alt_text,
            display_order: self.display_order,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ScoreRow {
    score_id: i32,
    game_id: i32,
    game_name: String,
    player_name: String,
    score_value: i32,
    played_at: DateTime<Utc>,
}

impl ScoreRow {
    fn into_score(self) -> ScoreWithGame {
        ScoreWithGame {
            score: Score {
                score_id: self.score_id,
                game_id: self.game_id,
                player_name: self.player_name,
                score_value: self.score_value,
                played_at: self.played_at,
            },
            game_name: self.game_name,
        }
    }
}

#[derive(sqlx::FromRow)]
struct GameRow {
    game_id: i32,
    game_name: String,
    description: String,
    game_type: String,
    created_at: DateTime<Utc>,
    is_active: bool,
}

impl GameRow {
    fn into_game(self) -> Game {
        Game {
            game_id: self.game_id,
            game_name: self.game_name,
            description: self.description,
            game_type: self.game_type,
            created_at: self.created_at,
            is_active: self.is_active,
        }
    }
}
