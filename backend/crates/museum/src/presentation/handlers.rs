//! HTTP Handlers

use axum::extract::{Extension, Path, State};
use axum::http::StatusCode;
use axum::Json;

use auth::CurrentEmployee;

use crate::application::exhibits::{
    CreateExhibitInput, ExhibitService, ImageUpload, UpdateExhibitInput,
};
use crate::application::scores::{ScoreService, SubmitScoreInput};
use crate::domain::repository::{ExhibitRepository, GameRepository, ScoreRepository};
use crate::error::{MuseumError, MuseumResult};
use crate::presentation::dto::{
    CreateExhibitRequest, CreateScoreRequest, ExhibitDto, ScoreDto, UpdateExhibitRequest,
};

// ============================================================================
// Exhibits
// ============================================================================

/// GET /api/exhibits
pub async fn list_exhibits<R>(
    State(service): State<ExhibitService<R>>,
) -> MuseumResult<Json<Vec<ExhibitDto>>>
where
    R: ExhibitRepository + Send + Sync + 'static,
{
    let exhibits = service.list().await?;
    Ok(Json(exhibits.iter().map(ExhibitDto::from).collect()))
}

/// GET /api/exhibits/{id}
pub async fn get_exhibit<R>(
    State(service): State<ExhibitService<R>>,
    Path(exhibit_id): Path<i32>,
) -> MuseumResult<Json<ExhibitDto>>
where
    R: ExhibitRepository + Send + Sync + 'static,
{
    let detail = service.get(exhibit_id).await?;
    Ok(Json(ExhibitDto::from(&detail)))
}

/// POST /api/exhibits
///
/// The authenticated employee from the bearer token is recorded as the
/// exhibit's registrar.
pub async fn create_exhibit<R>(
    State(service): State<ExhibitService<R>>,
    Extension(employee): Extension<CurrentEmployee>,
    Json(req): Json<CreateExhibitRequest>,
) -> MuseumResult<(StatusCode, Json<ExhibitDto>)>
where
    R: ExhibitRepository + Send + Sync + 'static,
{
    let mut images = Vec::with_capacity(req.images.len());
    for upload in req.images {
        let bytes = platform::crypto::from_base64(&upload.byte_array)
            .map_err(|_| MuseumError::Validation("Image bytes are not valid base64".to_string()))?;
        images.push(ImageUpload {
            bytes,
            ext: upload.image_ext,
            alt_text: upload.alt_text,
        });
    }

    let detail = service
        .create(CreateExhibitInput {
            employee_id: employee.employee_id,
            title: req.title,
            description: req.description,
            images,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(ExhibitDto::from(&detail))))
}

/// PUT /api/exhibits/{id}
pub async fn update_exhibit<R>(
    State(service): State<ExhibitService<R>>,
    Path(exhibit_id): Path<i32>,
    Json(req): Json<UpdateExhibitRequest>,
) -> MuseumResult<StatusCode>
where
    R: ExhibitRepository + Send + Sync + 'static,
{
    service
        .update(
            exhibit_id,
            UpdateExhibitInput {
                title: req.title,
                description: req.description,
            },
        )
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/exhibits/{id}
pub async fn delete_exhibit<R>(
    State(service): State<ExhibitService<R>>,
    Path(exhibit_id): Path<i32>,
) -> MuseumResult<StatusCode>
where
    R: ExhibitRepository + Send + Sync + 'static,
{
    service.delete(exhibit_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Scores
// ============================================================================

/// GET /api/scores
pub async fn list_scores<R>(
    State(service): State<ScoreService<R>>,
) -> MuseumResult<Json<Vec<ScoreDto>>>
where
    R: ScoreRepository + GameRepository + Send + Sync + 'static,
{
    let scores = service.list().await?;
    Ok(Json(scores.iter().map(ScoreDto::from).collect()))
}

/// GET /api/scores/game/{game_id}
pub async fn list_scores_by_game<R>(
    State(service): State<ScoreService<R>>,
    Path(game_id): Path<i32>,
) -> MuseumResult<Json<Vec<ScoreDto>>>
where
    R: ScoreRepository + GameRepository + Send + Sync + 'static,
{
    let scores = service.list_by_game(game_id).await?;
    Ok(Json(scores.iter().map(ScoreDto::from).collect()))
}

/// POST /api/scores
pub async fn create_score<R>(
    State(service): State<ScoreService<R>>,
    Json(req): Json<CreateScoreRequest>,
) -> MuseumResult<(StatusCode, Json<ScoreDto>)>
where
    R: ScoreRepository + GameRepository + Send + Sync + 'static,
{
    let score = service
        .submit(SubmitScoreInput {
            game_id: req.game_id,
            player_name: req.player_name,
            score_value: req.score_value,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(ScoreDto::from(&score))))
}
