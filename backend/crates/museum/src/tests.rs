//! Service tests against an in-memory repository

use std::sync::{Arc, Mutex};

use chrono::Utc;

use crate::application::exhibits::{
    CreateExhibitInput, ExhibitService, ImageUpload, UpdateExhibitInput,
};
use crate::application::scores::{ScoreService, SubmitScoreInput};
use crate::domain::entity::{
    Exhibit, ExhibitImage, ExhibitWithImages, Game, NewExhibit, NewExhibitImage, NewGame,
    NewScore, Score, ScoreWithGame,
};
use crate::domain::repository::{ExhibitRepository, GameRepository, ScoreRepository};
use crate::error::{MuseumError, MuseumResult};
use crate::infra::image_store::ImageStore;

#[derive(Default)]
struct State {
    exhibits: Vec<Exhibit>,
    images: Vec<ExhibitImage>,
    games: Vec<Game>,
    scores: Vec<Score>,
    next_id: i32,
}

impl State {
    fn next(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }
}

#[derive(Clone, Default)]
struct InMemoryMuseum {
    state: Arc<Mutex<State>>,
}

impl InMemoryMuseum {
    fn with_game(name: &str) -> (Self, i32) {
        let repo = Self::default();
        let game_id = {
            let mut state = repo.state.lock().unwrap();
            let game_id = state.next();
            state.games.push(Game {
                game_id,
                game_name: name.to_string(),
                description: String::new(),
                game_type: "quiz".to_string(),
                created_at: Utc::now(),
                is_active: true,
            });
            game_id
        };
        (repo, game_id)
    }

    fn images_of(&self, exhibit_id: i32) -> Vec<ExhibitImage> {
        let mut images: Vec<ExhibitImage> = self
            .state
            .lock()
            .unwrap()
            .images
            .iter()
            .filter(|i| i.exhibit_id == exhibit_id)
            .cloned()
            .collect();
        images.sort_by_key(|i| i.display_order);
        images
    }
}

impl ExhibitRepository for InMemoryMuseum {
    async fn list(&self) -> MuseumResult<Vec<ExhibitWithImages>> {
        let mut exhibits = self.state.lock().unwrap().exhibits.clone();
        exhibits.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(exhibits
            .into_iter()
            .map(|exhibit| ExhibitWithImages {
                images: self.images_of(exhibit.exhibit_id),
                exhibit,
            })
            .collect())
    }

    async fn find_by_id(&self, exhibit_id: i32) -> MuseumResult<Option<ExhibitWithImages>> {
        let exhibit = self
            .state
            .lock()
            .unwrap()
            .exhibits
            .iter()
            .find(|e| e.exhibit_id == exhibit_id)
            .cloned();
        Ok(exhibit.map(|exhibit| ExhibitWithImages {
            images: self.images_of(exhibit.exhibit_id),
            exhibit,
        }))
    }

    async fn create(&self, new: &NewExhibit) -> MuseumResult<Exhibit> {
        let mut state = self.state.lock().unwrap();
        let exhibit = Exhibit {
            exhibit_id: state.next(),
            employee_id: new.employee_id,
            title: new.title.clone(),
            description: new.description.clone(),
            added_at: Utc::now(),
            updated_at: None,
        };
        state.exhibits.push(exhibit.clone());
        Ok(exhibit)
    }

    async fn add_image(&self, new: &NewExhibitImage) -> MuseumResult<ExhibitImage> {
        let mut state = self.state.lock().unwrap();
        let image = ExhibitImage {
            image_id: state.next(),
            exhibit_id: new.exhibit_id,
            image_path: new.image_path.clone(),
            alt_text: new.alt_text.clone(),
            display_order: new.display_order,
        };
        state.images.push(image.clone());
        Ok(image)
    }

    async fn update(
        &self,
        exhibit_id: i32,
        title: &str,
        description: &str,
    ) -> MuseumResult<Option<Exhibit>> {
        let mut state = self.state.lock().unwrap();
        let Some(exhibit) = state.exhibits.iter_mut().find(|e| e.exhibit_id == exhibit_id)
        else {
            return Ok(None);
        };
        exhibit.title = title.to_string();
        exhibit.description = description.to_string();
        exhibit.updated_at = Some(Utc::now());
        Ok(Some(exhibit.clone()))
    }

    async fn delete(&self, exhibit_id: i32) -> MuseumResult<bool> {
        let mut state = self.state.lock().unwrap();
        let before = state.exhibits.len();
        state.exhibits.retain(|e| e.exhibit_id != exhibit_id);
        state.images.retain(|i| i.exhibit_id != exhibit_id);
        Ok(state.exhibits.len() < before)
    }
}

impl ScoreRepository for InMemoryMuseum {
    async fn list(&self) -> MuseumResult<Vec<ScoreWithGame>> {
        let state = self.state.lock().unwrap();
        let mut entries: Vec<ScoreWithGame> = state
            .scores
            .iter()
            .map(|score| ScoreWithGame {
                game_name: state
                    .games
                    .iter()
                    .find(|g| g.game_id == score.game_id)
                    .map(|g| g.game_name.clone())
                    .unwrap_or_default(),
                score: score.clone(),
            })
            .collect();
        entries.sort_by(|a, b| b.score.score_value.cmp(&a.score.score_value));
        Ok(entries)
    }

    async fn list_by_game(&self, game_id: i32) -> MuseumResult<Vec<ScoreWithGame>> {
        let all = ScoreRepository::list(self).await?;
        Ok(all
            .into_iter()
            .filter(|e| e.score.game_id == game_id)
            .collect())
    }

    async fn create(&self, new: &NewScore) -> MuseumResult<ScoreWithGame> {
        let mut state = self.state.lock().unwrap();
        let score = Score {
            score_id: state.next(),
            game_id: new.game_id,
            player_name: new.player_name.clone(),
            score_value: new.score_value,
            played_at: Utc::now(),
        };
        state.scores.push(score.clone());
        let game_name = state
            .games
            .iter()
            .find(|g| g.game_id == new.game_id)
            .map(|g| g.game_name.clone())
            .unwrap_or_default();
        Ok(ScoreWithGame { score, game_name })
    }
}

impl GameRepository for InMemoryMuseum {
    async fn find_by_id(&self, game_id: i32) -> MuseumResult<Option<Game>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .games
            .iter()
            .find(|g| g.game_id == game_id)
            .cloned())
    }

    async fn create(&self, new: &NewGame) -> MuseumResult<Game> {
        let mut state = self.state.lock().unwrap();
        let game = Game {
            game_id: state.next(),
            game_name: new.game_name.clone(),
            description: new.description.clone(),
            game_type: new.game_type.clone(),
            created_at: Utc::now(),
            is_active: new.is_active,
        };
        state.games.push(game.clone());
        Ok(game)
    }

    async fn count(&self) -> MuseumResult<i64> {
        Ok(self.state.lock().unwrap().games.len() as i64)
    }
}

fn exhibit_service(dir: &tempfile::TempDir) -> ExhibitService<InMemoryMuseum> {
    ExhibitService::new(
        Arc::new(InMemoryMuseum::default()),
        Arc::new(ImageStore::new(dir.path())),
    )
}

mod exhibit_tests {
    use super::*;

    #[tokio::test]
    async fn test_create_stores_images_and_get_returns_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let service = exhibit_service(&dir);

        let detail = service
            .create(CreateExhibitInput {
                employee_id: 7,
                title: "Roman Coins".to_string(),
                description: "Denarii and aurei".to_string(),
                images: vec![
                    ImageUpload {
                        bytes: b"first".to_vec(),
                        ext: "png".to_string(),
                        alt_text: "obverse".to_string(),
                    },
                    ImageUpload {
                        bytes: b"second".to_vec(),
                        ext: "jpg".to_string(),
                        alt_text: "reverse".to_string(),
                    },
                ],
            })
            .await
            .unwrap();

        assert_eq!(detail.exhibit.employee_id, 7);
        assert_eq!(detail.images.len(), 2);
        assert_eq!(detail.images[0].image.display_order, 0);
        assert_eq!(detail.images[1].image.display_order, 1);

        let fetched = service.get(detail.exhibit.exhibit_id).await.unwrap();
        assert_eq!(fetched.images[0].bytes, b"first");
        assert_eq!(fetched.images[0].ext, "png");
        assert_eq!(fetched.images[1].bytes, b"second");
    }

    #[tokio::test]
    async fn test_create_rejects_blank_title() {
        let dir = tempfile::tempdir().unwrap();
        let service = exhibit_service(&dir);

        let result = service
            .create(CreateExhibitInput {
                employee_id: 1,
                title: "   ".to_string(),
                description: String::new(),
                images: vec![],
            })
            .await;
        assert!(matches!(result, Err(MuseumError::Validation(_))));
    }

    #[tokio::test]
    async fn test_get_unknown_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let service = exhibit_service(&dir);

        let result = service.get(999).await;
        assert!(matches!(result, Err(MuseumError::NotFound("Exhibit"))));
    }

    #[tokio::test]
    async fn test_list_orders_by_title() {
        let dir = tempfile::tempdir().unwrap();
        let service = exhibit_service(&dir);

        for title in ["Zeppelins", "Amber Room", "Meteorites"] {
            service
                .create(CreateExhibitInput {
                    employee_id: 1,
                    title: title.to_string(),
                    description: String::new(),
                    images: vec![],
                })
                .await
                .unwrap();
        }

        let titles: Vec<String> = service
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|d| d.exhibit.title)
            .collect();
        assert_eq!(titles, ["Amber Room", "Meteorites", "Zeppelins"]);
    }

    #[tokio::test]
    async fn test_update_sets_fields_and_timestamp() {
        let dir = tempfile::tempdir().unwrap();
        let service = exhibit_service(&dir);

        let created = service
            .create(CreateExhibitInput {
                employee_id: 1,
                title: "Old Title".to_string(),
                description: "Old".to_string(),
                images: vec![],
            })
            .await
            .unwrap();
        assert!(created.exhibit.updated_at.is_none());

        let updated = service
            .update(
                created.exhibit.exhibit_id,
                UpdateExhibitInput {
                    title: "New Title".to_string(),
                    description: "New".to_string(),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.title, "New Title");
        assert!(updated.updated_at.is_some());
    }

    #[tokio::test]
    async fn test_update_unknown_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let service = exhibit_service(&dir);

        let result = service
            .update(
                42,
                UpdateExhibitInput {
                    title: "T".to_string(),
                    description: "D".to_string(),
                },
            )
            .await;
        assert!(matches!(result, Err(MuseumError::NotFound("Exhibit"))));
    }

    #[tokio::test]
    async fn test_delete_removes_records_and_files() {
        let dir = tempfile::tempdir().unwrap();
        let service = exhibit_service(&dir);

        let detail = service
            .create(CreateExhibitInput {
                employee_id: 1,
                title: "Ephemeral".to_string(),
                description: String::new(),
                images: vec![ImageUpload {
                    bytes: b"bytes".to_vec(),
                    ext: "png".to_string(),
                    alt_text: String::new(),
                }],
            })
            .await
            .unwrap();

        service.delete(detail.exhibit.exhibit_id).await.unwrap();

        let result = service.get(detail.exhibit.exhibit_id).await;
        assert!(matches!(result, Err(MuseumError::NotFound("Exhibit"))));

        // No image files left behind
        let images_dir = dir.path().join("images");
        let remaining = std::fs::read_dir(&images_dir)
            .map(|entries| entries.count())
            .unwrap_or(0);
        assert_eq!(remaining, 0);
    }
}

mod score_tests {
    use super::*;

    #[tokio::test]
    async fn test_submit_and_list_highest_first() {
        let (repo, game_id) = InMemoryMuseum::with_game("Art Quiz");
        let service = ScoreService::new(Arc::new(repo));

        for (player, value) in [("ann", 30), ("bob", 90), ("cid", 60)] {
            service
                .submit(SubmitScoreInput {
                    game_id,
                    player_name: player.to_string(),
                    score_value: value,
                })
                .await
                .unwrap();
        }

        let scores = service.list().await.unwrap();
        let values: Vec<i32> = scores.iter().map(|s| s.score.score_value).collect();
        assert_eq!(values, [90, 60, 30]);
        assert!(scores.iter().all(|s| s.game_name == "Art Quiz"));
    }

    #[tokio::test]
    async fn test_list_by_game_filters() {
        let (repo, quiz_id) = InMemoryMuseum::with_game("Art Quiz");
        let hunt_id = {
            let mut state = repo.state.lock().unwrap();
            let id = state.next();
            state.games.push(Game {
                game_id: id,
                game_name: "Treasure Hunt".to_string(),
                description: String::new(),
                game_type: "game".to_string(),
                created_at: Utc::now(),
                is_active: true,
            });
            id
        };
        let service = ScoreService::new(Arc::new(repo));

        service
            .submit(SubmitScoreInput {
                game_id: quiz_id,
                player_name: "ann".to_string(),
                score_value: 10,
            })
            .await
            .unwrap();
        service
            .submit(SubmitScoreInput {
                game_id: hunt_id,
                player_name: "bob".to_string(),
                score_value: 20,
            })
            .await
            .unwrap();

        let scores = service.list_by_game(hunt_id).await.unwrap();
        assert_eq!(scores.len(), 1);
        assert_eq!(scores[0].score.player_name, "bob");
        assert_eq!(scores[0].game_name, "Treasure Hunt");
    }

    #[tokio::test]
    async fn test_submit_unknown_game_is_not_found() {
        let service = ScoreService::new(Arc::new(InMemoryMuseum::default()));

        let result = service
            .submit(SubmitScoreInput {
                game_id: 404,
                player_name: "ann".to_string(),
                score_value: 1,
            })
            .await;
        assert!(matches!(result, Err(MuseumError::NotFound("Game"))));
    }

    #[tokio::test]
    async fn test_submit_rejects_blank_player_name() {
        let (repo, game_id) = InMemoryMuseum::with_game("Art Quiz");
        let service = ScoreService::new(Arc::new(repo));

        let result = service
            .submit(SubmitScoreInput {
                game_id,
                player_name: "  ".to_string(),
                score_value: 1,
            })
            .await;
        assert!(matches!(result, Err(MuseumError::Validation(_))));
    }
}
