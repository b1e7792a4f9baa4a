//! Museum Routers

use axum::middleware::from_fn_with_state;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;

use auth::{require_employee_token, AuthMiddlewareState};

use crate::application::exhibits::ExhibitService;
use crate::application::scores::ScoreService;
use crate::domain::repository::{ExhibitRepository, GameRepository, ScoreRepository};
use crate::infra::image_store::ImageStore;
use crate::infra::postgres::PgMuseumRepository;
use crate::presentation::handlers;

/// Create the exhibits router backed by PostgreSQL
///
/// Every exhibit route requires a valid employee bearer token.
pub fn exhibits_router(
    repo: PgMuseumRepository,
    images: Arc<ImageStore>,
    auth_state: AuthMiddlewareState,
) -> Router {
    exhibits_router_generic(repo, images, auth_state)
}

/// Create a generic exhibits router for any repository implementation
pub fn exhibits_router_generic<R>(
    repo: R,
    images: Arc<ImageStore>,
    auth_state: AuthMiddlewareState,
) -> Router
where
    R: ExhibitRepository + Send + Sync + 'static,
{
    let service = ExhibitService::new(Arc::new(repo), images);

    Router::new()
        .route(
            "/",
            get(handlers::list_exhibits::<R>).post(handlers::create_exhibit::<R>),
        )
        .route(
            "/{id}",
            get(handlers::get_exhibit::<R>)
                .put(handlers::update_exhibit::<R>)
                .delete(handlers::delete_exhibit::<R>),
        )
        .route_layer(from_fn_with_state(auth_state, require_employee_token))
        .with_state(service)
}

/// Create the scores router backed by PostgreSQL
///
/// Score routes are public; visitors submit scores without logging in.
pub fn scores_router(repo: PgMuseumRepository) -> Router {
    scores_router_generic(repo)
}

/// Create a generic scores router for any repository implementation
pub fn scores_router_generic<R>(repo: R) -> Router
where
    R: ScoreRepository + GameRepository + Send + Sync + 'static,
{
    let service = ScoreService::new(Arc::new(repo));

    Router::new()
        .route(
            "/",
            get(handlers::list_scores::<R>).post(handlers::create_score::<R>),
        )
        .route("/game/{game_id}", get(handlers::list_scores_by_game::<R>))
        .with_state(service)
}
