//! Startup Seeding
//!
//! Populates an empty database with the default employee accounts and
//! games. Runs once per startup; tables that already have rows are
//! left alone.

use auth::domain::entity::NewEmployee;
use auth::domain::repository::EmployeeRepository;
use auth::PgEmployeeRepository;
use museum::domain::entity::NewGame;
use museum::domain::repository::GameRepository;
use museum::PgMuseumRepository;
use platform::password::hash_password;

const DEFAULT_PASSWORD: &str = "password123";

/// Seed the default employee accounts if the table is empty
pub async fn seed_employees(repo: &PgEmployeeRepository) -> anyhow::Result<()> {
    if repo.count().await? > 0 {
        return Ok(());
    }

    // Key derivation is CPU-bound; keep it off the async workers even
    // though this only runs on first startup.
    let hashes = tokio::task::spawn_blocking(|| {
        (hash_password(DEFAULT_PASSWORD), hash_password(DEFAULT_PASSWORD))
    })
    .await?;

    for (username, full_name, password_hash) in [
        ("admin", "Museum Administrator", hashes.0),
        ("guide", "Museum Guide", hashes.1),
    ] {
        repo.create(&NewEmployee {
            username: username.to_string(),
            password_hash,
            full_name: full_name.to_string(),
            is_active: true,
        })
        .await?;
        tracing::info!(username, "Seeded employee account");
    }

    Ok(())
}

/// Seed the default games if the table is empty
pub async fn seed_games(repo: &PgMuseumRepository) -> anyhow::Result<()> {
    if repo.count().await? > 0 {
        return Ok(());
    }

    let games = [
        (
            "Art Quiz",
            "Test your knowledge of the paintings on display",
            "quiz",
        ),
        (
            "Treasure Hunt",
            "Find the hidden artifacts across the exhibition halls",
            "game",
        ),
        (
            "History Timeline",
            "Put historical events in the right order",
            "quiz",
        ),
    ];

    for (game_name, description, game_type) in games {
        repo.create(&NewGame {
            game_name: game_name.to_string(),
            description: description.to_string(),
            game_type: game_type.to_string(),
            is_active: true,
        })
        .await?;
        tracing::info!(game_name, "Seeded game");
    }

    Ok(())
}
