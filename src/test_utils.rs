//! Test utilities for Fyyur
//!
//! Provides helpers for creating isolated test environments with:
//! - In-memory SQLite databases (one per test)
//! - AppState factories
//! - Test data generators

use chrono::{DateTime, Utc};
use migration::MigratorTrait;
use sea_orm::{ActiveModelTrait, ConnectOptions, Database, DatabaseConnection, Set};

use crate::{
    config::{Config, LogFormat},
    db::{
        entities::{artist, show, venue},
        genres,
    },
    state::AppState,
};

/// Setup an in-memory SQLite database with all migrations applied
///
/// Each call creates a fresh, isolated database perfect for parallel testing.
/// The pool is pinned to a single connection since every SQLite in-memory
/// connection is its own database.
pub async fn setup_test_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(options)
        .await
        .expect("Failed to create in-memory database");

    migration::Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Create a test configuration with sensible defaults
pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        server_host: "127.0.0.1".to_string(),
        server_port: 5000,
        run_migrations: true,
        log_format: LogFormat::Pretty,
        static_dir: "static".to_string(),
    }
}

/// Create a complete test AppState backed by an isolated database
pub async fn setup_test_app_state() -> AppState {
    let db = setup_test_db().await;
    AppState::new(db, test_config())
}

// ============================================================================
// Test Data Factories
// ============================================================================

/// Create a test venue in the database
pub async fn create_test_venue(
    db: &DatabaseConnection,
    name: &str,
    city: &str,
    state: &str,
) -> venue::Model {
    let venue = venue::ActiveModel {
        name: Set(name.to_string()),
        city: Set(city.to_string()),
        state: Set(state.to_string()),
        address: Set(None),
        phone: Set(None),
        website: Set(None),
        genres: Set(genres::encode(&[])),
        image_link: Set(None),
        facebook_link: Set(None),
        seeking_talent: Set(false),
        seeking_description: Set(None),
        ..Default::default()
    };

    venue.insert(db).await.expect("Failed to insert test venue")
}

/// Create a test artist in the database
pub async fn create_test_artist(db: &DatabaseConnection, name: &str) -> artist::Model {
    let artist = artist::ActiveModel {
        name: Set(name.to_string()),
        city: Set("San Francisco".to_string()),
        state: Set("CA".to_string()),
        phone: Set(None),
        website: Set(None),
        genres: Set(genres::encode(&[])),
        image_link: Set(None),
        facebook_link: Set(None),
        seeking_venue: Set(false),
        seeking_description: Set(None),
        ..Default::default()
    };

    artist.insert(db).await.expect("Failed to insert test artist")
}

/// Create a test show in the database
pub async fn create_test_show(
    db: &DatabaseConnection,
    artist_id: i32,
    venue_id: i32,
    start_time: DateTime<Utc>,
) -> show::Model {
    let show = show::ActiveModel {
        artist_id: Set(artist_id),
        venue_id: Set(venue_id),
        start_time: Set(start_time),
        ..Default::default()
    };

    show.insert(db).await.expect("Failed to insert test show")
}
