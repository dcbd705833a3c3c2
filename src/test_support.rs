//! Shared helpers for the test modules.
//!
//! Several tests mutate process environment variables (the Spanner client
//! reads SPANNER_EMULATOR_HOST from the environment), so everything that
//! touches the environment holds [`lock_env`] for the duration of the test.
//! Store-backed tests run against the local Spanner emulator and skip
//! themselves when it is not reachable.

use crate::app::api_router;
use crate::config::Config;
use crate::state::{AppState, LazyStore};
use crate::store::KeywordStore;
use axum::Router;
use std::sync::{Arc, Mutex, MutexGuard};

static ENV_LOCK: Mutex<()> = Mutex::new(());

pub fn lock_env() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

pub fn emulator_config(instance: &str, database: &str) -> Config {
    Config {
        spanner_emulator_host: Some("localhost:9010".to_string()),
        spanner_project: "test-project".to_string(),
        spanner_instance: instance.to_string(),
        spanner_database: database.to_string(),
        port: 3001,
        host: "0.0.0.0".to_string(),
        public_dir: "public".to_string(),
    }
}

/// State with an empty connection cell and no reachable store, for tests
/// that must not touch the database.
pub fn offline_state() -> AppState {
    AppState {
        store: LazyStore::new(),
        config: Arc::new(emulator_config("offline-instance", "offline-db")),
    }
}

/// Connect to the local Spanner emulator, or None (with a note on stderr)
/// when it is not running. Callers must hold [`lock_env`].
pub async fn emulator_store(instance: &str, database: &str) -> Option<(Config, KeywordStore)> {
    unsafe {
        std::env::set_var("SPANNER_EMULATOR_HOST", "localhost:9010");
    }

    let config = emulator_config(instance, database);
    match KeywordStore::connect(&config).await {
        Ok(store) => Some((config, store)),
        Err(err) => {
            eprintln!("skipping test (Spanner emulator unavailable): {err:#}");
            None
        }
    }
}

/// An API router wired to an emulator-backed store, or None when the
/// emulator is not running. Callers must hold [`lock_env`].
pub async fn emulator_app(instance: &str, database: &str) -> Option<Router> {
    let (config, store) = emulator_store(instance, database).await?;
    let state = AppState {
        store: LazyStore::preconnected(store),
        config: Arc::new(config),
    };
    Some(api_router(state))
}
