use crate::config::Config;
use crate::store::KeywordStore;
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::OnceCell;

/// Shared application state, injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: LazyStore,
    pub config: Arc<Config>,
}

/// Lazily-initialized store connection, shared across requests.
///
/// The server binary connects at boot and hands the cell a ready store; the
/// function adapter leaves it empty so the first request of a warm instance
/// pays for the connection and later ones reuse it. The cell serializes
/// concurrent initialization attempts.
#[derive(Clone, Default)]
pub struct LazyStore {
    inner: Arc<OnceCell<KeywordStore>>,
}

impl LazyStore {
    /// An empty cell; the store connects on first use.
    pub fn new() -> Self {
        Self::default()
    }

    /// A cell pre-filled with an already-connected store.
    pub fn preconnected(store: KeywordStore) -> Self {
        Self {
            inner: Arc::new(OnceCell::new_with(Some(store))),
        }
    }

    /// Return the connected store, establishing the connection if this is
    /// the first call.
    pub async fn get_or_connect(&self, config: &Config) -> Result<&KeywordStore> {
        self.inner
            .get_or_try_init(|| KeywordStore::connect(config))
            .await
    }
}
