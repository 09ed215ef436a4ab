//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. Storage sits behind an `ItemRepository` trait object;
//! the concrete backend is chosen by feature flag.

use std::{sync::Arc, time::Duration};

use inventory_core::inventory::seed_items;
use inventory_core::storage::ItemRepository;

use crate::config::Config;

/// Shared application state.
///
/// Cloned for each request. Holds no per-request data: every request works
/// against storage through `item_repo`.
#[derive(Clone)]
pub struct AppState {
    /// Item repository.
    pub item_repo: Arc<dyn ItemRepository>,
    /// Per-request timeout applied by the router.
    pub request_timeout: Duration,
}

impl AppState {
    /// Creates an AppState around an already constructed repository.
    pub fn from_repository(item_repo: Arc<dyn ItemRepository>, config: &Config) -> Self {
        Self {
            item_repo,
            request_timeout: config.request_timeout(),
        }
    }

    /// Seeds the repository if configured to and the store is fresh.
    async fn seed(self, config: &Config) -> Result<Self, anyhow::Error> {
        if config.seed_data {
            let written = self.item_repo.seed(&seed_items()).await?;
            if written > 0 {
                tracing::info!(items = written, "Seeded item store");
            }
        }
        Ok(self)
    }
}

// ============================================================================
// Factory functions for the different storage backends
// ============================================================================

#[cfg(feature = "sqlite")]
mod sqlite {
    use super::*;
    use crate::storage::SqliteRepository;

    impl AppState {
        /// Creates AppState backed by the SQLite database at `config.database_path`.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            tracing::info!(path = %config.database_path, "Opening SQLite item store");
            let sqlite_repo = Arc::new(SqliteRepository::new(&config.database_path).await?);

            Self::from_repository(sqlite_repo, config).seed(config).await
        }
    }
}

#[cfg(not(feature = "sqlite"))]
mod inmemory {
    use super::*;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates AppState with in-memory storage.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            tracing::warn!("Using in-memory item store, data is lost on shutdown");
            let inmemory_repo = Arc::new(InMemoryRepository::new());

            Self::from_repository(inmemory_repo, config).seed(config).await
        }
    }
}

// ============================================================================
// Test support
// ============================================================================

#[cfg(test)]
mod test_support {
    use super::*;
    use crate::storage::InMemoryRepository;

    fn test_config() -> Config {
        Config {
            database_path: ":memory:".to_string(),
            request_timeout_seconds: 10,
            seed_data: true,
        }
    }

    impl Default for AppState {
        /// Empty in-memory store.
        fn default() -> Self {
            Self::from_repository(Arc::new(InMemoryRepository::new()), &test_config())
        }
    }

    impl AppState {
        /// In-memory store holding the three seed items.
        pub fn with_seed_data() -> Self {
            Self::from_repository(
                Arc::new(InMemoryRepository::with_items(seed_items())),
                &test_config(),
            )
        }

        /// Runs the startup path against an in-memory SQLite database.
        #[cfg(feature = "sqlite")]
        pub async fn with_sqlite_seed_data() -> Self {
            let repo = Arc::new(crate::storage::SqliteRepository::new_in_memory().await.unwrap());
            Self::from_repository(repo, &test_config())
                .seed(&test_config())
                .await
                .unwrap()
        }
    }
}
