use std::sync::Arc;

use benchdb::{BenchmarkStore, StoreError};
use rocket::http::Status;
use tokio::task::spawn_blocking;

use crate::server::ApiError;

pub struct ServerState {
    pub store: Arc<BenchmarkStore>,
}

impl ServerState {
    pub fn new(store: BenchmarkStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Runs a store mutation on the blocking thread pool, since it may
    /// rewrite the snapshot file.
    pub async fn mutate<T, F>(
        &self,
        mutation: F,
    ) -> Result<T, ApiError>
    where
        T: Send + 'static,
        F: FnOnce(&BenchmarkStore) -> Result<T, StoreError> + Send + 'static,
    {
        let store = Arc::clone(&self.store);
        let outcome =
            spawn_blocking(move || mutation(&store)).await.map_err(|error| {
                tracing::error!(%error, "store task failed");
                ApiError::new(
                    Status::InternalServerError,
                    "Internal server error",
                )
            })?;
        Ok(outcome?)
    }
}
