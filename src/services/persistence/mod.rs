//! Persistence of the weekend plan.
//!
//! The whole [`WeekendlyState`] is stored as one JSON blob under
//! [`STORAGE_KEY`]. Writes are debounced: every change cancels the pending
//! write and schedules a new one, so only the last state of a burst of edits
//! reaches storage. On startup the blob is read once, migrated and loaded;
//! anything unreadable is treated as absent.

mod memory;
pub mod migration;
mod sqlite;

pub use memory::MemoryBlobStore;
pub use sqlite::SqliteBlobStore;

use anyhow::{anyhow, Context, Result};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::models::state::WeekendlyState;
use crate::services::store::{Action, Store};

/// Key the serialized plan is stored under.
pub const STORAGE_KEY: &str = "weekendly_v1";
/// Quiet period before a change is written.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Durable key/value storage for serialized blobs.
#[cfg_attr(test, mockall::automock)]
pub trait BlobStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Storage handle shared between the session and the write task.
pub type SharedBlobStore = Arc<Mutex<dyn BlobStore + Send>>;

pub fn shared<S: BlobStore + Send + 'static>(storage: S) -> SharedBlobStore {
    Arc::new(Mutex::new(storage))
}

/// Read and migrate the persisted plan. Missing, unreadable or corrupt blobs
/// all yield `None`.
pub fn read_persisted_state(storage: &dyn BlobStore) -> Option<WeekendlyState> {
    let raw = match storage.get(STORAGE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            log::info!("No persisted plan found");
            return None;
        }
        Err(e) => {
            log::warn!("Failed to read persisted plan: {:#}", e);
            return None;
        }
    };

    match migration::parse_persisted_state(&raw) {
        Ok(state) => Some(state),
        Err(e) => {
            log::warn!(
                "Ignoring unreadable persisted plan ({} bytes): {:#}",
                raw.len(),
                e
            );
            None
        }
    }
}

/// Load the persisted plan into `store` via `LoadState`. Returns whether a
/// plan was loaded.
pub fn hydrate(store: &mut Store, storage: &dyn BlobStore) -> bool {
    let Some(state) = read_persisted_state(storage) else {
        return false;
    };

    log::info!(
        "Loaded plan with {} activities and {} scheduled items",
        state.activities.len(),
        state.schedule.len()
    );
    store.dispatch(Action::LoadState(Box::new(state)));
    true
}

/// Serialize `state` and write it under [`STORAGE_KEY`].
pub fn write_state(storage: &SharedBlobStore, state: &WeekendlyState) -> Result<()> {
    let payload = serde_json::to_string(state).context("Failed to serialize plan")?;
    let mut guard = storage
        .lock()
        .map_err(|e| anyhow!("Failed to acquire storage lock: {}", e))?;
    guard.set(STORAGE_KEY, &payload)
}

/// Debounced writer: the latest state wins, earlier pending writes are dropped.
pub struct PersistenceBridge {
    storage: SharedBlobStore,
    delay: Duration,
    runtime: Handle,
    pending: Option<JoinHandle<()>>,
}

impl PersistenceBridge {
    /// Create a bridge on the current tokio runtime.
    pub fn new(storage: SharedBlobStore, delay: Duration) -> Result<Self> {
        let runtime =
            Handle::try_current().context("Debounced persistence needs a tokio runtime")?;
        Ok(Self::with_runtime(storage, delay, runtime))
    }

    pub fn with_runtime(storage: SharedBlobStore, delay: Duration, runtime: Handle) -> Self {
        Self {
            storage,
            delay,
            runtime,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn storage(&self) -> &SharedBlobStore {
        &self.storage
    }

    /// Cancel any pending write and schedule one for `state`.
    pub fn schedule_write(&mut self, state: &WeekendlyState) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }

        let snapshot = state.clone();
        let storage = Arc::clone(&self.storage);
        let delay = self.delay;

        self.pending = Some(self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            match write_state(&storage, &snapshot) {
                Ok(()) => log::debug!("Persisted plan ({} items)", snapshot.schedule.len()),
                Err(e) => log::warn!("Failed to persist plan: {:#}", e),
            }
        }));
    }

    pub fn has_pending_write(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|pending| !pending.is_finished())
    }

    /// Wait for the pending write, if any, to land.
    pub async fn flush(&mut self) {
        if let Some(pending) = self.pending.take() {
            if let Err(e) = pending.await {
                if !e.is_cancelled() {
                    log::warn!("Persistence task failed: {}", e);
                }
            }
        }
    }

    /// Drop any pending write and store `state` right away.
    pub fn write_now(&mut self, state: &WeekendlyState) -> Result<()> {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
        write_state(&self.storage, state)
    }
}
