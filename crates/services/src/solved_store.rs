use std::sync::{Arc, Mutex, MutexGuard};

use prep_core::model::{QuestionId, SolvedMap};
use storage::repository::KeyValueStore;

/// Key under which the solved map is stored as a JSON object.
pub const SOLVED_KEY: &str = "leetcode-checked-items";

#[derive(Default)]
struct State {
    map: SolvedMap,
    loaded: bool,
}

/// Per-question solved flags backed by the key/value store.
///
/// The map is read once by [`SolvedStore::load`]. Every later change
/// re-persists the whole map. Changes made before loading finishes only
/// touch memory.
///
/// Writes are serialized by `write_lock` and always encode the newest map,
/// so overlapping changes can never leave an older map in storage.
pub struct SolvedStore {
    kv: Arc<dyn KeyValueStore>,
    state: Mutex<State>,
    write_lock: tokio::sync::Mutex<()>,
}

impl SolvedStore {
    #[must_use]
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self {
            kv,
            state: Mutex::new(State::default()),
            write_lock: tokio::sync::Mutex::new(()),
        }
    }

    fn state(&self) -> MutexGuard<'_, State> {
        // A poisoned lock still holds a consistent map; keep using it.
        self.state
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Read the persisted map. Failures are logged and leave it empty.
    pub async fn load(&self) -> SolvedMap {
        let loaded = match self.kv.get(SOLVED_KEY).await {
            Ok(Some(raw)) => serde_json::from_str::<SolvedMap>(&raw).unwrap_or_else(|err| {
                log::warn!("ignoring malformed solved map: {err}");
                SolvedMap::new()
            }),
            Ok(None) => SolvedMap::new(),
            Err(err) => {
                log::warn!("failed to read solved map: {err}");
                SolvedMap::new()
            }
        };

        let mut state = self.state();
        // Pre-load writes stay on top of what was persisted.
        let mut merged = loaded;
        for (id, solved) in state.map.iter() {
            merged.set(id.clone(), solved);
        }
        state.map = merged;
        state.loaded = true;
        log::debug!("loaded {} solved entries", state.map.len());
        state.map.clone()
    }

    #[must_use]
    pub fn snapshot(&self) -> SolvedMap {
        self.state().map.clone()
    }

    /// Set one flag, keep all others, then persist. Returns the new map.
    pub async fn set(&self, id: QuestionId, solved: bool) -> SolvedMap {
        self.update(id, |_| solved).await
    }

    /// Flip one flag (absent counts as unsolved). Returns the new map.
    pub async fn toggle(&self, id: &QuestionId) -> SolvedMap {
        self.update(id.clone(), |current| !current).await
    }

    async fn update(&self, id: QuestionId, next: impl FnOnce(bool) -> bool) -> SolvedMap {
        let (snapshot, persist) = {
            let mut state = self.state();
            let value = next(state.map.is_solved(&id));
            state.map.set(id, value);
            (state.map.clone(), state.loaded)
        };
        if persist {
            self.persist().await;
        } else {
            log::debug!("solved map not loaded yet; change kept in memory only");
        }
        snapshot
    }

    async fn persist(&self) {
        let _write = self.write_lock.lock().await;
        let latest = self.snapshot();
        let encoded = match serde_json::to_string(&latest) {
            Ok(encoded) => encoded,
            Err(err) => {
                log::warn!("failed to encode solved map: {err}");
                return;
            }
        };
        if let Err(err) = self.kv.set(SOLVED_KEY, &encoded).await {
            log::warn!("failed to persist solved map: {err}");
        }
    }
}
