use std::fs;
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::listen::debounce;
use crate::store::{Store, Subscription};

/// Errors surfaced by [`JsonStorage::save`].
///
/// [`JsonStorage::load`] swallows these and falls back to the default bag;
/// malformed persisted state must never reach the store or the UI.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("failed to access storage file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode state: {0}")]
    Json(#[from] serde_json::Error),
}

/// JSON-on-disk persistence for a state bag.
///
/// Persistence is a side-effecting listener attached to a store, not part
/// of the store itself: [`attach`](JsonStorage::attach) subscribes a
/// debounced save so bursts of updates produce one write.
pub struct JsonStorage<T> {
    path: PathBuf,
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonStorage<T>
where
    T: Serialize + DeserializeOwned + Default,
{
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _marker: PhantomData,
        }
    }

    /// Load the persisted bag, or the default bag when the file is absent
    /// or unreadable. Parse failures are logged and discarded.
    pub fn load(&self) -> T {
        match self.try_load() {
            Ok(bag) => bag,
            Err(PersistError::Io(err)) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no persisted state, using defaults");
                T::default()
            }
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    %err,
                    "discarding persisted state, using defaults"
                );
                T::default()
            }
        }
    }

    fn try_load(&self) -> Result<T, PersistError> {
        let data = fs::read(&self.path)?;
        Ok(serde_json::from_slice(&data)?)
    }

    /// Serialize and write the bag.
    pub fn save(&self, bag: &T) -> Result<(), PersistError> {
        let data = serde_json::to_vec_pretty(bag)?;
        fs::write(&self.path, data)?;
        Ok(())
    }

    /// Attach this storage to a store as a debounced-save listener.
    ///
    /// Every committed update schedules a save of the new bag; updates
    /// within `window` collapse to one write of the latest bag. Failed
    /// writes are logged and never propagate. Unsubscribing detaches the
    /// listener and flushes a pending save.
    pub fn attach(self, store: &Store<T>, window: Duration) -> Subscription<T>
    where
        T: Send + Sync + 'static,
    {
        let saver = debounce(
            move |bag: Arc<T>| {
                if let Err(err) = self.save(&bag) {
                    tracing::warn!(%err, "failed to persist state");
                }
            },
            window,
        );
        store.subscribe(move |bag| saver.call(Arc::clone(bag)))
    }
}
