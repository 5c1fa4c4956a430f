//! Debounced JSON persistence, attached to stores as a listener.

mod storage;

pub use storage::{JsonStorage, PersistError};
