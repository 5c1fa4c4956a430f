//! Event coalescing for bursty host notifications.

mod debounce;

pub use debounce::{debounce, Debounced};
