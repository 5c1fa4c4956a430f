//! # Mural
//!
//! Observable application-state stores for panel-style front ends.
//!
//! Mural packages the state layer shared by browser-panel UIs (new-tab
//! pages, tipping panels, connection flows): each feature owns one store,
//! host events flow into store updates, and listeners re-derive what to
//! render from each committed snapshot.
//!
//! ## Store (state container)
//!
//! - `Store<T>` - single-owner state bag with whole-bag replacement,
//!   ordered synchronous listener notification, and per-listener panic
//!   isolation
//! - `Subscription` - idempotent listener deregistration
//!
//! ## Derived state
//!
//! - `background` - the background resolver, a pure decision tree from a
//!   state bag to the one background that should render, with a stable
//!   random fallback
//!
//! ## Collaborators
//!
//! - `scope` - silence async callbacks after their view is torn down
//! - `connect` - bounded flat-interval retry for connection initialization
//! - `listen` - trailing-edge debounce for bursty host events
//! - `persist` - debounced JSON persistence attached as a store listener

pub mod background;
pub mod connect;
pub mod listen;
pub mod persist;
pub mod scope;
pub mod store;

// Re-export main types for convenience
pub use background::{resolve_background, BackgroundKind, BackgroundState, ResolvedBackground};
pub use connect::{ConnectFlow, ConnectState, HostResponse};
pub use listen::{debounce, Debounced};
pub use persist::{JsonStorage, PersistError};
pub use scope::ScopeGuard;
pub use store::{Store, Subscription};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() {
        // Basic smoke test
        let store = Store::new(0u32);
        store.update(|n| *n += 42);
        assert_eq!(store.get(), 42);
    }
}
