//! Cancellation-on-detach for asynchronous callbacks.

mod scope;

pub use scope::ScopeGuard;
