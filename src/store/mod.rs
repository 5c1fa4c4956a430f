//! Observable state stores.
//!
//! Stores hold one application-state bag per feature and fan out change
//! notifications to registered listeners after each committed update.

mod store;

pub use store::{Store, Subscription};
