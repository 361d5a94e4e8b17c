//! Reactive state for the Stockroom frontend.
//!
//! The router publishes its current page through a [`Store`], an observable
//! value that consumers subscribe to explicitly.

pub mod store;

pub use store::{Store, SubscriberId, Subscription};
