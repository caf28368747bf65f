//! Application state stores.
//!
//! Each store is a small domain wrapper over [`crate::reactive::Store`]:
//! read accessors, one setter, and a subscription for observers. The
//! install-prompt store lives with its relay in [`crate::pwa`].

pub mod loading;
pub mod navigation;

pub use loading::{LoadingState, LoadingStore};
pub use navigation::{InvalidDirection, NavigationDirection, NavigationStore};
