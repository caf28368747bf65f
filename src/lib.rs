//! Client-side core for the Velu mobile app.
//!
//! Holds the state the UI layer renders from: cross-screen stores,
//! install-prompt plumbing, the backend handle, and the design tokens and
//! transition math shared by every screen.

pub mod backend;
pub mod logging;
pub mod pwa;
pub mod reactive;
pub mod shell;
pub mod stores;
pub mod tokens;
pub mod transitions;

pub use pwa::{InstallPrompt, InstallPromptRelay, PromptOutcome, SharedPrompt};
pub use reactive::{Store, Subscription};
pub use shell::ClientShell;
pub use stores::{LoadingState, LoadingStore, NavigationDirection, NavigationStore};
